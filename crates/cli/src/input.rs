//! Coordinate input: inline `--coords` strings or `x`/`y` tables (CSV, Parquet).

use anyhow::{bail, Context, Result};
use clap::Args;
use planar::Coord;
use polars::prelude::*;
use std::path::{Path, PathBuf};

/// Where to read coordinates from. Exactly one source is required.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct InputArgs {
    /// Inline coordinates: "x,y x,y ..."
    #[arg(long, allow_hyphen_values = true)]
    pub coords: Option<String>,
    /// Table with numeric `x` and `y` columns (.csv or .parquet)
    #[arg(long)]
    pub input: Option<PathBuf>,
}

impl InputArgs {
    pub fn load(&self) -> Result<Vec<Coord>> {
        match (&self.coords, &self.input) {
            (Some(s), _) => parse_coords(s),
            (None, Some(path)) => read_table(path),
            (None, None) => bail!("either --coords or --input is required"),
        }
    }

    /// Short description of the source for provenance records.
    pub fn describe(&self) -> String {
        match (&self.coords, &self.input) {
            (Some(s), _) => format!("inline:{s}"),
            (None, Some(path)) => path.display().to_string(),
            (None, None) => String::new(),
        }
    }
}

/// Parse a single "x,y" pair.
pub fn parse_coord(s: &str) -> Result<Coord> {
    let (x, y) = s
        .split_once(',')
        .with_context(|| format!("coordinate {s:?} is not of the form x,y"))?;
    let x: f64 = x
        .trim()
        .parse()
        .with_context(|| format!("bad x ordinate in {s:?}"))?;
    let y: f64 = y
        .trim()
        .parse()
        .with_context(|| format!("bad y ordinate in {s:?}"))?;
    Ok(Coord::new(x, y))
}

/// Parse whitespace-separated "x,y" pairs.
pub fn parse_coords(s: &str) -> Result<Vec<Coord>> {
    s.split_whitespace().map(parse_coord).collect()
}

/// Read the `x` and `y` columns of a CSV or Parquet file, in row order.
pub fn read_table(path: &Path) -> Result<Vec<Coord>> {
    let lf = match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()
            .with_context(|| format!("reading {}", path.display()))?,
        Some("parquet") => LazyFrame::scan_parquet(path, ScanArgsParquet::default())
            .with_context(|| format!("reading {}", path.display()))?,
        _ => bail!(
            "unsupported input {}: expected a .csv or .parquet file",
            path.display()
        ),
    };
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("selecting x,y columns from {}", path.display()))?;
    tracing::debug!(rows = df.height(), path = %path.display(), "input table");

    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Coord::new(x, y)),
            _ => bail!("row {row} of {} has a missing x or y", path.display()),
        })
        .collect()
}
