use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod commands;
mod input;
mod provenance;

use commands::{CentroidKind, SampleKind};
use input::{parse_coord, InputArgs};
use planar::sample::ReplayToken;
use provenance::Payload;

#[derive(Parser)]
#[command(name = "planar")]
#[command(about = "Robust planar geometry: predicates, intersections, centroids")]
struct Cmd {
    /// Log level for stderr output (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    log_level: tracing::Level,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Orientation of the third coordinate against the line through the first two
    Orient {
        #[command(flatten)]
        input: InputArgs,
        /// Write the JSON result here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Intersection of the segments (c0, c1) and (c2, c3)
    Intersect {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Centroid of the coordinates read as points, one polyline, or one ring
    Centroid {
        #[arg(long, value_enum, default_value_t = CentroidKind::Points)]
        kind: CentroidKind,
        #[command(flatten)]
        input: InputArgs,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Signed area and winding of the ring through the coordinates
    Area {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Distinct coordinates in first-seen order
    Dedupe {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Coordinates sorted radially around a focal point
    SortRadial {
        /// Focal point "x,y"
        #[arg(long, allow_hyphen_values = true)]
        focus: String,
        #[command(flatten)]
        input: InputArgs,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Draw reproducible random inputs
    Sample {
        #[arg(long, value_enum)]
        kind: SampleKind,
        #[arg(long, default_value_t = 12)]
        count: usize,
        #[arg(long, default_value_t = 1.0)]
        extent: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(cmd.log_level)
        .with_writer(std::io::stderr)
        .init();

    match cmd.action {
        Action::Orient { input, out } => {
            let report = commands::orient(&input.load()?)?;
            emit("orient", input_params(&input), &report, out.as_deref())
        }
        Action::Intersect { input, out } => {
            let report = commands::intersect(&input.load()?)?;
            emit("intersect", input_params(&input), &report, out.as_deref())
        }
        Action::Centroid { kind, input, out } => {
            let report = commands::centroid(kind, &input.load()?)?;
            let mut params = input_params(&input);
            params["kind"] = json!(kind);
            emit("centroid", params, &report, out.as_deref())
        }
        Action::Area { input, out } => {
            let report = commands::area(&input.load()?)?;
            emit("area", input_params(&input), &report, out.as_deref())
        }
        Action::Dedupe { input, out } => {
            let coords = input.load()?;
            let report = commands::dedupe(&coords);
            tracing::info!(input = coords.len(), unique = report.count, "dedupe");
            emit("dedupe", input_params(&input), &report, out.as_deref())
        }
        Action::SortRadial { focus, input, out } => {
            let centre = parse_coord(&focus).context("parsing --focus")?;
            let report = commands::radial(centre, &input.load()?);
            let mut params = input_params(&input);
            params["focus"] = json!([centre.x, centre.y]);
            emit("sort-radial", params, &report, out.as_deref())
        }
        Action::Sample {
            kind,
            count,
            extent,
            seed,
            index,
            out,
        } => {
            let report = commands::sample(kind, count, extent, ReplayToken::new(seed, index))?;
            let params = json!({
                "kind": format!("{kind:?}"),
                "count": count,
                "extent": extent,
                "seed": seed,
                "index": index,
            });
            emit("sample", params, &report, out.as_deref())
        }
        Action::Report => report(),
    }
}

fn input_params(input: &InputArgs) -> Value {
    json!({ "input": input.describe() })
}

/// Print `report` as JSON, or write it to `out` together with a provenance sidecar.
fn emit<T: Serialize>(command: &str, params: Value, report: &T, out: Option<&Path>) -> Result<()> {
    let body = serde_json::to_string_pretty(report)?;
    let Some(out) = out else {
        println!("{body}");
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, body).with_context(|| format!("writing {}", out.display()))?;
    let prov = provenance::write_sidecar(out, &Payload::new(command, params))?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), command, "wrote");
    Ok(())
}

fn report() -> Result<()> {
    let doc = provenance::document(&Payload::new("report", json!({})), &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
