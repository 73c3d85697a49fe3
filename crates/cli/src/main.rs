use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use guillotine::api::{
    format_instance, grid_instance, nested_strips, parse_instance, pinwheel, scattered, staircase,
    PartitionTester, Point, Rect, ScatteredParams, SplitStrategy, StaircaseParams, TesterCfg,
};
use serde::Serialize;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

/// Side length of the square used by the `strips` family.
const STRIPS_WIDTH: i64 = 100_000;
/// Cell size of the `grid` family.
const GRID_CELL: i64 = 10;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Guillotine partition checker and instance generator")]
struct Cmd {
    /// Log at DEBUG instead of INFO (logs go to stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Read an instance and print YES or NO
    Check {
        /// Instance file; reads stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = StrategyArg::MiddleOut)]
        strategy: StrategyArg,
        /// Reject overlapping rectangles before testing
        #[arg(long)]
        validate: bool,
        /// List the cuts on stderr
        #[arg(long)]
        cuts: bool,
    },
    /// Write a generated instance in the input format
    Gen {
        #[arg(value_enum)]
        family: Family,
        /// Size: rectangles (staircase), strip pairs (strips), side (grid),
        /// tiles per side (scattered), unit (pinwheel)
        #[arg(long, default_value_t = 10)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Keep colliding rectangles (scattered only)
        #[arg(long)]
        overlap: bool,
        /// Output file; also writes a provenance sidecar next to it
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    Leftmost,
    MiddleOut,
}

impl From<StrategyArg> for SplitStrategy {
    fn from(s: StrategyArg) -> Self {
        match s {
            StrategyArg::Leftmost => SplitStrategy::LeftmostScan,
            StrategyArg::MiddleOut => SplitStrategy::MiddleOut,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
enum Family {
    Staircase,
    Strips,
    Grid,
    Scattered,
    Pinwheel,
}

/// Parameters recorded in the provenance sidecar of `gen --out`.
#[derive(Serialize)]
struct GenParams {
    family: Family,
    count: usize,
    seed: u64,
    overlap: bool,
    rects: usize,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Check {
            input,
            strategy,
            validate,
            cuts,
        } => check(input.as_deref(), strategy, validate, cuts),
        Action::Gen {
            family,
            count,
            seed,
            overlap,
            out,
        } => gen_instance(family, count, seed, overlap, out.as_deref()),
        Action::Report => report(),
    }
}

fn check(input: Option<&Path>, strategy: StrategyArg, validate: bool, cuts: bool) -> Result<()> {
    let text = read_input(input)?;
    let rects = parse_instance(&text).context("parsing instance")?;
    tracing::info!(n = rects.len(), ?strategy, validate, "check");
    let tester = PartitionTester::new(TesterCfg {
        strategy: strategy.into(),
        validate,
    });
    let outcome = tester
        .run(&rects)
        .context("input violates the non-overlap precondition")?;
    if cuts {
        for cut in &outcome.cuts {
            eprintln!("{cut}");
        }
    }
    println!("{}", outcome.verdict);
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => fs::read_to_string(p).with_context(|| format!("reading {}", p.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(text)
        }
    }
}

fn generate(family: Family, count: usize, seed: u64, overlap: bool) -> Result<Vec<Rect>> {
    let rects = match family {
        Family::Staircase => staircase(
            StaircaseParams {
                count,
                ..StaircaseParams::default()
            },
            seed,
        )?,
        Family::Strips => nested_strips(count, STRIPS_WIDTH)?,
        Family::Grid => grid_instance(count, count, GRID_CELL, GRID_CELL)?,
        Family::Scattered => scattered(
            ScatteredParams {
                tiles: count,
                allow_overlap: overlap,
                ..ScatteredParams::default()
            },
            seed,
        )?,
        Family::Pinwheel => {
            let unit = i64::try_from(count.max(1)).context("pinwheel unit too large")?;
            pinwheel(Point::new(0, 0), unit)
        }
    };
    Ok(rects)
}

fn gen_instance(
    family: Family,
    count: usize,
    seed: u64,
    overlap: bool,
    out: Option<&Path>,
) -> Result<()> {
    let rects = generate(family, count, seed, overlap)?;
    let text = format_instance(&rects);
    let Some(out) = out else {
        print!("{text}");
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    fs::write(out, text).with_context(|| format!("writing {}", out.display()))?;
    let params = serde_json::to_value(GenParams {
        family,
        count,
        seed,
        overlap,
        rects: rects.len(),
    })?;
    let prov = provenance::write_sidecar(out, provenance::Payload::new(params))?;
    tracing::info!(
        out = %out.display(),
        provenance = %prov.display(),
        n = rects.len(),
        "gen"
    );
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": guillotine::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
