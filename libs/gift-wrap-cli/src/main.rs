//! Gift-Wrap CLI - convex hulls of point sets from the command line
//!
//! Reads whitespace-delimited point sets from a file or stdin and prints,
//! per case, the face count followed by one `3 a b c` line per face.
//!
//! ```text
//! $ printf '1\n4\n0 0 0\n1 0 0\n0 1 0\n0 0 1\n' | gift-wrap
//! 4
//! 3 0 1 3
//! 3 0 2 1
//! 3 0 3 2
//! 3 1 2 3
//! ```

use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use config::constants::{CoplanarPolicy, HullConfig, EPSILON};
use gift_wrap::{check_convex, parse_batch, parse_point_set, write_hull, BatchSolver, Hull, Point};

/// Slack for `--validate`, as a multiple of the case tolerance.
const VALIDATION_SLACK_FACTOR: f64 = 1.0e3;

#[derive(Parser, Debug)]
#[command(name = "gift-wrap")]
#[command(about = "Triangulated 3D convex hulls by gift wrapping", long_about = None)]
struct Cli {
    /// Input file; reads stdin when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Input is a single case without a leading case count
    #[arg(long)]
    single: bool,

    /// Tolerance for every geometric comparison
    #[arg(long, default_value_t = EPSILON)]
    tolerance: f64,

    /// Scale the tolerance by each case's coordinate extent
    #[arg(long)]
    relative_tolerance: bool,

    /// Tie-breaking policy for coplanar points
    #[arg(long, default_value_t = CoplanarPolicy::default())]
    coplanar: CoplanarPolicy,

    /// Solve cases on all cores
    #[arg(long)]
    parallel: bool,

    /// Check that every point lies inside every face before printing
    #[arg(long)]
    validate: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Face count and `3 a b c` lines per case
    Text,
    /// One JSON object per hull
    Json,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

fn render<W: Write>(out: &mut W, hulls: &[Hull], format: Format, single: bool) -> Result<()> {
    match format {
        Format::Text => {
            for hull in hulls {
                write_hull(out, hull)?;
            }
        }
        Format::Json => {
            match hulls {
                [hull] if single => serde_json::to_writer_pretty(&mut *out, hull)?,
                _ => serde_json::to_writer_pretty(&mut *out, hulls)?,
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Builds the cases in order up to the first failure. Returns the hulls
/// finished before it, which are still printed, and the failure itself.
fn solve_cases(solver: &BatchSolver, cases: &[Vec<Point>], validate: bool) -> (Vec<Hull>, Option<anyhow::Error>) {
    let mut hulls = Vec::with_capacity(cases.len());
    for (i, (result, points)) in solver.solve(cases).into_iter().zip(cases).enumerate() {
        let case = i + 1;
        let checked = result
            .with_context(|| format!("Case {case}: failed to build hull"))
            .and_then(|hull| {
                if validate {
                    let slack = solver.config_for(points).tolerance * VALIDATION_SLACK_FACTOR;
                    check_convex(points, hull.faces(), slack)
                        .with_context(|| format!("Case {case}: hull failed validation"))?;
                }
                Ok(hull)
            });
        match checked {
            Ok(hull) => {
                log::info!("case {case}: {} points, {} faces", points.len(), hull.face_count());
                hulls.push(hull);
            }
            Err(err) => return (hulls, Some(err)),
        }
    }
    (hulls, None)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = HullConfig::new(cli.tolerance)
        .context("Invalid --tolerance")?
        .with_coplanar(cli.coplanar);
    let solver = BatchSolver::new(config)
        .relative_tolerance(cli.relative_tolerance)
        .parallel(cli.parallel);

    let input = read_input(cli.input.as_deref())?;
    let cases = if cli.single {
        vec![parse_point_set(&input).context("Failed to parse point set")?]
    } else {
        parse_batch(&input).context("Failed to parse batch input")?
    };
    log::info!(
        "read {} case(s), tolerance {:e}, coplanar policy {}",
        cases.len(),
        config.tolerance,
        config.coplanar
    );

    let (hulls, failure) = solve_cases(&solver, &cases, cli.validate);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render(&mut out, &hulls, cli.format, cli.single)?;
    out.flush().context("Failed to write output")?;
    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
