//! CLI surface for the page-replacement simulation engine.
//!
//! Parses the reference string and frame count, runs the requested policies
//! and renders each trace as a frame-occupancy grid. All string parsing
//! happens here; the engine only ever sees well-typed input.

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use pagesim::sim::{Policy, Step, steps};
use pagesim::workload::random_reference_string;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Simulate FIFO, LRU and OPT page replacement over a reference string"
)]
struct Cli {
    /// Number of memory frames
    #[arg(short, long)]
    frames: usize,

    /// Replacement policy to run: fifo, lru, opt or all
    #[arg(short, long, default_value = "all")]
    policy: String,

    /// Comma-separated reference string, e.g. "1,2,3,4,1,2,5"
    #[arg(short, long, required_unless_present = "random", conflicts_with = "random")]
    refs: Option<String>,

    /// Generate a random reference string instead of supplying --refs
    #[arg(long)]
    random: bool,

    /// Length of the generated reference string
    #[arg(long, default_value_t = 20, requires = "random")]
    length: usize,

    /// Smallest page number to draw
    #[arg(long, default_value_t = 0, requires = "random")]
    min: u32,

    /// Largest page number to draw
    #[arg(long, default_value_t = 9, requires = "random")]
    max: u32,

    /// RNG seed for a reproducible generated string
    #[arg(long, requires = "random")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let policies = select_policies(&cli.policy)?;
    let refs = resolve_reference_string(&cli)?;
    if cli.random {
        println!(
            "reference string: {}",
            refs.iter()
                .map(|page| page.to_string())
                .collect::<Vec<_>>()
                .join(",")
        );
    }

    for policy in policies {
        let run: Vec<Step<u32>> = steps(policy, &refs, cli.frames)
            .with_context(|| format!("cannot simulate {policy}"))?
            .collect();
        let faults = run.iter().filter(|step| step.outcome.is_fault()).count();

        println!();
        println!("== {} ==", policy.name().to_uppercase());
        println!("total page faults: {faults} / {}", refs.len());
        print!("{}", render_gantt(&run));
    }

    Ok(())
}

fn select_policies(name: &str) -> Result<Vec<Policy>> {
    if name.eq_ignore_ascii_case("all") {
        return Ok(Policy::ALL.to_vec());
    }
    let policy = name.parse::<Policy>()?;
    Ok(vec![policy])
}

fn resolve_reference_string(cli: &Cli) -> Result<Vec<u32>> {
    if cli.random {
        if cli.min > cli.max {
            bail!("--min ({}) must not exceed --max ({})", cli.min, cli.max);
        }
        let mut rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        return Ok(random_reference_string(
            &mut rng,
            cli.length,
            cli.min..=cli.max,
        ));
    }
    // clap guarantees --refs is present when --random is absent.
    let input = cli.refs.as_deref().unwrap_or_default();
    parse_reference_string(input)
}

fn parse_reference_string(input: &str) -> Result<Vec<u32>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        bail!("reference string is empty");
    }
    trimmed
        .split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<u32>()
                .with_context(|| format!("invalid page number {token:?} in reference string"))
        })
        .collect()
}

/// Renders the trace as a grid: one column per step, one row per frame slot,
/// with the referenced page and a fault marker above each column.
fn render_gantt(run: &[Step<u32>]) -> String {
    let width = run
        .iter()
        .map(|step| step.page.to_string().len())
        .max()
        .unwrap_or(1);
    let rows = run.iter().map(|step| step.resident.len()).max().unwrap_or(0);

    let mut out = String::new();

    out.push_str("ref    |");
    for step in run {
        push_cell(&mut out, &step.page.to_string(), width);
    }
    out.push('\n');

    out.push_str("fault  |");
    for step in run {
        let marker = if step.outcome.is_fault() { "*" } else { "" };
        push_cell(&mut out, marker, width);
    }
    out.push('\n');

    for row in 0..rows {
        out.push_str(&format!("frame {row}|"));
        for step in run {
            match step.resident.get(row) {
                Some(page) => push_cell(&mut out, &page.to_string(), width),
                None => push_cell(&mut out, ".", width),
            }
        }
        out.push('\n');
    }

    out
}

fn push_cell(out: &mut String, content: &str, width: usize) {
    out.push_str(&format!(" {content:>width$}"));
}
