use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use eulerian::{evaluate_all, random_simple, read_graphs, Outcome, Strategy};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Euler circuit workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search every graph in a directory of graph files and score the results
    Score {
        /// Directory holding graph files
        #[arg(long, default_value = "tests/data")]
        dir: PathBuf,

        /// Search to run on each graph
        #[arg(long, value_enum, default_value_t = StrategyArg::Backtracking)]
        strategy: StrategyArg,

        /// Expected Euler circuits in a file, as NAME=COUNT (repeatable)
        #[arg(long = "expect", value_parser = parse_expectation)]
        expectations: Vec<(String, usize)>,

        /// Write a JSON report here
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Print random simple graphs in the text graph format
    Generate {
        #[arg(long, default_value_t = 0)]
        seed: u64,

        #[arg(long)]
        vertices: usize,

        /// An edge joins each pair with probability 1/density
        #[arg(long, default_value_t = 2)]
        density: u32,

        /// Number of graphs, seeded seed, seed+1, ...
        #[arg(long, default_value_t = 1)]
        count: u64,
    },
    /// Run the criterion benchmarks
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Backtracking,
    Hierholzer,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Backtracking => Strategy::Backtracking,
            StrategyArg::Hierholzer => Strategy::Hierholzer,
        }
    }
}

#[derive(Serialize)]
struct FileReport {
    file: String,
    graphs: usize,
    valid: usize,
    invalid: usize,
    no_circuit: usize,
    stopped_early: Option<String>,
    expected: Option<usize>,
    points: Option<Points>,
    outcomes: Vec<Outcome>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
struct Points {
    earned: usize,
    possible: usize,
}

/// Points for one file: a file expected to hold no circuits loses a point per
/// graph wrongly solved, otherwise each expected circuit found earns one.
fn file_points(graphs: usize, valid: usize, expected: usize) -> Points {
    if expected == 0 {
        Points { earned: graphs.saturating_sub(valid), possible: graphs }
    } else {
        Points { earned: valid.min(expected), possible: expected }
    }
}

fn parse_expectation(arg: &str) -> Result<(String, usize), String> {
    let (name, count) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=COUNT, got {arg:?}"))?;
    let count = count
        .trim()
        .parse()
        .map_err(|e| format!("invalid count in {arg:?}: {e}"))?;
    Ok((name.trim().to_owned(), count))
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::builder().with_default_directive(LevelFilter::INFO.into()).from_env_lossy())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Score { dir, strategy, expectations, report } => {
            let expectations: HashMap<String, usize> = expectations.into_iter().collect();
            score(&dir, strategy.into(), &expectations, report.as_deref())
        }
        Commands::Generate { seed, vertices, density, count } => generate(seed, vertices, density, count),
        Commands::Bench { quick } => run_benchmarks(quick),
    }
}

fn score(
    dir: &Path,
    strategy: Strategy,
    expectations: &HashMap<String, usize>,
    report: Option<&Path>,
) -> Result<()> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read graph directory {}", dir.display()))?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.is_file())
        .collect();
    files.sort();

    let mut reports = Vec::with_capacity(files.len());
    let mut total_valid = 0;
    let mut total = Points { earned: 0, possible: 0 };
    let mut matched = HashSet::new();

    for path in &files {
        let name = path.display().to_string();
        let key = path.file_name().map(|f| f.to_string_lossy().into_owned()).unwrap_or_default();
        println!("\n-------  Test {name}  -------\n");

        let mut loaded =
            read_graphs(path).with_context(|| format!("Failed to read graph file {name}"))?;
        if let Some(err) = &loaded.error {
            tracing::warn!(file = %name, %err, "graph file ends early");
        }

        let start = Instant::now();
        let outcomes = evaluate_all(&mut loaded.graphs, strategy);
        let elapsed = start.elapsed();

        for (graph, outcome) in loaded.graphs.iter().zip(&outcomes) {
            println!(
                "Graph has {} vertices, and {} edges.",
                graph.total_vertices(),
                graph.total_edges()
            );
            match outcome {
                Outcome::NoCircuit => println!("Graph has no Euler Circuit"),
                Outcome::Valid(_) => println!("Valid Euler Circuit"),
                Outcome::Invalid(defect) => println!("Invalid Euler Circuit: {defect}"),
            }
        }

        let valid = outcomes.iter().filter(|o| o.is_valid()).count();
        let invalid = outcomes.iter().filter(|o| matches!(o, Outcome::Invalid(_))).count();
        println!("\nEuler circuits found: {valid} of {} graphs in {elapsed:.2?}", outcomes.len());
        total_valid += valid;

        let expected = expectations.get(&key).copied();
        let points = expected.map(|expected| {
            matched.insert(key.clone());
            let points = file_points(outcomes.len(), valid, expected);
            println!("Euler circuits expected: {expected}, found: {valid}");
            println!("Score: {} out of {}", points.earned, points.possible);
            total.earned += points.earned;
            total.possible += points.possible;
            points
        });

        reports.push(FileReport {
            file: name,
            graphs: outcomes.len(),
            valid,
            invalid,
            no_circuit: outcomes.len() - valid - invalid,
            stopped_early: loaded.error.map(|e| e.to_string()),
            expected,
            points,
            outcomes,
        });
    }

    println!("\nTotal valid Euler circuits: {total_valid}");
    if total.possible > 0 {
        println!("Final score: {} out of {}", total.earned, total.possible);
    }
    for name in expectations.keys().filter(|name| !matched.contains(*name)) {
        tracing::warn!(file = %name, "no graph file matches expectation");
    }

    if let Some(path) = report {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&reports)?;
        fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}

fn generate(seed: u64, vertices: usize, density: u32, count: u64) -> Result<()> {
    for seed in graph_seeds(seed, count) {
        let graph = random_simple(seed, vertices, density)?;
        println!("U {}", graph.total_vertices());
        print!("{graph}");
        println!();
    }
    Ok(())
}

/// `count` consecutive seeds starting at `seed`, wrapping past `u64::MAX`.
fn graph_seeds(seed: u64, count: u64) -> impl Iterator<Item = u64> {
    (0..count).map(move |offset| seed.wrapping_add(offset))
}

fn run_benchmarks(quick: bool) -> Result<()> {
    let start = Instant::now();
    let mut cmd = Command::new("cargo");
    cmd.args(["bench", "--bench", "euler_benchmark"]);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd.status().context("Failed to run benchmarks")?;
    if !status.success() {
        anyhow::bail!("Benchmarks failed");
    }
    println!("Finished benchmarks in {:.2?}", start.elapsed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_for_files_without_circuits() {
        assert_eq!(file_points(4, 0, 0), Points { earned: 4, possible: 4 });
        assert_eq!(file_points(4, 1, 0), Points { earned: 3, possible: 4 });
    }

    #[test]
    fn points_for_files_with_circuits() {
        assert_eq!(file_points(6, 5, 6), Points { earned: 5, possible: 6 });
        assert_eq!(file_points(6, 6, 4), Points { earned: 4, possible: 4 });
    }

    #[test]
    fn seeds_wrap_around() {
        assert_eq!(graph_seeds(u64::MAX - 1, 3).collect::<Vec<_>>(), vec![u64::MAX - 1, u64::MAX, 0]);
        assert_eq!(graph_seeds(7, 0).count(), 0);
    }

    #[test]
    fn parses_expectations() {
        assert_eq!(parse_expectation("small=4"), Ok(("small".to_owned(), 4)));
        assert_eq!(parse_expectation(" noEuler = 0"), Ok(("noEuler".to_owned(), 0)));
        assert!(parse_expectation("small").is_err());
        assert!(parse_expectation("small=-1").is_err());
    }

    #[test]
    fn score_accepts_repeated_expectations() {
        let cli = Cli::try_parse_from([
            "xtask",
            "score",
            "--expect",
            "small=4",
            "--expect",
            "noEuler=0",
        ])
        .unwrap();
        let Commands::Score { expectations, .. } = cli.command else {
            panic!("expected score command");
        };
        assert_eq!(expectations, vec![("small".to_owned(), 4), ("noEuler".to_owned(), 0)]);
    }
}
