use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use stone_merge::compare::{leaderboard, ComplexityReport};
use stone_merge::{parse_piles_with_limit, Analysis, AnalysisConfig, MergeStep, PileSequence};

#[derive(Parser, Debug)]
#[command(name = "stone-merge", about = "Stone merge interval DP, step by step")]
struct Cli {
    /// Largest pile count accepted.
    #[arg(long, global = true, default_value_t = 64)]
    max_piles: usize,
    /// Largest pile count for naive recursion.
    #[arg(long, global = true, default_value_t = 10)]
    recursive_limit: usize,
    /// Debug-level logging when RUST_LOG is unset.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Optimal cost, DP table and the merge order it implies.
    Solve {
        /// Pile weights, e.g. `1,3,3,2,4` or `1 3 3 2 4`.
        #[arg(required = true, num_args = 1..)]
        piles: Vec<String>,
        /// Print the cost table.
        #[arg(long)]
        table: bool,
    },
    /// Greedy merge trace against the optimum.
    Greedy {
        /// Pile weights.
        #[arg(required = true, num_args = 1..)]
        piles: Vec<String>,
    },
    /// Memoized vs naive recursion call counts and timings.
    Compare {
        /// Pile weights.
        #[arg(required = true, num_args = 1..)]
        piles: Vec<String>,
        /// Print call trees down to this depth.
        #[arg(long)]
        depth: Option<usize>,
    },
    /// Cost and timing of every strategy.
    Strategies {
        /// Pile weights.
        #[arg(required = true, num_args = 1..)]
        piles: Vec<String>,
    },
    /// Merge piles by hand and compare with the optimum.
    Play {
        /// Pile weights.
        #[arg(required = true, num_args = 1..)]
        piles: Vec<String>,
        /// Adjacent positions to merge, applied in order (e.g. `--merge 0,1`).
        #[arg(long = "merge", value_parser = parse_pair)]
        merges: Vec<(usize, usize)>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = AnalysisConfig::default()
        .with_max_piles(cli.max_piles)
        .with_recursive_limit(cli.recursive_limit);
    config.validate().context("invalid limits")?;

    match cli.command {
        Commands::Solve { piles, table } => run_solve(&read_piles(&piles, &config)?, &config, table)?,
        Commands::Greedy { piles } => run_greedy(&read_piles(&piles, &config)?, &config)?,
        Commands::Compare { piles, depth } => run_compare(&read_piles(&piles, &config)?, &config, depth)?,
        Commands::Strategies { piles } => run_strategies(&read_piles(&piles, &config)?, &config),
        Commands::Play { piles, merges } => run_play(&read_piles(&piles, &config)?, &config, &merges)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn read_piles(args: &[String], config: &AnalysisConfig) -> Result<PileSequence> {
    let text = args.join(" ");
    parse_piles_with_limit(&text, config.max_piles)
        .with_context(|| format!("failed to parse piles from '{}'", text))
}

fn parse_pair(text: &str) -> std::result::Result<(usize, usize), String> {
    let (a, b) = text
        .split_once(',')
        .ok_or_else(|| format!("expected two positions like 0,1 but got '{}'", text))?;
    let a = a.trim().parse().map_err(|_| format!("invalid position '{}'", a))?;
    let b = b.trim().parse().map_err(|_| format!("invalid position '{}'", b))?;
    Ok((a, b))
}

fn run_solve(piles: &PileSequence, config: &AnalysisConfig, table: bool) -> Result<()> {
    let analysis = Analysis::run(piles.clone(), config).context("analysis failed")?;

    println!("piles\t{:?}", piles.weights());
    println!("optimal\t{}", analysis.optimal_cost());

    if table {
        let dp = analysis.dp();
        for i in 0..dp.pile_count() {
            let cells: Vec<String> = (0..dp.pile_count())
                .map(|j| if j < i { "-".to_string() } else { dp.cost_of(i, j).to_string() })
                .collect();
            println!("dp[{}]\t{}", i, cells.join("\t"));
        }
    }

    print_steps(analysis.steps());
    Ok(())
}

fn run_greedy(piles: &PileSequence, config: &AnalysisConfig) -> Result<()> {
    let analysis = Analysis::run(piles.clone(), &config.clone().with_naive(false))
        .context("analysis failed")?;
    let report = analysis.greedy_report();

    print_steps(&report.greedy.steps);
    println!("greedy\t{}", report.greedy.total_cost);
    println!("optimal\t{}", report.optimal);
    if report.is_optimal() {
        println!("greedy found an optimal order for this input");
    } else {
        println!("extra cost\t{}", report.extra_cost());
    }
    Ok(())
}

fn run_compare(piles: &PileSequence, config: &AnalysisConfig, depth: Option<usize>) -> Result<()> {
    let report = ComplexityReport::run(piles, config).context("comparison failed")?;

    for (label, outcome) in [("memoized", &report.memoized), ("naive", &report.naive)] {
        let stats = outcome.graph.stats();
        println!(
            "{}\tcost={}\tcalls={}\trecords={}\tmax_depth={}\ttime={:?}",
            label,
            outcome.total_cost,
            outcome.call_count,
            stats.records,
            stats.max_depth,
            outcome.elapsed
        );
        if let Some((range, count)) = stats.hottest {
            println!("{}\thottest={} ×{}", label, range, count);
        }
    }
    println!(
        "distinct states {}\tcalls saved {}\tratio {:.2}x",
        report.distinct_states(),
        report.calls_saved(),
        report.savings_ratio()
    );

    if let Some(depth) = depth {
        println!("\nmemoized call graph:\n{}", report.memoized.graph.render(depth));
        println!("naive call tree:\n{}", report.naive.graph.render(depth));
    }
    Ok(())
}

fn run_strategies(piles: &PileSequence, config: &AnalysisConfig) {
    for summary in leaderboard(piles, config) {
        println!(
            "{:<12}\tcost={}\ttime={:?}\t{}",
            summary.name, summary.total_cost, summary.elapsed, summary.description
        );
    }
}

fn run_play(piles: &PileSequence, config: &AnalysisConfig, merges: &[(usize, usize)]) -> Result<()> {
    let analysis = Analysis::run(piles.clone(), &config.clone().with_naive(false))
        .context("analysis failed")?;
    let mut session = analysis.session();

    for &(a, b) in merges {
        match session.merge(a, b) {
            Ok(step) => println!("{}", step),
            Err(err) => println!("rejected {},{}: {}", a, b, err),
        }
    }

    let values: Vec<u64> = session.piles().iter().map(|pile| pile.value).collect();
    println!("piles\t{:?}", values);
    println!("total\t{}", session.total_cost());
    match session.verdict() {
        Some(verdict) => println!("verdict\t{} (optimal {})", verdict, session.optimal_cost()),
        None => println!("{} piles left to merge", session.piles().len()),
    }
    Ok(())
}

fn print_steps(steps: &[MergeStep]) {
    for (idx, step) in steps.iter().enumerate() {
        println!("step {}\t{}", idx + 1, step);
    }
}
