use clap::{Parser, Subcommand};
use wayfind::search::{
    search_engines::{run_instrumented, SearchEngineName, SearchReport},
    MapName, SearchProblem, Verbosity,
};
use std::time::Duration;
use tracing::info;

#[derive(Parser)]
#[command(version)]
/// Run the classic search exercises over the coursework maps.
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(value_enum, help = "The map to search")]
    map: MapName,
    #[arg(
        help = "The initial state, defaults to the map's canonical start",
        short = 's',
        long = "start",
        id = "START"
    )]
    start: Option<String>,
    #[arg(
        help = "The goal state, defaults to the map's canonical goal",
        short = 'g',
        long = "goal",
        id = "GOAL"
    )]
    goal: Option<String>,
    #[arg(
        help = "Wall-clock limit for each search, e.g. \"500ms\" or \"10s\"",
        long = "time-limit",
        id = "TIME_LIMIT"
    )]
    time_limit: Option<humantime::Duration>,
    #[arg(
        help = "Memory ceiling for each search, in megabytes",
        long = "memory-limit",
        id = "MEMORY_LIMIT"
    )]
    memory_limit_mb: Option<usize>,
    #[arg(help = "Emit reports as JSON instead of text", long = "json")]
    json: bool,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::default()
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single search engine and print its report.
    Run {
        #[arg(
            value_enum,
            help = "The search engine to use",
            short = 'e',
            long = "engine",
            id = "ENGINE",
            default_value_t = SearchEngineName::Bfs
        )]
        engine: SearchEngineName,
    },
    /// Run every engine over the same problem and compare their metrics.
    Compare,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity.level())
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let start = cli
        .start
        .clone()
        .unwrap_or_else(|| cli.map.default_initial().to_string());
    let goal = cli
        .goal
        .clone()
        .unwrap_or_else(|| cli.map.default_goal().to_string());
    info!(map = ?cli.map, start = %start, goal = %goal);

    let problem = match SearchProblem::new(cli.map.graph(), &start, &goal) {
        Ok(problem) => problem,
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(2);
        }
    };
    let time_limit: Option<Duration> = cli.time_limit.map(Into::into);

    match cli.command {
        Commands::Run { engine } => {
            let report = run_engine(
                engine,
                &problem,
                cli.map,
                &goal,
                time_limit,
                cli.memory_limit_mb,
            );
            emit(&[report], cli.json);
        }
        Commands::Compare => {
            let reports = [
                SearchEngineName::Bfs,
                SearchEngineName::Ids,
                SearchEngineName::AStar,
            ]
            .map(|engine| {
                run_engine(
                    engine,
                    &problem,
                    cli.map,
                    &goal,
                    time_limit,
                    cli.memory_limit_mb,
                )
            });
            emit(&reports, cli.json);
            if !cli.json {
                print_comparison(&reports);
            }
        }
    }
}

fn run_engine(
    engine: SearchEngineName,
    problem: &SearchProblem,
    map: MapName,
    goal: &str,
    time_limit: Option<Duration>,
    memory_limit_mb: Option<usize>,
) -> SearchReport {
    let mut heuristic = map.heuristic(problem.graph(), goal);
    run_instrumented(
        engine,
        problem,
        heuristic.as_mut(),
        time_limit,
        memory_limit_mb,
    )
}

fn emit(reports: &[SearchReport], json: bool) {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(reports).expect("reports serialize to JSON")
        );
    } else {
        for report in reports {
            println!("{report}");
            println!();
        }
    }
}

fn print_comparison(reports: &[SearchReport]) {
    println!("Comparison Analysis:");
    println!("{}", "=".repeat(50));
    for report in reports {
        println!(
            "{:<34} expanded {:>8}  time {:>10.6}s  peak memory {}",
            report.engine,
            report.expanded_nodes,
            report.elapsed_seconds,
            report.peak_memory_display()
        );
    }
    if let [bfs, ids, ..] = reports {
        println!();
        println!(
            "BFS vs IDS time difference: {:.6} seconds",
            (bfs.elapsed_seconds - ids.elapsed_seconds).abs()
        );
        println!(
            "BFS vs IDS nodes expanded difference: {}",
            (bfs.expanded_nodes - ids.expanded_nodes).abs()
        );
        if let (Some(bfs_peak), Some(ids_peak)) = (bfs.peak_memory_bytes, ids.peak_memory_bytes) {
            println!(
                "BFS vs IDS memory difference (peak): {:.2} KB",
                (bfs_peak as f64 - ids_peak as f64).abs() / 1024.0
            );
        }
    }
}
