// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]
#![warn(clippy::all)]

use std::env;
use std::io::{self, Write};
use std::process;

use clap::{App, Arg, ArgGroup};
use log::warn;

use slide_solver::config::{Format, FrontierMode, InvalidChoice, Method, SolverConfig, TargetTable};
use slide_solver::solver::Outcome;
use slide_solver::{LoadPuzzle, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("slide-solver")
        .author("martin-t")
        .version("0.1")
        .about("Finds a way to slide pieces from the initial board to the goal board")
        .arg(
            Arg::with_name("method")
                .short("m")
                .long("method")
                .takes_value(true)
                .help("1 / exhaustive / dfs or 2 / greedy / best-first (asks if missing)"),
        )
        .arg(
            Arg::with_name("strict-frontier")
                .long("strict-frontier")
                .help("never queue a board twice"),
        )
        .arg(
            Arg::with_name("goal-targets")
                .long("goal-targets")
                .help("greedy heuristic uses piece positions from the goal board"),
        )
        .arg(
            Arg::with_name("max-expansions")
                .long("max-expansions")
                .takes_value(true)
                .help("give up after expanding this many boards"),
        )
        .arg(
            Arg::with_name("spaced")
                .short("s")
                .long("spaced")
                .help("print boards with spaces between cells (default)"),
        )
        .arg(
            Arg::with_name("compact")
                .short("c")
                .long("compact")
                .help("print boards in the input format"),
        )
        .group(ArgGroup::with_name("format").args(&["spaced", "compact"]))
        .arg(
            Arg::with_name("file")
                .default_value("states.txt")
                .help("initial board, a separator line, goal board"),
        )
        .get_matches();

    let format = if matches.is_present("compact") {
        Format::Compact
    } else {
        Format::Spaced
    };
    let frontier = if matches.is_present("strict-frontier") {
        FrontierMode::Strict
    } else {
        FrontierMode::Literal
    };
    let targets = if matches.is_present("goal-targets") {
        TargetTable::FromGoal
    } else {
        TargetTable::Canonical
    };
    let max_expansions = matches.value_of("max-expansions").map(|limit| {
        limit.parse::<usize>().unwrap_or_else(|_| {
            println!("Invalid expansion limit: {}", limit);
            process::exit(1);
        })
    });
    let config = SolverConfig {
        frontier,
        targets,
        max_expansions,
    };

    // unwrap is ok - has a default value
    let path = matches.value_of("file").unwrap();
    let puzzle = path.load_puzzle().unwrap_or_else(|err| {
        let current_dir = env::current_dir().unwrap();
        println!("Can't load puzzle {} in {}: {}", path, current_dir.display(), err);
        process::exit(1);
    });
    if !puzzle.same_pieces() {
        warn!("Initial and goal boards have different pieces, the goal is unreachable");
    }

    let method = match matches.value_of("method") {
        Some(method) => method.parse(),
        None => ask_method(),
    };
    let method: Method = method.unwrap_or_else(|err| {
        println!("{}", err);
        process::exit(1);
    });

    println!("Solving {} using {}...", path, method);
    let solver_ok = puzzle.solve(method, &config).unwrap_or_else(|err| {
        println!("Can't solve puzzle: {}", err);
        process::exit(1);
    });
    println!("{}", solver_ok.stats);

    match solver_ok.outcome {
        Outcome::Solved => {
            println!("Solution:");
            print!("{}", solver_ok.format_trace(format));
            println!("Number of states expanded: {}", solver_ok.trace.len());
        }
        Outcome::Exhausted => println!("No solution found."),
        Outcome::LimitReached => println!(
            "Expansion limit reached after {} states.",
            solver_ok.trace.len()
        ),
    }
}

fn ask_method() -> Result<Method, InvalidChoice> {
    print!("Choose algorithm:\n1. Depth-First Search\n2. Best-First Search\nEnter choice: ");
    io::stdout().flush().ok();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return Err(InvalidChoice);
    }
    // only the numbered choices are offered here
    line.trim()
        .parse()
        .ok()
        .and_then(Method::from_choice)
        .ok_or(InvalidChoice)
}
