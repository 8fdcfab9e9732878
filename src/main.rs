//! turnpath - least-cost grid path under a turning constraint
//!
//! ```bash
//! turnpath input.txt
//! turnpath input.txt --max-straight 3 --source 0,0 --goal 12,12 --render
//! RUST_LOG=turnpath=debug turnpath input.txt
//! ```

use std::{fs, io::Write, path::PathBuf, process};

use clap::Parser;
use log::{info, LevelFilter};
use thiserror::Error;

use turnpath::{
    Grid, GridError, PathSearch, PathSearchError, Position, SearchOutcome, TurnRule, DEFAULT_MAX_STRAIGHT,
};


/// Find the cheapest path through a grid of digit costs
#[derive(Parser, Debug)]
#[command(name = "turnpath", version, about)]
struct Args {
    /// Grid file, one row of digits per line
    input: PathBuf,

    /// Start cell as `row,col` (default: top-left)
    #[arg(long)]
    source: Option<Position>,

    /// Target cell as `row,col` (default: bottom-right)
    #[arg(long)]
    goal: Option<Position>,

    /// Longest allowed run of moves in one direction
    #[arg(long, default_value_t = DEFAULT_MAX_STRAIGHT)]
    max_straight: usize,

    /// Also print the grid with the path drawn on it
    #[arg(long)]
    render: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}


#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },

    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),

    #[error("{0}")]
    Search(#[from] PathSearchError),

    #[error("cannot write output: {0}")]
    Output(#[from] std::io::Error),
}


fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let stdout = std::io::stdout();
    if let Err(e) = run(&args, &mut stdout.lock()) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}


fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    // RUST_LOG wins over -v when set
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {} - {}", record.level(), record.target(), record.args()))
        .init();
}


/// Answer goes to `out`, diagnostics go through the logger
fn run(args: &Args, out: &mut impl Write) -> Result<(), CliError> {
    let text = fs::read_to_string(&args.input)
        .map_err(|source| CliError::Io { path: args.input.clone(), source })?;
    let grid: Grid<u32> = text.parse()?;
    info!("loaded {}x{} grid from {}", grid.rows(), grid.cols(), args.input.display());

    let mut search = PathSearch::new(&grid).with_turn_rule(TurnRule::new(args.max_straight)?);
    if let Some(source) = args.source {
        search = search.with_source(source);
    }
    if let Some(goal) = args.goal {
        search = search.with_goal(goal);
    }

    match search.run()? {
        SearchOutcome::Reached(result) => {
            writeln!(out, "{}", result.cost)?;
            if args.render {
                writeln!(out, "{}", grid.render_path(&result.path))?;
            }
        }
        SearchOutcome::Unreachable => writeln!(out, "unreachable")?,
    }

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    /// Write `grid` to a temp file and run the CLI on it with `extra` flags
    fn run_on(grid: &str, extra: &[&str]) -> Result<String, CliError> {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(grid.as_bytes()).unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let mut argv = vec!["turnpath", path.as_str()];
        argv.extend_from_slice(extra);
        let args = Args::try_parse_from(argv).unwrap();

        let mut out = Vec::new();
        run(&args, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["turnpath", "grid.txt"]).unwrap();

        assert_eq!(args.input, PathBuf::from("grid.txt"));
        assert_eq!(args.source, None);
        assert_eq!(args.goal, None);
        assert_eq!(args.max_straight, 3);
        assert!(!args.render);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_args_positions_and_flags() {
        let args = Args::try_parse_from([
            "turnpath", "grid.txt", "--source", "1,2", "--goal", "4,5", "--max-straight", "2", "--render", "-vv",
        ])
        .unwrap();

        assert_eq!(args.source, Some(Position::new(1, 2)));
        assert_eq!(args.goal, Some(Position::new(4, 5)));
        assert_eq!(args.max_straight, 2);
        assert!(args.render);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_args_reject_bad_position() {
        assert!(Args::try_parse_from(["turnpath", "grid.txt", "--goal", "4;5"]).is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let args = Args::try_parse_from(["turnpath", "/nonexistent/turnpath/grid.txt"]).unwrap();
        assert!(matches!(run(&args, &mut Vec::new()), Err(CliError::Io { .. })));
    }

    #[test]
    fn test_prints_cost() {
        assert_eq!(run_on("199\n199\n111\n", &[]).unwrap(), "4\n");
        assert_eq!(run_on("111\n111\n111\n", &["--goal", "0,1"]).unwrap(), "1\n");
    }

    #[test]
    fn test_unreachable_is_not_an_error() {
        assert_eq!(run_on("11111\n", &[]).unwrap(), "unreachable\n");
    }

    #[test]
    fn test_render_draws_path() {
        assert_eq!(run_on("199\n199\n111\n", &["--render"]).unwrap(), "4\n199\nv99\nv>>\n");
    }

    #[test]
    fn test_bad_grid_is_grid_error() {
        let err = run_on("12\n3\n", &[]).unwrap_err();
        assert!(matches!(err, CliError::Grid(GridError::RaggedRow { row: 1, expected: 2, found: 1 })));
    }

    #[test]
    fn test_zero_straight_run_is_search_error() {
        let err = run_on("11\n11\n", &["--max-straight", "0"]).unwrap_err();
        assert!(matches!(err, CliError::Search(PathSearchError::InvalidTurnRule(0))));

        let err = run_on("11\n11\n", &["--source", "5,5"]).unwrap_err();
        assert!(matches!(err, CliError::Search(PathSearchError::OutOfBounds { role: "source", .. })));
    }
}
