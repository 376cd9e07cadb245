use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use gridlogic::{ast_json, solve_source, Error, Outcome, Settings};
use log::{debug, error};

#[derive(Parser, Debug)]
#[command(name = "gridlogic")]
#[command(about = "Solve a logic-grid puzzle by exhaustive search")]
struct Cli {
    /// JSON settings file (iteration limit, field print order)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Print the parsed program as JSON instead of solving it
    #[arg(long)]
    ast: bool,

    /// Puzzle source file
    puzzle: PathBuf,
}

fn init_logging() {
    env_logger::init();
}

fn run(cli: &Cli) -> Result<Option<Outcome>, Error> {
    let settings = match &cli.settings {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    let source = fs::read_to_string(&cli.puzzle)?;

    if cli.ast || Settings::is_debug_mode() {
        println!("{}", ast_json(&source)?);
        if cli.ast {
            return Ok(None);
        }
    }

    let outcome = solve_source(&source, &settings)?;
    debug!(target: "solver", "Outcome after {} iterations", outcome.iterations());
    print!("{}", outcome.render(&settings.field_order));
    Ok(Some(outcome))
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(Some(outcome)) if !outcome.is_solved() => ExitCode::from(1),
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}: {}", cli.puzzle.display(), e);
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_flags_and_puzzle() {
        let cli = Cli::try_parse_from([
            "gridlogic",
            "--settings",
            "demos/settings.json",
            "--ast",
            "demos/houses.puzzle",
        ])
        .unwrap();
        assert_eq!(cli.settings, Some(PathBuf::from("demos/settings.json")));
        assert!(cli.ast);
        assert_eq!(cli.puzzle, PathBuf::from("demos/houses.puzzle"));
    }

    #[test]
    fn test_rejects_bad_arguments() {
        assert!(Cli::try_parse_from(["gridlogic"]).is_err());
        assert!(Cli::try_parse_from(["gridlogic", "--verbose", "a.puzzle"]).is_err());
        assert!(Cli::try_parse_from(["gridlogic", "a.puzzle", "--settings"]).is_err());
        assert!(Cli::try_parse_from(["gridlogic", "a.puzzle", "b.puzzle"]).is_err());
    }

    #[test]
    fn test_missing_puzzle_file_is_an_io_error() {
        let cli = Cli::try_parse_from(["gridlogic", "/nonexistent/gridlogic.puzzle"]).unwrap();
        assert!(matches!(run(&cli), Err(Error::Io(_))));
    }
}
