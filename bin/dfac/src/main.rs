use std::{path::PathBuf, process::ExitCode};

use dfa_decide::prelude::*;

use thiserror::Error;
use tracing::{debug, error, info, trace};
use tracing_subscriber::{filter, prelude::*};

use clap::{Arg, ArgMatches, Command};

#[derive(Debug, Error)]
enum CliError {
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },
    #[error("expected {expected} automata but the input contains {found}")]
    Count { expected: usize, found: usize },
}

fn cli() -> clap::Command {
    let file = || {
        Arg::new("file")
            .required(true)
            .value_parser(clap::value_parser!(PathBuf))
            .help("file containing one automaton per line, blank lines and lines starting with # are skipped")
    };

    Command::new("dfac")
        .about("Decides emptiness and equivalence of deterministic finite automata")
        .subcommand_required(true)
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbosity")
                .num_args(0..=1)
                .require_equals(true)
                .value_parser(["info", "debug", "trace"])
                .default_missing_value("info"),
        )
        .arg(
            Arg::new("alphabet")
                .long("alphabet")
                .global(true)
                .default_value("ab")
                .help("the symbols of the alphabet, in the order in which they are explored"),
        )
        .subcommand(
            Command::new("empty")
                .visible_alias("problem1")
                .about("checks whether the language of a single automaton is empty")
                .arg(file()),
        )
        .subcommand(
            Command::new("equiv")
                .visible_alias("problem2")
                .about("checks whether two automata accept the same language")
                .arg(file()),
        )
}

fn setup_logging(matches: &ArgMatches) {
    let level = match matches
        .try_get_one::<String>("verbosity")
        .ok()
        .flatten()
        .map(|m| m.as_str())
    {
        Some("trace") => filter::LevelFilter::TRACE,
        Some("debug") => filter::LevelFilter::DEBUG,
        Some("info") => filter::LevelFilter::INFO,
        _ => filter::LevelFilter::WARN,
    };

    let stderr_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(stderr_log.with_filter(level))
        .init();

    trace!("setup {level} logging");
}

/// Returns the lines that describe automata together with their line numbers, starting at 1.
fn automaton_lines(content: &str) -> Vec<(usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

fn decode(content: &str, expected: usize, alphabet: &CharAlphabet) -> Result<Vec<DFA>, CliError> {
    let lines = automaton_lines(content);
    if lines.len() != expected {
        return Err(CliError::Count {
            expected,
            found: lines.len(),
        });
    }
    lines
        .into_iter()
        .map(|(line, description)| {
            let dfa = DFA::from_line_with_alphabet(description, alphabet.clone())
                .map_err(|source| CliError::Parse { line, source })?;
            debug!("line {line} holds an automaton with {} states", dfa.size());
            Ok(dfa)
        })
        .collect()
}

fn render_emptiness(result: &SearchResult<char>) -> String {
    match result {
        SearchResult::Empty => "yes\n".to_string(),
        SearchResult::NonEmpty(witness) => format!("no\n{}\n", String::from_iter(witness)),
    }
}

fn render_equivalence(result: &EquivalenceResult<char>) -> String {
    match result {
        EquivalenceResult::Equivalent => "yes\n".to_string(),
        EquivalenceResult::Different {
            witness,
            accepted_by,
        } => format!(
            "no\n{}\naccepted by: {}\n",
            String::from_iter(witness),
            accepted_by.number()
        ),
    }
}

/// Runs the subcommand with the given name on the content of an input file and returns what
/// should be printed.
fn execute(command: &str, content: &str, alphabet: &CharAlphabet) -> Result<String, CliError> {
    match command {
        "empty" => {
            let dfa = decode(content, 1, alphabet)?.remove(0);
            let start = std::time::Instant::now();
            let result = dfa.emptiness();
            info!("emptiness check took {}µs", start.elapsed().as_micros());
            Ok(render_emptiness(&result))
        }
        "equiv" => {
            let automata = decode(content, 2, alphabet)?;
            let start = std::time::Instant::now();
            let result = automata[0].equivalence(&automata[1]);
            info!("equivalence check took {}µs", start.elapsed().as_micros());
            Ok(render_equivalence(&result))
        }
        _ => unreachable!(),
    }
}

fn run(matches: &ArgMatches) -> Result<String, CliError> {
    let Some((command, sub_matches)) = matches.subcommand() else {
        unreachable!("a subcommand is required")
    };
    let alphabet = sub_matches
        .get_one::<String>("alphabet")
        .map(|symbols| CharAlphabet::from_iter(symbols.chars()))
        .unwrap_or_default();
    let Some(path) = sub_matches.get_one::<PathBuf>("file") else {
        unreachable!("the input file is required")
    };

    debug!("reading automata from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.clone(),
        source,
    })?;
    execute(command, &content, &alphabet)
}

fn main() -> ExitCode {
    let matches = cli().get_matches();

    setup_logging(&matches);

    match run(&matches) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        cli().debug_assert();

        let matches = cli()
            .try_get_matches_from(["dfac", "problem2", "input.txt", "--alphabet", "xy"])
            .unwrap();
        let (command, sub) = matches.subcommand().unwrap();
        assert_eq!(command, "equiv");
        assert_eq!(sub.get_one::<String>("alphabet").unwrap(), "xy");

        let matches = cli()
            .try_get_matches_from(["dfac", "-v=debug", "empty", "input.txt"])
            .unwrap();
        assert_eq!(matches.get_one::<String>("verbosity").unwrap(), "debug");
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(sub.get_one::<String>("alphabet").unwrap(), "ab");

        assert!(cli().try_get_matches_from(["dfac", "empty"]).is_err());
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let content = "# first automaton\n\n  q0q1f,q0aq1  \n#q0\n   \nq0\n";
        assert_eq!(automaton_lines(content), vec![(3, "q0q1f,q0aq1"), (6, "q0")]);
    }

    #[test]
    fn emptiness() {
        let alphabet = CharAlphabet::default();
        assert_eq!(
            execute("empty", "q0fq1,q0aq1,q1aq0\n", &alphabet).unwrap(),
            "no\n\n"
        );
        assert_eq!(
            execute("empty", "q0q1f,q0aq1", &alphabet).unwrap(),
            "no\na\n"
        );
        assert_eq!(execute("empty", "q0", &alphabet).unwrap(), "yes\n");
    }

    #[test]
    fn equivalence() {
        let alphabet = CharAlphabet::default();
        let content = "q0q1f,q0aq1,q0bq0,q1aq1,q1bq0\nq0q1q2fq3f,q0aq3,q0bq1,q1aq2,q1bq0,q2aq3,q2bq1,q3aq2,q3bq0\n";
        assert_eq!(execute("equiv", content, &alphabet).unwrap(), "yes\n");

        let content = "q0f,q0aq0\nq0,q0aq0\n";
        assert_eq!(
            execute("equiv", content, &alphabet).unwrap(),
            "no\n\naccepted by: 1\n"
        );

        let content = "q0q1f,q0aq1,q0bq0,q1aq1,q1bq0\nq0q1f,q0aq0,q0bq1,q1aq0,q1bq1\n";
        assert_eq!(
            execute("equiv", content, &alphabet).unwrap(),
            "no\na\naccepted by: 1\n"
        );
    }

    #[test]
    fn custom_alphabet() {
        let alphabet = CharAlphabet::from_iter("01".chars());
        assert!(matches!(
            execute("empty", "q0q1f,q0aq1", &alphabet),
            Err(CliError::Parse { line: 1, .. })
        ));
        let alphabet = CharAlphabet::from_iter("yx".chars());
        assert_eq!(
            execute("empty", "q0q1f,q0xq1,q0yq1", &alphabet).unwrap(),
            "no\ny\n"
        );
    }

    #[test]
    fn reports_errors() {
        let alphabet = CharAlphabet::default();
        assert!(matches!(
            execute("equiv", "q0\n", &alphabet),
            Err(CliError::Count {
                expected: 2,
                found: 1
            })
        ));
        assert!(matches!(
            execute("empty", "# nothing\n", &alphabet),
            Err(CliError::Count {
                expected: 1,
                found: 0
            })
        ));
        let err = execute("equiv", "q0\n\nq0,q0aq1\n", &alphabet).unwrap_err();
        assert!(matches!(
            err,
            CliError::Parse {
                line: 3,
                source: ParseError::UnknownState { .. }
            }
        ));
        assert_eq!(
            err.to_string(),
            "line 3: transition `q0aq1` refers to undeclared state `q1`"
        );
    }
}
