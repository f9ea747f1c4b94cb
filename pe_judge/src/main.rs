//! Judge a file of two-player five-card poker showdowns.
//!
//! Each line holds ten cards. The first five are player 1's hand and the
//! last five are player 2's. Every round is printed as it's judged, and
//! the last line printed is the number of rounds player 1 won.

use anyhow::{Context, Error, anyhow, bail};
use log::info;
use pico_args::Arguments;
use poker_eval::{Judge, JudgeSettings, constants::DEFAULT_INPUT};
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
};

const HELP: &str = "\
Judge two-player five-card poker showdowns

USAGE:
  pe_judge [OPTIONS] [FILE]

ARGS:
  FILE                  Ten cards per line, '-' for stdin  [default: poker.txt]

FLAGS:
  --json                Print each round as a JSON object
  --quiet               Only print the number of player 1 wins
  --strict              Fail on rounds that no rule can decide
  -h, --help            Print help information
";

struct Args {
    input: String,
    json: bool,
    quiet: bool,
    strict: bool,
}

impl Args {
    fn parse(mut pargs: Arguments) -> Result<Self, Error> {
        let json = pargs.contains("--json");
        let quiet = pargs.contains("--quiet");
        let strict = pargs.contains("--strict");

        // Whatever is left after the flags is FILE plus anything unrecognized.
        let mut free = pargs
            .finish()
            .into_iter()
            .map(|arg| {
                arg.into_string()
                    .map_err(|arg| anyhow!("{arg:?} isn't valid UTF-8"))
            })
            .collect::<Result<Vec<String>, _>>()?;
        let unknown: Vec<&String> = free
            .iter()
            .filter(|arg| arg.starts_with('-') && arg.as_str() != "-")
            .collect();
        if !unknown.is_empty() {
            bail!("unknown options: {unknown:?}");
        }
        if free.len() > 1 {
            bail!("unexpected arguments: {:?}", &free[1..]);
        }

        Ok(Self {
            input: free.pop().unwrap_or(DEFAULT_INPUT.into()),
            json,
            quiet,
            strict,
        })
    }
}

fn main() -> Result<(), Error> {
    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{}", HELP);
        std::process::exit(0);
    }
    let args = Args::parse(pargs)?;

    env_logger::builder().format_target(false).init();

    let reader: Box<dyn BufRead> = if args.input == "-" {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(&args.input).with_context(|| format!("can't open {}", args.input))?;
        Box::new(BufReader::new(file))
    };

    info!("judging rounds from {}", args.input);
    let settings = JudgeSettings {
        strict: args.strict,
    };
    let mut judge = Judge::new(reader, settings);
    for report in judge.by_ref() {
        let report = report?;
        if args.quiet {
            continue;
        }
        if args.json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!("{report}");
        }
    }
    println!("{}", judge.finish().player1_wins);

    Ok(())
}
