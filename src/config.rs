//! Defines data structures of command line arguments.

use crate::task::Task;
use std::path::PathBuf;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Reads one input and prints the answer.
    Solve(Task),
    /// Judges a task against a testcase directory.
    Check { task: Task, dir: PathBuf },
}

#[derive(Debug)]
pub struct Config {
    pub input_path: Option<String>,
    pub command: Command,
}

impl Config {
    pub fn from_matches(gm: &clap::ArgMatches) -> Result<Self, String> {
        let command = match gm.subcommand() {
            ("check", Some(sm)) => {
                let task = sm.value_of("task").unwrap_or_default().parse::<Task>()?;
                let dir = PathBuf::from(sm.value_of("dir").unwrap_or("."));
                trace!("check {} in {}", task, dir.display());
                Command::Check { task, dir }
            }
            (name, _) if !name.is_empty() => Command::Solve(name.parse::<Task>()?),
            _ => {
                error!("no subcommand");
                return Err("missing subcommand (try --help)".to_owned());
            }
        };

        // --input may be given before or after the subcommand.
        let input_path = gm
            .value_of("input")
            .or_else(|| gm.subcommand().1.and_then(|sm| sm.value_of("input")))
            .map(|s| s.to_owned());
        if input_path.is_some() {
            if let Command::Check { .. } = command {
                warn!("--input is ignored by check");
            }
        }

        Ok(Config {
            input_path,
            command,
        })
    }
}
