#[macro_use]
extern crate clap;
extern crate env_logger;
extern crate glob;
#[macro_use]
extern crate log;
extern crate thiserror;

mod config;
mod error;
mod fraction;
mod heights;
mod judge;
mod rational;
mod read_words;
mod task;

use std::process;

/// Builds CLI app metadata, especially command line arguments format
/// and parses given arguments.
fn build_app<'a, 'b>() -> clap::App<'a, 'b> {
    let settings = {
        use clap::AppSettings::*;
        [GlobalVersion, SubcommandRequiredElseHelp]
    };
    clap::App::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .settings(&settings)
        .arg(
            clap::Arg::with_name("input")
                .long("input")
                .takes_value(true)
                .number_of_values(1)
                .global(true)
                .help("Path to input file (defaults to stdin)"),
        )
        .subcommand(
            clap::SubCommand::with_name("rational")
                .about("Sums N fractions S/M and prints integer part and remainder"),
        )
        .subcommand(
            clap::SubCommand::with_name("impulse")
                .about("Applies K impulses to N cities and prints the highest ones"),
        )
        .subcommand(
            clap::SubCommand::with_name("check")
                .about("Runs a task on input*.txt and compares with output*.txt")
                .arg(
                    clap::Arg::with_name("task")
                        .required(true)
                        .possible_values(task::TASK_NAMES)
                        .help("Task to judge"),
                )
                .arg(
                    clap::Arg::with_name("dir")
                        .required(true)
                        .help("Directory containing testcases"),
                ),
        )
}

fn run(config: &config::Config) -> Result<(), String> {
    match config.command {
        config::Command::Solve(task) => {
            let input = read_words::read_all(config.input_path.as_ref().map(|s| s.as_str()))
                .map_err(|err| format!("can't read input: {}", err))?;
            let output = task.run(&input).map_err(|err| err.to_string())?;
            print!("{}", output);
            Ok(())
        }
        config::Command::Check { task, ref dir } => {
            let verdict = judge::check(task, dir).map_err(|err| err.to_string())?;
            info!("{} on {}: {}", task, dir.display(), verdict);
            println!("{}", verdict);
            if verdict.is_accepted() {
                Ok(())
            } else {
                Err(format!("{} failed", task))
            }
        }
    }
}

fn main() {
    env_logger::init();

    let matches = build_app().get_matches();
    let result = config::Config::from_matches(&matches).and_then(|config| run(&config));

    if let Err(err) = result {
        error!("{}", err);
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
