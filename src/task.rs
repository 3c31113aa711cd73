use crate::error::InvalidInput;
use crate::heights;
use crate::rational;
use crate::read_words::Words;
use std::fmt;
use std::str::FromStr;

pub const TASK_NAMES: &[&str] = &["rational", "impulse"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Task {
    Rational,
    Impulse,
}

impl Task {
    pub fn name(self) -> &'static str {
        match self {
            Task::Rational => "rational",
            Task::Impulse => "impulse",
        }
    }

    /// Solves the task for the given input text and returns the full output.
    pub fn run(self, input: &str) -> Result<String, InvalidInput> {
        let mut words = Words::new(input);
        match self {
            Task::Rational => rational::solve(&mut words),
            Task::Impulse => heights::solve(&mut words),
        }
    }
}

impl FromStr for Task {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rational" => Ok(Task::Rational),
            "impulse" => Ok(Task::Impulse),
            _ => Err(format!(
                "unknown task {:?} (expected one of: {})",
                s,
                TASK_NAMES.join(", ")
            )),
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
