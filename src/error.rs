//! Error types.

use thiserror::Error;

/// Input that can't be turned into an answer.
///
/// Every variant is detected before anything is printed,
/// so a failed run produces no output on stdout.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("missing value for {what}")]
    MissingToken { what: String },

    #[error("malformed value for {what}: {token:?}")]
    Malformed { what: String, token: String },

    #[error("zero denominator in pair #{index}")]
    ZeroDenominator { index: usize },

    #[error("value overflows 64-bit integers at item #{index}")]
    Overflow { index: usize },

    #[error("{what} = {value} is too large")]
    TooLarge { what: String, value: usize },
}

#[derive(Error, Debug)]
pub enum JudgeError {
    #[error("testcases missing or unmatched in {dir}: {inputs} inputs, {outputs} outputs")]
    TestcasesMissing {
        dir: String,
        inputs: usize,
        outputs: usize,
    },

    #[error("bad glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("can't list testcases: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("can't read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}
