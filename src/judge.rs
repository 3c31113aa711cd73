//! Runs a task against a directory of testcases.
//!
//! Testcases are `input*.txt` files anywhere below the directory.
//! `foo/input3.txt` is expected to print what `foo/output3.txt` contains.

use crate::error::JudgeError;
use crate::task::Task;
use glob::{glob, Pattern};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub passed: usize,
    /// Cases rejected with `InvalidInput` instead of producing output.
    pub runtime_errors: usize,
    pub total: usize,
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        self.passed == self.total
    }

    /// A runtime error on any case outranks wrong answers.
    pub fn status(&self) -> &'static str {
        if self.is_accepted() {
            "accepted"
        } else if self.runtime_errors > 0 {
            "runtime_error"
        } else {
            "wrong_answer"
        }
    }

    /// Partial score out of 100, rounded down.
    pub fn score(&self) -> usize {
        if self.total == 0 {
            return 0;
        }
        self.passed * 100 / self.total
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}: passed {}/{}, score {}",
            self.status(),
            self.passed,
            self.total,
            self.score()
        )
    }
}

fn collect(dir: &Path, prefix: &str) -> Result<Vec<PathBuf>, JudgeError> {
    let base = Pattern::escape(&dir.display().to_string());
    let pat = Path::new(&base).join("**").join(format!("{}*.txt", prefix));
    let pat = pat.display().to_string();
    trace!("collecting {}", pat);

    let mut paths = glob(&pat)?.collect::<Result<Vec<PathBuf>, _>>()?;
    paths.sort();
    Ok(paths)
}

fn expected_path(input_path: &Path) -> PathBuf {
    let name = input_path
        .file_name()
        .map(|name| name.to_string_lossy().replacen("input", "output", 1))
        .unwrap_or_default();
    input_path.with_file_name(name)
}

fn read(path: &Path) -> Result<String, JudgeError> {
    fs::read_to_string(path).map_err(|source| JudgeError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Judges `task` on every testcase in `dir`.
pub fn check(task: Task, dir: &Path) -> Result<Verdict, JudgeError> {
    let inputs = collect(dir, "input")?;
    let outputs = collect(dir, "output")?;

    if inputs.is_empty() || inputs.len() != outputs.len() {
        return Err(JudgeError::TestcasesMissing {
            dir: dir.display().to_string(),
            inputs: inputs.len(),
            outputs: outputs.len(),
        });
    }

    let mut pairs = Vec::with_capacity(inputs.len());
    for input_path in inputs.iter() {
        let output_path = expected_path(input_path);
        if !outputs.contains(&output_path) {
            return Err(JudgeError::TestcasesMissing {
                dir: dir.display().to_string(),
                inputs: inputs.len(),
                outputs: outputs.len(),
            });
        }
        pairs.push((input_path, output_path));
    }

    let mut passed = 0;
    let mut runtime_errors = 0;
    for (input_path, output_path) in pairs {
        let input = read(input_path)?;
        let expected = read(&output_path)?;

        let ok = match task.run(&input) {
            Ok(output) => output.trim() == expected.trim(),
            Err(err) => {
                warn!("{}: {}", input_path.display(), err);
                runtime_errors += 1;
                false
            }
        };

        debug!(
            "{} vs {}: {}",
            input_path.display(),
            output_path.display(),
            if ok { "ok" } else { "ng" }
        );
        if ok {
            passed += 1;
        }
    }

    Ok(Verdict {
        passed,
        runtime_errors,
        total: inputs.len(),
    })
}
