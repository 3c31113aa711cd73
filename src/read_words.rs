use crate::error::InvalidInput;
use std::fs;
use std::io::{self, stdin, Read};
use std::str::{FromStr, SplitWhitespace};

/// Reads the whole input, from a file if a path is given or from stdin otherwise.
pub fn read_all(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(path) => {
            trace!("read input from {}", path);
            fs::read_to_string(path)
        }
        None => {
            let mut buf = String::new();
            stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Whitespace-separated tokens of an input.
pub struct Words<'a> {
    iter: SplitWhitespace<'a>,
}

impl<'a> Words<'a> {
    pub fn new(input: &'a str) -> Self {
        Words {
            iter: input.split_whitespace(),
        }
    }

    /// Parses the next token. `what` names the value in error messages.
    pub fn next_value<T: FromStr>(&mut self, what: &str) -> Result<T, InvalidInput> {
        let token = self.iter.next().ok_or_else(|| InvalidInput::MissingToken {
            what: what.to_owned(),
        })?;

        token.parse::<T>().map_err(|_| InvalidInput::Malformed {
            what: what.to_owned(),
            token: token.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_value() {
        let mut words = Words::new("3\n -7 2\r\n");
        assert_eq!(Ok(3usize), words.next_value::<usize>("N"));
        assert_eq!(Ok(-7i64), words.next_value::<i64>("S"));
        assert_eq!(Ok(2i64), words.next_value::<i64>("M"));
        assert_eq!(
            Err(InvalidInput::MissingToken {
                what: "S".to_owned()
            }),
            words.next_value::<i64>("S")
        );
    }

    #[test]
    fn test_malformed() {
        let mut words = Words::new("-1 x");
        assert_eq!(
            Err(InvalidInput::Malformed {
                what: "N".to_owned(),
                token: "-1".to_owned(),
            }),
            words.next_value::<usize>("N")
        );
        assert!(words.next_value::<i64>("K").is_err());
    }
}
