//! Plain-text assignment cases.
//!
//! A file is a sequence of cases, each made of:
//!
//! - a line holding `n`;
//! - `n` lines of `n` whitespace-separated integers, the matrix rows;
//! - one line of `n` integers, the expected column of each row;
//! - one line holding the expected optimal value.
//!
//! Blank lines between cases are ignored.

use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    pub line: usize,
    pub matrix: Vec<Vec<i64>>,
    pub solution: Vec<usize>,
    pub optimal_value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CaseError {
    #[display("{name}:{line}: unexpected end of file")]
    UnexpectedEof { name: String, line: usize },
    #[display("{name}:{line}: cannot parse {token:?}")]
    BadNumber {
        name: String,
        line: usize,
        token: String,
    },
    #[display("{name}:{line}: expected {expected} values, found {found}")]
    WrongLength {
        name: String,
        line: usize,
        expected: usize,
        found: usize,
    },
}

struct Lines<'a> {
    name: &'a str,
    inner: std::iter::Peekable<std::iter::Enumerate<std::str::Lines<'a>>>,
    line: usize,
}

impl<'a> Lines<'a> {
    fn skip_blank(&mut self) -> bool {
        while let Some((_, text)) = self.inner.peek() {
            if !text.trim().is_empty() {
                return true;
            }
            self.inner.next();
        }
        false
    }

    fn values<T: FromStr>(&mut self, expected: Option<usize>) -> Result<Vec<T>, CaseError> {
        let Some((index, text)) = self.inner.next() else {
            return Err(CaseError::UnexpectedEof {
                name: self.name.to_owned(),
                line: self.line + 1,
            });
        };
        self.line = index + 1;
        let values = text
            .split_whitespace()
            .map(|token| {
                token.parse().map_err(|_| CaseError::BadNumber {
                    name: self.name.to_owned(),
                    line: self.line,
                    token: token.to_owned(),
                })
            })
            .collect::<Result<Vec<T>, _>>()?;
        match expected {
            Some(expected) if expected != values.len() => Err(CaseError::WrongLength {
                name: self.name.to_owned(),
                line: self.line,
                expected,
                found: values.len(),
            }),
            _ => Ok(values),
        }
    }

    fn value<T: FromStr>(&mut self) -> Result<T, CaseError> {
        let mut values = self.values(Some(1))?;
        Ok(values.remove(0))
    }
}

pub fn parse_cases(name: &str, text: &str) -> Result<Vec<Case>, CaseError> {
    let mut lines = Lines {
        name,
        inner: text.lines().enumerate().peekable(),
        line: 0,
    };
    let mut cases = Vec::new();
    while lines.skip_blank() {
        let n: usize = lines.value()?;
        let line = lines.line;
        let matrix = (0..n)
            .map(|_| lines.values(Some(n)))
            .collect::<Result<Vec<_>, _>>()?;
        let solution = lines.values(Some(n))?;
        let optimal_value = lines.value()?;
        cases.push(Case {
            line,
            matrix,
            solution,
            optimal_value,
        });
    }
    Ok(cases)
}
