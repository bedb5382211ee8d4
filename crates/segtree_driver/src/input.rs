use std::str::SplitAsciiWhitespace;

use crate::error::DriverError;

/// Whitespace-separated token reader over the whole input.
pub struct Tokens<'a> {
    inner: SplitAsciiWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: input.split_ascii_whitespace(),
        }
    }

    pub fn next_token(&mut self, expected: &'static str) -> Result<&'a str, DriverError> {
        self.inner
            .next()
            .ok_or(DriverError::UnexpectedEof { expected })
    }

    pub fn next_i64(&mut self, expected: &'static str) -> Result<i64, DriverError> {
        let token = self.next_token(expected)?;
        token.parse().map_err(|_| DriverError::InvalidInteger {
            expected,
            token: token.to_owned(),
        })
    }

    pub fn next_count(&mut self, expected: &'static str) -> Result<usize, DriverError> {
        let value = self.next_i64(expected)?;
        usize::try_from(value).map_err(|_| DriverError::NegativeCount { expected, value })
    }
}
