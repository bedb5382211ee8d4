use std::ops::Range;

use crate::error::DriverError;
use crate::input::Tokens;

/// One parsed command, bounds already converted to half-open 0-indexed form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `m l r`
    Max { range: Range<usize> },
    /// `a l r add`
    Add { range: Range<usize>, delta: i64 },
}

impl Command {
    pub fn parse(tokens: &mut Tokens<'_>) -> Result<Self, DriverError> {
        let code = tokens.next_token("command")?;
        match code {
            "m" => {
                let range = parse_range(tokens)?;
                Ok(Self::Max { range })
            }
            "a" => {
                let range = parse_range(tokens)?;
                let delta = tokens.next_i64("add value")?;
                Ok(Self::Add { range, delta })
            }
            _ => Err(DriverError::UnknownCommand {
                token: code.to_owned(),
            }),
        }
    }
}

fn parse_bound(tokens: &mut Tokens<'_>, expected: &'static str) -> Result<usize, DriverError> {
    let value = tokens.next_i64(expected)?;
    if value < 1 {
        return Err(DriverError::InvalidBound { value });
    }
    usize::try_from(value).map_err(|_| DriverError::InvalidBound { value })
}

/// 1-indexed inclusive `l r` to `l - 1..r`.
fn parse_range(tokens: &mut Tokens<'_>) -> Result<Range<usize>, DriverError> {
    let l = parse_bound(tokens, "left bound")?;
    let r = parse_bound(tokens, "right bound")?;
    Ok(l - 1..r)
}
