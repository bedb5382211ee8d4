use std::io::Write;

use lazy_segtree::{LazySegmentTree, RangeMaxRangeAdd, TreeDump};

use crate::command::Command;
use crate::error::DriverError;
use crate::input::Tokens;

#[derive(Clone, Copy, Debug, Default)]
pub struct RunOptions {
    /// Write the tree to the dump sink after building and after every command.
    pub dump: bool,
}

pub struct Session {
    tree: LazySegmentTree<RangeMaxRangeAdd>,
}

impl Session {
    pub fn new(values: &[i64]) -> Self {
        Self {
            tree: LazySegmentTree::new(values),
        }
    }

    /// Runs one command, returning the answer for queries.
    pub fn execute(&mut self, command: &Command) -> Option<i64> {
        match command {
            Command::Max { range } => Some(self.tree.fold(range.clone())),
            Command::Add { range, delta } => {
                self.tree.update(range.clone(), *delta);
                None
            }
        }
    }

    pub fn dump(&self) -> TreeDump<'_, RangeMaxRangeAdd> {
        self.tree.dump()
    }
}

/// Reads `n`, `n` values, `m`, then `m` commands from `input` and writes one
/// line per query answer to `output`. Tree dumps, when enabled, go to `dump`.
pub fn run<W: Write, D: Write>(
    input: &str,
    output: &mut W,
    dump: &mut D,
    options: RunOptions,
) -> Result<(), DriverError> {
    let mut tokens = Tokens::new(input);

    let n = tokens.next_count("array length")?;
    let values = (0..n)
        .map(|_| tokens.next_i64("array value"))
        .collect::<Result<Vec<_>, _>>()?;
    let mut session = Session::new(&values);
    tracing::debug!(n, capacity = session.tree.capacity(), "tree built");
    if options.dump {
        write!(dump, "{}", session.dump())?;
    }

    let m = tokens.next_count("command count")?;
    for index in 0..m {
        let command = Command::parse(&mut tokens)?;
        tracing::trace!(index, ?command, "executing");
        if let Some(answer) = session.execute(&command) {
            writeln!(output, "{answer}")?;
        }
        if options.dump {
            write!(dump, "{}", session.dump())?;
        }
    }

    if tokens.next_token("end of input").is_ok() {
        tracing::warn!("ignoring trailing input after {m} commands");
    }
    output.flush()?;
    dump.flush()?;
    Ok(())
}
