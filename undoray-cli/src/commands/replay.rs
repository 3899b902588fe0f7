//! Batch replay of line-oriented operation scripts.
//!
//! A script describes a sequence of operations against one array instance. The format is
//! whitespace-token oriented and owned by this driver, not by the core container:
//!
//! ```text
//! a 7        create an array of 7 slots (must come first)
//! s 2 x      set slot 2 to the character 'x'
//! g 2        read slot 2 if it is initialized, discarding the value
//! u 2        undo slot 2 if it is initialized
//! ```
//!
//! Replaying the same script thousands of times over, each iteration building and then
//! dropping a fresh array, is the traditional way to soak the container for leaks under
//! an external memory monitor.

use std::{fs, path::Path};

use anyhow::{bail, Context};
use undo_array::UndoArray;

use crate::{
    app::GlobalOptions,
    output::{print_output, render_snapshot, SnapshotOutput},
};

/// One operation directive from a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Append a value to a slot's history.
    Set(usize, char),
    /// Read a slot's current value if the slot is initialized; the value is discarded.
    Get(usize),
    /// Undo a slot's most recent value if the slot is initialized.
    Undo(usize),
}

/// A parsed operation script: the array size to create, then the operations to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    pub size: usize,
    pub ops: Vec<Op>,
}

impl Script {
    /// Parses a script from its textual form.
    ///
    /// The first directive must be `a <size>`; afterwards any number of `s`, `g`, and
    /// `u` directives follow. Unknown directives and malformed operands are rejected
    /// with the position of the offending token.
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let mut cursor = Cursor { tokens: &tokens, pos: 0 };

        let directive = cursor.next().context("script is empty")?;
        if directive != "a" {
            bail!("script must start with an 'a <size>' creation directive, found '{directive}'");
        }
        let size_tok = cursor.operand("array size")?;
        let size: usize = size_tok
            .parse()
            .with_context(|| format!("invalid array size '{size_tok}' at token {}", cursor.pos))?;

        let mut ops = Vec::new();
        while let Some(directive) = cursor.next() {
            let op = match directive {
                "s" => {
                    let index = cursor.index_operand()?;
                    let value = cursor.operand("value")?;
                    let mut chars = value.chars();
                    let (Some(value), None) = (chars.next(), chars.next()) else {
                        bail!(
                            "set value at token {} must be a single character",
                            cursor.pos
                        );
                    };
                    Op::Set(index, value)
                }
                "g" => Op::Get(cursor.index_operand()?),
                "u" => Op::Undo(cursor.index_operand()?),
                other => bail!("unknown directive '{other}' at token {}", cursor.pos),
            };
            ops.push(op);
        }

        Ok(Self { size, ops })
    }

    /// Builds a fresh array of the scripted size and applies every operation in order.
    ///
    /// `g` and `u` directives are applied only when the slot is initialized, matching
    /// the read-if-initialized semantics of the script format. An out-of-range index in
    /// any directive is a script error and aborts the replay.
    pub fn replay(&self) -> anyhow::Result<UndoArray<char>> {
        let mut ua = UndoArray::new(self.size);
        for (n, op) in self.ops.iter().enumerate() {
            let applied = match *op {
                Op::Set(index, value) => ua.set(index, value),
                Op::Get(index) => ua.is_initialized(index).and_then(|init| {
                    if init {
                        ua.get(index).map(|_| ())
                    } else {
                        Ok(())
                    }
                }),
                Op::Undo(index) => ua.is_initialized(index).and_then(|init| {
                    if init {
                        ua.undo(index)
                    } else {
                        Ok(())
                    }
                }),
            };
            applied.with_context(|| format!("operation {} ({op:?}) failed", n + 1))?;
        }
        Ok(ua)
    }
}

/// Token cursor over a whitespace-split script, tracking 1-based positions for errors.
struct Cursor<'a> {
    tokens: &'a [&'a str],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn next(&mut self) -> Option<&'a str> {
        let token = self.tokens.get(self.pos).copied()?;
        self.pos += 1;
        Some(token)
    }

    fn operand(&mut self, what: &str) -> anyhow::Result<&'a str> {
        let directive_pos = self.pos;
        self.next()
            .with_context(|| format!("missing {what} after directive at token {directive_pos}"))
    }

    fn index_operand(&mut self) -> anyhow::Result<usize> {
        let token = self.operand("slot index")?;
        token
            .parse()
            .with_context(|| format!("invalid slot index '{token}' at token {}", self.pos))
    }
}

pub fn run(path: &Path, repeat: usize, print: bool, opts: &GlobalOptions) -> anyhow::Result<()> {
    if repeat == 0 {
        bail!("repeat count must be at least 1");
    }

    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read script '{}'", path.display()))?;

    // Parsing is repeated per iteration on purpose: each cycle must build the
    // whole working set from scratch and drop it again.
    let mut last = None;
    for iteration in 0..repeat {
        let script = Script::parse(&text)?;
        let ua = script.replay()?;
        if iteration == repeat - 1 {
            last = Some(ua);
        }
        if (iteration + 1) % 1000 == 0 {
            log::debug!("completed {} of {repeat} iterations", iteration + 1);
        }
    }
    log::info!(
        "replayed '{}' {repeat} time(s)",
        path.display()
    );

    if print {
        let snap = last
            .as_ref()
            .expect("at least one iteration ran")
            .snapshot();
        print_output(&SnapshotOutput::from(&snap), opts, |_| {
            print!("{}", render_snapshot(&snap, opts.verbose));
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_creation_and_ops() {
        let script = Script::parse("a 7\ns 2 a\ns 2 b\ng 2\nu 2\n").unwrap();
        assert_eq!(script.size, 7);
        assert_eq!(
            script.ops,
            vec![
                Op::Set(2, 'a'),
                Op::Set(2, 'b'),
                Op::Get(2),
                Op::Undo(2)
            ]
        );
    }

    #[test]
    fn test_parse_ignores_line_structure() {
        // The format is token-oriented; newlines are ordinary whitespace.
        let script = Script::parse("a 3 s 0 x u 0").unwrap();
        assert_eq!(script.size, 3);
        assert_eq!(script.ops.len(), 2);
    }

    #[test]
    fn test_parse_rejects_missing_creation() {
        assert!(Script::parse("s 0 x").is_err());
        assert!(Script::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_bad_operands() {
        assert!(Script::parse("a x").is_err());
        assert!(Script::parse("a 3 s 0").is_err());
        assert!(Script::parse("a 3 s 0 xy").is_err());
        assert!(Script::parse("a 3 q 0").is_err());
        assert!(Script::parse("a -1").is_err());
    }

    #[test]
    fn test_replay_end_state() {
        let script = Script::parse("a 7 s 2 a s 2 b s 4 c u 2 u 4").unwrap();
        let ua = script.replay().unwrap();
        assert_eq!(ua.get(2), Ok('a'));
        assert_eq!(ua.is_initialized(4), Ok(false));
    }

    #[test]
    fn test_replay_skips_uninitialized_reads_and_undos() {
        let script = Script::parse("a 2 g 0 u 0 g 1 u 1 s 0 z g 0").unwrap();
        let ua = script.replay().unwrap();
        assert_eq!(ua.get(0), Ok('z'));
        assert_eq!(ua.is_initialized(1), Ok(false));
    }

    #[test]
    fn test_replay_rejects_out_of_range_index() {
        let script = Script::parse("a 2 s 5 x").unwrap();
        assert!(script.replay().is_err());
    }

    #[test]
    fn test_replay_is_deterministic() {
        let script = Script::parse("a 4 s 0 a s 1 b s 0 c u 0 g 1").unwrap();
        assert_eq!(script.replay().unwrap(), script.replay().unwrap());
    }
}
