use serde::Serialize;
use undo_array::Snapshot;

use crate::app::GlobalOptions;

/// Print `data` as JSON (if `--json`) or call `display_fn` for human-readable output.
pub fn print_output<T: Serialize>(
    data: &T,
    opts: &GlobalOptions,
    display_fn: impl FnOnce(&T),
) -> anyhow::Result<()> {
    if opts.json {
        let json = serde_json::to_string_pretty(data)?;
        println!("{json}");
    } else {
        display_fn(data);
    }
    Ok(())
}

/// Serializable mirror of a [`Snapshot`], for `--json` output.
#[derive(Debug, Serialize)]
pub struct SnapshotOutput {
    pub slot_count: usize,
    pub history_lens: Vec<usize>,
    pub max_depth: usize,
    pub rows: Vec<Vec<Option<char>>>,
}

impl From<&Snapshot<char>> for SnapshotOutput {
    fn from(snap: &Snapshot<char>) -> Self {
        Self {
            slot_count: snap.slot_count(),
            history_lens: snap.history_lens().to_vec(),
            max_depth: snap.max_depth(),
            rows: snap.rows().map(<[Option<char>]>::to_vec).collect(),
        }
    }
}

/// Render a snapshot as aligned text columns, one slot per column.
///
/// The first line marks each slot as empty (`/`) or holding history (`.`); below it, one
/// row per history depth shows each slot's value at that depth, blank where a slot's
/// history is shorter. With `verbose`, two header lines carrying the slot count and the
/// per-slot history depths are prepended.
pub fn render_snapshot(snap: &Snapshot<char>, verbose: bool) -> String {
    let mut out = String::new();

    if verbose {
        out.push_str(&format!("slots:   {}\n", snap.slot_count()));
        let mut line = String::from("depths:  ");
        for len in snap.history_lens() {
            line.push_str(&format!("{len}  "));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    let mut presence = String::new();
    for len in snap.history_lens() {
        presence.push(if *len == 0 { '/' } else { '.' });
        presence.push_str("  ");
    }
    out.push_str(presence.trim_end());
    out.push('\n');

    for row in snap.rows() {
        let mut line = String::new();
        for cell in row {
            match cell {
                Some(value) => {
                    line.push(*value);
                    line.push_str("  ");
                }
                None => line.push_str("   "),
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}
