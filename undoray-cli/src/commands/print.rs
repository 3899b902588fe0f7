use std::{fs, path::Path};

use anyhow::Context;

use crate::{
    app::GlobalOptions,
    commands::replay::Script,
    output::{print_output, render_snapshot, SnapshotOutput},
};

pub fn run(path: &Path, opts: &GlobalOptions) -> anyhow::Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read script '{}'", path.display()))?;
    let script = Script::parse(&text)?;
    let ua = script.replay()?;

    let snap = ua.snapshot();
    print_output(&SnapshotOutput::from(&snap), opts, |_| {
        print!("{}", render_snapshot(&snap, opts.verbose));
    })
}
