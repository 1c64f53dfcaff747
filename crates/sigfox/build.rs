use std::fs;
use std::path::{Path, PathBuf};

use clap::CommandFactory;

// cli.rs only needs clap and clap_complete, both build-dependencies.
#[path = "src/cli.rs"]
mod cli;

fn main() {
    println!("cargo::rerun-if-changed=src/cli.rs");

    let out_dir: PathBuf = std::env::var_os("OUT_DIR")
        .expect("cargo sets OUT_DIR for build scripts")
        .into();
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).expect("create man page directory");

    write_man_pages(&cli::Cli::command(), &man_dir);
}

/// One page per command, named `sigfox-devices-list.1` and so on.
fn write_man_pages(cmd: &clap::Command, dir: &Path) {
    let name = cmd.get_name().to_owned();
    let target = dir.join(format!("{name}.1"));

    let mut page = Vec::new();
    clap_mangen::Man::new(cmd.clone())
        .render(&mut page)
        .unwrap_or_else(|e| panic!("rendering man page for `{name}`: {e}"));
    fs::write(&target, page).unwrap_or_else(|e| panic!("writing {}: {e}", target.display()));

    for sub in cmd.get_subcommands().filter(|s| !s.is_hide_set()) {
        let renamed = sub.clone().name(format!("{name}-{}", sub.get_name()));
        write_man_pages(&renamed, dir);
    }
}
