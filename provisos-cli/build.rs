//! Build script for provisos-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Flags shared by `check` and `describe`.
fn proviso_args() -> Vec<Arg> {
    let flag = |name: &'static str, help: &'static str| {
        Arg::new(name).long(name).help(help).action(ArgAction::SetTrue)
    };
    let value = |name: &'static str, value_name: &'static str, help: &'static str| {
        Arg::new(name).long(name).value_name(value_name).help(help)
    };
    vec![
        value("preset", "PRESET", "Start from a named preset"),
        flag("must-exist", "The path must exist"),
        flag("must-not-exist", "The path must not exist"),
        flag("optional", "The path may be absent"),
        flag("no-follow", "Inspect symbolic links themselves"),
        flag("dir", "Must be a directory"),
        flag("file", "Must be a regular file"),
        flag("symlink", "Must be a symbolic link"),
        flag("non-empty", "Size must be greater than zero"),
        value("size-gt", "N", "Size must be greater than N bytes"),
        value("size-lt", "N", "Size must be less than N bytes"),
        value("size-eq", "N", "Size must equal N bytes"),
        value("perm", "MODE", "Permission bits must equal MODE"),
        value("modified-within", "SECS", "Must have been modified within SECS seconds"),
        value("format", "FORMAT", "Output format (text or json)"),
    ]
}

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("provisos")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Check filesystem objects against declarative provisos")
        .long_about(
            "Command-line tool for checking that files and directories exist (or do not) \
             and satisfy metadata checks",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("check")
                .about("Check paths against a proviso")
                .long_about("Check each PATH against the proviso given by flags")
                .arg(Arg::new("path").value_name("PATH").num_args(1..).required(true))
                .args(proviso_args()),
            Command::new("describe")
                .about("Describe a proviso in words")
                .long_about("Print the description of the proviso given by flags")
                .args(proviso_args()),
            Command::new("run")
                .about("Check every entry of a provisos file")
                .long_about("Load a provisos file (default: nearest provisos.yaml) and check every entry")
                .arg(Arg::new("file").value_name("FILE"))
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_name("FORMAT")
                        .help("Output format (text or json)"),
                ),
            Command::new("validate")
                .about("Validate a provisos file")
                .long_about("Check a provisos file for errors without checking any paths")
                .arg(Arg::new("file").value_name("FILE").required(true)),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("provisos.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/utils.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
