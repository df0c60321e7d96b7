// bas CLI - User-facing command-line interface for the transpiler.
//
// Commands:
//   - `bas build`: Transpiles the project to a .bas file.
//   - `bas emit`: Transpiles and prints the BASIC source to stdout.
//   - `bas check`: Checks for errors without writing output.

use clap::Parser;
use js2bas::cli::{run_cli, Cli};
use std::process::exit;

/// Entry point for the bas CLI.
/// Parses arguments and dispatches to the appropriate command handler.
fn main() {
    let cli = Cli::parse();
    exit(run_cli(cli));
}
