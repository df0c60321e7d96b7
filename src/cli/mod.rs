use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI definition for the bas transpiler tool.
#[derive(Parser)]
#[command(name = "bas")]
#[command(about = "JavaScript to GW-BASIC transpiler CLI")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Supported subcommands for the bas CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Transpile the project to a .bas file
    Build {
        /// Path to the project directory or .js file
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Name of the output file (without the .bas extension)
        #[arg(short, long, default_value = "output")]
        output: String,
    },

    /// Transpile and write the BASIC source to stdout
    Emit {
        /// Path to the project directory or main.js file
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Check for errors without writing output
    Check {
        /// Path to the project directory or main.js file
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

/// Entrypoint for CLI logic.
/// Returns exit code (0 for success, nonzero for error).
pub fn run_cli(cli: Cli) -> i32 {
    use crate::compiler::{compile_project, CompileOptions};

    match cli.command {
        None => {
            println!("🎉 bas CLI - JavaScript to GW-BASIC transpiler");
            println!("Type `bas --help` for usage");
            0
        }
        Some(Commands::Build { path, output }) => {
            let opts = CompileOptions {
                input_path: path,
                output_name: output.clone(),
                dev_mode: false,
                print_tokens: false,
                print_ast: false,
                emit_stdout: false,
                check_only: false,
            };

            match compile_project(opts) {
                Ok(result) => {
                    if result.error_count > 0 {
                        eprintln!("Build failed with {} error(s)", result.error_count);
                        1
                    } else if result.success {
                        println!("✓ Build successful: {}.bas", output);
                        0
                    } else {
                        eprintln!("Build failed");
                        1
                    }
                }
                Err(e) => {
                    eprintln!("{}", e);
                    1
                }
            }
        }
        Some(Commands::Emit { path }) => {
            let opts = CompileOptions {
                input_path: path,
                output_name: "output".to_string(),
                dev_mode: false,
                print_tokens: false,
                print_ast: false,
                emit_stdout: true,
                check_only: false,
            };

            match compile_project(opts) {
                Ok(result) => {
                    if result.success {
                        0
                    } else {
                        eprintln!("Transpilation failed with {} error(s)", result.error_count);
                        1
                    }
                }
                Err(e) => {
                    eprintln!("Failed to transpile: {}", e);
                    1
                }
            }
        }
        Some(Commands::Check { path }) => {
            let opts = CompileOptions {
                input_path: path,
                output_name: "output".to_string(),
                dev_mode: false,
                print_tokens: false,
                print_ast: false,
                emit_stdout: false,
                check_only: true,
            };

            match compile_project(opts) {
                Ok(result) => {
                    if result.error_count > 0 {
                        println!("Found {} error(s)", result.error_count);
                        1
                    } else {
                        println!("✓ No errors found");
                        0
                    }
                }
                Err(e) => {
                    eprintln!("Failed to check: {}", e);
                    1
                }
            }
        }
    }
}
