use clap::Parser;
use js2bas::compiler::{compile_project, CompileOptions};
use std::path::PathBuf;

#[derive(Parser)]
struct Args {
    /// Path to the project directory or main.js file
    #[clap(default_value = ".")]
    input_path: String,
    /// Print the token stream after lexing
    #[clap(long)]
    tokens: bool,
    /// Print each statement's AST after parsing
    #[clap(long)]
    ast: bool,
}

fn main() {
    let args = Args::parse();

    let opts = CompileOptions {
        input_path: PathBuf::from(&args.input_path),
        output_name: "output".to_string(),
        dev_mode: true,
        print_tokens: args.tokens,
        print_ast: args.ast,
        emit_stdout: false,
        check_only: false,
    };

    match compile_project(opts) {
        Ok(result) => {
            if result.success {
                println!("\n✓ Transpilation successful");

                // Show the generated BASIC, then clean it up (dev mode)
                if let Some(out_path) = result.out_path {
                    println!("\nGenerated BASIC source...\n");
                    println!("{}", "=".repeat(50));

                    match std::fs::read_to_string(&out_path) {
                        Ok(text) => print!("{}", text),
                        Err(e) => eprintln!("Failed to read '{}': {}", out_path.display(), e),
                    }

                    println!("{}", "=".repeat(50));

                    if let Err(e) = std::fs::remove_file(&out_path) {
                        eprintln!(
                            "Warning: failed to remove '{}': {}",
                            out_path.display(),
                            e
                        );
                    } else {
                        println!("Cleaned up: {}", out_path.display());
                    }
                }
            } else {
                eprintln!(
                    "\n✗ Transpilation failed with {} error(s)",
                    result.error_count
                );
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
