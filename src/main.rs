//! paspy CLI - Pascal to Python translator

use anyhow::Result;
use clap::Parser;
use paspy::translate_with_diagnostics;
use std::path::PathBuf;

/// paspy - Pascal to Python translator
#[derive(Parser, Debug)]
#[command(name = "paspy")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Translate Pascal code to Python", long_about = None)]
struct Cli {
    /// Input Pascal file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output Python file (default: <INPUT>.py)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Check only (don't write output)
    #[arg(short, long)]
    check: bool,

    /// Emit JSON diagnostics to stderr (on failure only)
    #[arg(long)]
    diag_json: bool,

    /// Show debug information
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        println!("[DEBUG] Input: {:?}", cli.input);
        println!("[DEBUG] Output: {:?}", cli.output);
    }

    let source = std::fs::read_to_string(&cli.input)?;

    if cli.debug {
        println!("[DEBUG] Source length: {} bytes", source.len());
    }

    let python = match translate_with_diagnostics(&source, Some(&cli.input)) {
        Ok(code) => code,
        Err(diags) => {
            print!("{}", diags.to_text());
            if cli.diag_json {
                eprintln!("{}", diags.to_json());
            }
            std::process::exit(1);
        }
    };

    if cli.debug {
        println!("[DEBUG] Generated Python code:");
        println!("{python}");
    }

    if cli.check {
        println!("Translation successful.");
        return Ok(());
    }

    let output_path = cli.output.unwrap_or_else(|| {
        // Default: same filename with .py, in the current directory
        let mut p = cli.input.clone();
        p.set_extension("py");
        if let Some(filename) = p.file_name() {
            PathBuf::from(filename)
        } else {
            p
        }
    });

    std::fs::write(&output_path, &python)?;
    println!(
        "Translated '{}' -> '{}'",
        cli.input.display(),
        output_path.display()
    );

    Ok(())
}
