//! A command-line interface for the Playfair cipher.

use clap::{Parser, Subcommand};
use log::{error, info};
use playfair_core::cipher;
use playfair_core::error::LookupError;
use playfair_core::matrix::KeyMatrix;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the 5x5 key matrix derived from a secret key
    Matrix {
        /// The secret key
        #[arg(short, long)]
        key: String,

        /// Print the matrix as JSON instead of a grid
        #[arg(long)]
        json: bool,
    },
    /// Encrypt text with the Playfair cipher
    Encrypt {
        /// The secret key
        #[arg(short, long)]
        key: String,

        /// The text to transform; reads --input or stdin when omitted
        text: Option<String>,

        /// Read the text from a file
        #[arg(short, long, conflicts_with = "text")]
        input: Option<PathBuf>,

        /// Write the result to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Decrypt Playfair ciphertext (fillers from encryption are kept)
    Decrypt {
        /// The secret key
        #[arg(short, long)]
        key: String,

        /// The text to transform; reads --input or stdin when omitted
        text: Option<String>,

        /// Read the text from a file
        #[arg(short, long, conflicts_with = "text")]
        input: Option<PathBuf>,

        /// Write the result to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Matrix { key, json } => {
            let matrix = KeyMatrix::from_key(&key);
            if json {
                match serde_json::to_string_pretty(&matrix) {
                    Ok(rendered) => println!("{rendered}"),
                    Err(e) => error!("Failed to serialize key matrix: {e}"),
                }
            } else {
                println!("{matrix}");
            }
        }
        Commands::Encrypt {
            key,
            text,
            input,
            output,
        } => transform(&key, text, input.as_deref(), output.as_deref(), cipher::encrypt),
        Commands::Decrypt {
            key,
            text,
            input,
            output,
        } => transform(&key, text, input.as_deref(), output.as_deref(), cipher::decrypt),
    }
}

/// Runs one cipher operation end to end: build the matrix, gather the
/// text, transform it, and deliver the result.
fn transform(
    key: &str,
    text: Option<String>,
    input: Option<&Path>,
    output: Option<&Path>,
    operation: fn(&str, &KeyMatrix) -> Result<String, LookupError>,
) {
    let matrix = KeyMatrix::from_key(key);
    info!("Key matrix:\n{matrix}");

    let source = match read_text(text, input) {
        Ok(source) => source,
        Err(e) => {
            error!("Failed to read input: {e}");
            return;
        }
    };

    match operation(&source, &matrix) {
        Ok(result) => write_result(&result, output),
        Err(e) => error!("Cipher operation failed: {e}"),
    }
}

fn read_text(text: Option<String>, input: Option<&Path>) -> io::Result<String> {
    match (text, input) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => fs::read_to_string(path),
        (None, None) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn write_result(result: &str, output: Option<&Path>) {
    match output {
        Some(path) => {
            if let Err(e) = fs::write(path, result) {
                error!("Failed to write output file: {e}");
            } else {
                info!("Result written to '{}'.", path.display());
            }
        }
        None => println!("{result}"),
    }
}
