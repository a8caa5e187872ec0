use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hexbin::convert::{ConvertOptions, DEFAULT_INPUT, DEFAULT_OUTPUT, convert_file};
use hexbin::dump::{DumpOptions, dump_file};
use hexbin::hexlist::{LetterCase, TrailingSeparator};
use hexbin::inspect::inspect_file;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "A utility for converting hex byte lists to binary files and back"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a comma separated hex list into a binary file
    Convert {
        /// Text file holding the hex list
        #[arg(default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// Binary file to create or overwrite
        #[arg(default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Treat a trailing comma or an empty input as an error
        #[arg(long)]
        strict_trailing: bool,

        /// Fail unless the decoded bytes are a WebAssembly module
        #[arg(long)]
        expect_wasm: bool,

        /// Print the conversion report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the bytes of a binary file as a comma separated hex list
    Dump {
        /// Binary file to read
        input: PathBuf,

        /// Text file to create or overwrite
        output: PathBuf,

        /// Use uppercase hex digits
        #[arg(long)]
        upper: bool,

        /// Do not pad values to two digits
        #[arg(long)]
        no_pad: bool,

        /// Do not end the file with a newline
        #[arg(long)]
        no_newline: bool,
    },

    /// Detect the content type of a file
    Inspect {
        /// File to inspect
        file: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    hexbin::telemetry::init()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            strict_trailing,
            expect_wasm,
            json,
        } => {
            let options = ConvertOptions {
                input,
                output,
                trailing_separator: if strict_trailing {
                    TrailingSeparator::Reject
                } else {
                    TrailingSeparator::Allow
                },
                expect_wasm,
            };

            let report = convert_file(&options).with_context(|| {
                format!(
                    "Failed to convert {} to {}",
                    options.input.display(),
                    options.output.display()
                )
            })?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "Wrote {} bytes ({}) to {}",
                    report.byte_count,
                    report.content.mime_type,
                    report.output.display()
                );
            }
        }

        Commands::Dump {
            input,
            output,
            upper,
            no_pad,
            no_newline,
        } => {
            let options = DumpOptions {
                case: if upper {
                    LetterCase::Upper
                } else {
                    LetterCase::Lower
                },
                zero_pad: !no_pad,
                trailing_newline: !no_newline,
            };

            let report = dump_file(&input, &output, &options)
                .with_context(|| format!("Failed to dump {}", input.display()))?;

            println!(
                "Wrote {} values to {}",
                report.byte_count,
                report.output.display()
            );
        }

        Commands::Inspect { file, json } => {
            let inspection = inspect_file(&file)
                .with_context(|| format!("Failed to inspect {}", file.display()))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&inspection)?);
            } else {
                match inspection.wasm_version {
                    Some(version) => println!(
                        "{}: {} (version {}), {} bytes",
                        inspection.file_path.display(),
                        inspection.content.mime_type,
                        version,
                        inspection.size_bytes
                    ),
                    None => println!(
                        "{}: {}, {} bytes",
                        inspection.file_path.display(),
                        inspection.content.mime_type,
                        inspection.size_bytes
                    ),
                }
            }
        }
    }

    Ok(())
}
