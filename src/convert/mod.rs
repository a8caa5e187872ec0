//! Hex list file to binary file conversion.
//!
//! The whole input is decoded in memory before the output is touched, so a
//! malformed token never produces a partial output file.

use crate::error::{HexBinError, Result};
use crate::hexlist::{self, TrailingSeparator};
use crate::inspect::{self, ContentKind};
use crate::output::write_atomic;
use crate::telemetry::{LogMessage, log_with_context};
use log::Level;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default input path, relative to the working directory
pub const DEFAULT_INPUT: &str = "bin.txt";
/// Default output path, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "pointer.wasm";

/// Configuration options for a conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Text file holding the comma separated hex list
    pub input: PathBuf,

    /// Binary file to create or overwrite
    pub output: PathBuf,

    /// Treatment of a trailing comma or an empty input
    pub trailing_separator: TrailingSeparator,

    /// Refuse to write anything that is not a WebAssembly module
    pub expect_wasm: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            trailing_separator: TrailingSeparator::Allow,
            expect_wasm: false,
        }
    }
}

/// Summary of a successful conversion.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ConvertReport {
    pub input: PathBuf,
    pub output: PathBuf,

    /// Number of tokens decoded (equal to the bytes written)
    pub byte_count: usize,

    pub content: ContentKind,
}

/// Decodes the hex list in `options.input` and writes the bytes to
/// `options.output`.
///
/// # Errors
///
/// Returns an error if:
/// - The input file is missing or unreadable (`FileNotFound`)
/// - The input is not UTF-8 (`InvalidText`)
/// - A token is not hexadecimal (`Parse`) or not a byte (`Range`)
/// - `expect_wasm` is set and the bytes are not a module (`NotWasm`)
/// - The output cannot be written (`Write`)
///
/// On error the output path is left exactly as it was.
pub fn convert_file(options: &ConvertOptions) -> Result<ConvertReport> {
    let text = read_text(&options.input)?;

    let bytes = hexlist::decode(&text, options.trailing_separator).inspect_err(|e| {
        log_with_context(
            Level::Debug,
            LogMessage::new("convert", "Hex list rejected")
                .with("input", options.input.display())
                .with("reason", e),
        );
    })?;

    let content = inspect::detect(&bytes);
    if options.expect_wasm && !content.is_wasm() {
        return Err(HexBinError::NotWasm {
            detected: content.mime_type,
        });
    }

    write_atomic(&options.output, &bytes)?;

    log_with_context(
        Level::Info,
        LogMessage::new("convert", "Wrote binary output")
            .with("input", options.input.display())
            .with("output", options.output.display())
            .with("bytes", bytes.len())
            .with("type", &content.mime_type),
    );

    Ok(ConvertReport {
        input: options.input.clone(),
        output: options.output.clone(),
        byte_count: bytes.len(),
        content,
    })
}

/// Convenience wrapper around [`convert_file`] with default options for
/// everything but the two paths.
pub fn convert(input: &Path, output: &Path) -> Result<ConvertReport> {
    convert_file(&ConvertOptions {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        ..ConvertOptions::default()
    })
}

fn read_text(path: &Path) -> Result<String> {
    let raw = std::fs::read(path).map_err(|e| HexBinError::file_not_found(path, e))?;
    String::from_utf8(raw).map_err(|_| HexBinError::InvalidText {
        path: path.to_path_buf(),
    })
}
