//! Binary file to hex list file conversion, the inverse of
//! [`crate::convert`].

use crate::error::{HexBinError, Result};
use crate::hexlist::{self, EncodeOptions, LetterCase};
use crate::output::write_atomic;
use crate::telemetry::{LogMessage, log_with_context};
use log::Level;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration options for dumping a binary file.
#[derive(Debug, Clone, Copy)]
pub struct DumpOptions {
    pub case: LetterCase,

    /// Pad every value to two digits
    pub zero_pad: bool,

    /// End the text file with a newline
    pub trailing_newline: bool,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            case: LetterCase::Lower,
            zero_pad: true,
            trailing_newline: true,
        }
    }
}

impl DumpOptions {
    fn encode_options(&self) -> EncodeOptions {
        EncodeOptions {
            case: self.case,
            zero_pad: self.zero_pad,
        }
    }
}

/// Summary of a successful dump.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DumpReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub byte_count: usize,
}

/// Renders the bytes of `input` as a hex list and writes it to `output`.
///
/// The produced file converts back to `input` byte for byte.
pub fn dump_file(input: &Path, output: &Path, options: &DumpOptions) -> Result<DumpReport> {
    let bytes = std::fs::read(input).map_err(|e| HexBinError::file_not_found(input, e))?;

    let mut text = hexlist::encode(&bytes, &options.encode_options());
    if options.trailing_newline {
        text.push('\n');
    }

    write_atomic(output, text.as_bytes())?;

    log_with_context(
        Level::Info,
        LogMessage::new("dump", "Wrote hex list")
            .with("input", input.display())
            .with("output", output.display())
            .with("bytes", bytes.len()),
    );

    Ok(DumpReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        byte_count: bytes.len(),
    })
}
