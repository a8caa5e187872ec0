//! Error types for hexbin

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while converting, dumping or inspecting files
#[derive(Debug, Error)]
pub enum HexBinError {
    #[error("File not found or unreadable: {}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input is not valid UTF-8 text: {}", path.display())]
    InvalidText { path: PathBuf },

    #[error("Invalid hex token #{index} at offset {offset}: {token:?}")]
    Parse {
        index: usize,
        offset: usize,
        token: String,
    },

    #[error("Hex token #{index} is out of byte range (0-255): {token:?}")]
    Range { index: usize, token: String },

    #[error("Failed to write output file: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Decoded bytes are not a WebAssembly module (detected {detected})")]
    NotWasm { detected: String },
}

impl HexBinError {
    pub fn file_not_found(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileNotFound {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Whether the error was caused by the content of the hex list
    /// rather than by the filesystem.
    pub fn is_content_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidText { .. } | Self::Parse { .. } | Self::Range { .. } | Self::NotWasm { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, HexBinError>;
