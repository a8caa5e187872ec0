//! Content type detection for binary files.
//!
//! Detection is content based (via `infer`), never based on the file
//! extension, because the converter writes whatever the hex list contains
//! regardless of the output name.

use crate::error::{HexBinError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// MIME type reported for WebAssembly modules
pub const WASM_MIME: &str = "application/wasm";

const WASM_MAGIC: &[u8; 4] = b"\0asm";
const OCTET_STREAM: &str = "application/octet-stream";
const TEXT_PLAIN: &str = "text/plain";

/// Detected type of a byte buffer
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ContentKind {
    pub mime_type: String,
    pub extension: String,
}

impl ContentKind {
    pub fn is_wasm(&self) -> bool {
        self.mime_type == WASM_MIME
    }
}

/// Result of inspecting a file on disk
#[derive(Serialize, Debug)]
pub struct Inspection {
    pub file_path: PathBuf,
    pub size_bytes: u64,
    pub content: ContentKind,

    /// Binary format version for WebAssembly modules
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wasm_version: Option<u32>,
}

/// Detects the content type of `bytes`.
///
/// Anything starting with the WebAssembly magic is reported as
/// `application/wasm`, whatever its version field. Otherwise falls back to
/// `text/plain` for buffers made only of printable ASCII and whitespace,
/// and to `application/octet-stream` for everything else (including an
/// empty buffer).
pub fn detect(bytes: &[u8]) -> ContentKind {
    if bytes.starts_with(WASM_MAGIC) {
        return ContentKind {
            mime_type: WASM_MIME.to_string(),
            extension: "wasm".to_string(),
        };
    }

    if let Some(kind) = infer::get(bytes) {
        return ContentKind {
            mime_type: kind.mime_type().to_string(),
            extension: kind.extension().to_string(),
        };
    }

    let looks_like_text = !bytes.is_empty()
        && bytes
            .iter()
            .all(|b| (32..=126).contains(b) || matches!(b, b'\n' | b'\r' | b'\t'));

    if looks_like_text {
        ContentKind {
            mime_type: TEXT_PLAIN.to_string(),
            extension: "txt".to_string(),
        }
    } else {
        ContentKind {
            mime_type: OCTET_STREAM.to_string(),
            extension: "bin".to_string(),
        }
    }
}

/// Version field of a WebAssembly module header, if `bytes` starts with one
pub fn wasm_version(bytes: &[u8]) -> Option<u32> {
    let rest = bytes.strip_prefix(WASM_MAGIC)?;
    let version: [u8; 4] = rest.get(..4)?.try_into().ok()?;
    Some(u32::from_le_bytes(version))
}

/// Inspects an existing file.
pub fn inspect_file(path: &Path) -> Result<Inspection> {
    let bytes = std::fs::read(path).map_err(|e| HexBinError::file_not_found(path, e))?;

    Ok(Inspection {
        file_path: path.to_path_buf(),
        size_bytes: bytes.len() as u64,
        content: detect(&bytes),
        wasm_version: wasm_version(&bytes),
    })
}
