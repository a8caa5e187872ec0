//! # Hexbin
//!
//! Hexbin converts text dumps of comma-separated hexadecimal byte values
//! (for example `00,61,73,6d,01,00,00,00`) into raw binary files, and back.
//!
//! ## Features
//!
//! * Conversion - Decode a hex list file and write the bytes atomically
//! * Dumping - Render a binary file as a hex list
//! * Inspection - Detect the content type of a binary (WebAssembly and more)

/// Hex list file to binary file conversion
pub mod convert;
/// Binary file to hex list file conversion
pub mod dump;
/// Error types shared by all operations
pub mod error;
/// Hex list tokenizing, decoding and encoding
pub mod hexlist;
/// Content type detection for produced binaries
pub mod inspect;
/// Logging setup and context-tagged log messages
pub mod telemetry;

mod output;
