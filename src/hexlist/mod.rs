//! Hex list tokenizing, decoding and encoding.
//!
//! A hex list is text of the form `ff,0a,3` where every comma separated
//! token is a hexadecimal byte value. This module works purely on strings
//! and byte slices; file handling lives in [`crate::convert`] and
//! [`crate::dump`].

use crate::error::{HexBinError, Result};
use serde::{Deserialize, Serialize};

/// Character separating tokens in a hex list
pub const SEPARATOR: char = ',';

/// A single comma separated piece of the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Zero-based position of the token in the list
    pub index: usize,

    /// Byte offset in the input at which the token starts
    pub offset: usize,

    /// Raw token text, including any surrounding whitespace. Errors carry
    /// the trimmed form.
    pub text: &'a str,
}

impl Token<'_> {
    /// The token text with surrounding ASCII whitespace removed
    pub fn trimmed(&self) -> &str {
        self.text.trim_matches(|c: char| c.is_ascii_whitespace())
    }

    /// Whether the token is empty after trimming
    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    fn parse_error(&self) -> HexBinError {
        HexBinError::Parse {
            index: self.index,
            offset: self.offset,
            token: self.trimmed().to_string(),
        }
    }

    fn range_error(&self) -> HexBinError {
        HexBinError::Range {
            index: self.index,
            token: self.trimmed().to_string(),
        }
    }
}

/// How a blank final token (a trailing comma, or an empty input) is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailingSeparator {
    /// Drop one blank final token; an empty input decodes to no bytes
    #[default]
    Allow,
    /// Every blank token is a parse error
    Reject,
}

/// Letter case used for the digits `a`-`f` when encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterCase {
    #[default]
    Lower,
    Upper,
}

/// Options controlling how bytes are rendered as a hex list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    pub case: LetterCase,

    /// Pad every value to two digits (`0a` instead of `a`)
    pub zero_pad: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            case: LetterCase::Lower,
            zero_pad: true,
        }
    }
}

/// Splits `text` on commas, keeping track of each token's index and offset.
///
/// Splitting never fails and always yields at least one token; an empty
/// string yields a single blank token.
pub fn tokenize(text: &str) -> impl Iterator<Item = Token<'_>> {
    let mut offset = 0;
    text.split(SEPARATOR).enumerate().map(move |(index, piece)| {
        let token = Token {
            index,
            offset,
            text: piece,
        };
        offset += piece.len() + SEPARATOR.len_utf8();
        token
    })
}

/// Parses one token as a hexadecimal byte.
///
/// Surrounding whitespace, an optional sign and an optional `0x` prefix are
/// accepted. Negative values and values above `0xff` are range errors;
/// anything that is not a hexadecimal literal is a parse error.
///
/// # Examples
///
/// ```
/// use hexbin::hexlist::{parse_token, tokenize};
///
/// let tokens: Vec<_> = tokenize("ff, 0x0A\n").collect();
/// assert_eq!(parse_token(&tokens[0]).unwrap(), 0xff);
/// assert_eq!(parse_token(&tokens[1]).unwrap(), 0x0a);
/// ```
pub fn parse_token(token: &Token<'_>) -> Result<u8> {
    let text = token.trimmed();

    let (negative, unsigned) = if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    };

    let digits = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
        .unwrap_or(unsigned);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(token.parse_error());
    }

    // Only hex digits remain, so the sole failure mode is overflow.
    let value = u64::from_str_radix(digits, 16).map_err(|_| token.range_error())?;

    if negative && value != 0 {
        return Err(token.range_error());
    }

    u8::try_from(value).map_err(|_| token.range_error())
}

/// Decodes a whole hex list into bytes, in token order.
///
/// # Errors
///
/// Returns the error of the first token that fails to parse.
pub fn decode(text: &str, trailing: TrailingSeparator) -> Result<Vec<u8>> {
    let tokens: Vec<Token<'_>> = tokenize(text).collect();

    let tokens = match (trailing, tokens.split_last()) {
        (TrailingSeparator::Allow, Some((last, rest))) if last.is_blank() => rest,
        _ => &tokens[..],
    };

    tokens.iter().map(parse_token).collect()
}

/// Renders bytes as a comma separated hex list without a trailing comma.
///
/// # Examples
///
/// ```
/// use hexbin::hexlist::{EncodeOptions, LetterCase, encode};
///
/// let options = EncodeOptions { case: LetterCase::Upper, zero_pad: true };
/// assert_eq!(encode(&[0x00, 0x61, 0xff], &options), "00,61,FF");
/// ```
pub fn encode(bytes: &[u8], options: &EncodeOptions) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);

    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }

        let digits = match (options.case, options.zero_pad) {
            (LetterCase::Lower, true) => format!("{:02x}", byte),
            (LetterCase::Lower, false) => format!("{:x}", byte),
            (LetterCase::Upper, true) => format!("{:02X}", byte),
            (LetterCase::Upper, false) => format!("{:X}", byte),
        };
        out.push_str(&digits);
    }

    out
}

#[cfg(test)]
mod tests;
