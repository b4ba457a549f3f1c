//! Decoding byte runs into strings under named encodings.

use crate::error::{DecodeError, Result, UnsupportedError, bail, err};
use log::warn;

/// A character encoding the runtime can decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// One byte per character, each byte mapped to the code point of
    /// equal value.
    Ascii,
    /// UTF-8.
    Utf8,
    /// UCS-2, decoded as little-endian 16-bit code units.
    Ucs2,
    /// UTF-16 in little-endian order.
    Utf16Le,
}

impl Encoding {
    /// Resolve an encoding label as it appears in format descriptions.
    ///
    /// A missing or empty label means [`Encoding::Ascii`]. Labels are
    /// matched case-insensitively; unknown ones fail.
    pub fn from_label(label: Option<&str>) -> Result<Self> {
        let Some(label) = label else {
            return Ok(Self::Ascii);
        };

        match label.to_ascii_lowercase().as_str() {
            "" | "ascii" => Ok(Self::Ascii),
            "utf8" | "utf-8" => Ok(Self::Utf8),
            "ucs2" | "ucs-2" => Ok(Self::Ucs2),
            "utf16le" | "utf-16le" => Ok(Self::Utf16Le),
            other => {
                warn!("unknown encoding: {other}");

                err!(UnsupportedError::Encoding(other.into()))
            }
        }
    }
}

/// Decode a byte run into a string under the given encoding.
pub fn decode(data: &[u8], encoding: Encoding) -> Result<String> {
    match encoding {
        Encoding::Ascii => Ok(data.iter().map(|&b| char::from(b)).collect()),
        Encoding::Utf8 => match core::str::from_utf8(data) {
            Ok(s) => Ok(s.to_owned()),
            Err(_) => err!(DecodeError::Utf8),
        },
        Encoding::Ucs2 | Encoding::Utf16Le => {
            if !data.len().is_multiple_of(2) {
                bail!(DecodeError::Utf16);
            }

            let units: Vec<u16> = data
                .chunks_exact(2)
                .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                .collect();

            match String::from_utf16(&units) {
                Ok(s) => Ok(s),
                Err(_) => err!(DecodeError::Utf16),
            }
        }
    }
}
