//! Byte transforms applied to raw field data before parsing.

use crate::error::{ArgumentError, DecodeError, Result, UnsupportedError, bail};

/// Xor every byte of `data` with a single key byte.
pub fn xor_one(data: &[u8], key: u8) -> Vec<u8> {
    data.iter().map(|b| b ^ key).collect()
}

/// Xor every byte of `data` with the repeating key.
///
/// The key must hold at least one byte.
pub fn xor_many(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    if key.is_empty() {
        bail!(ArgumentError::EmptyKey);
    }

    Ok(data
        .iter()
        .zip(key.iter().cycle())
        .map(|(b, k)| b ^ k)
        .collect())
}

/// Circularly rotate every byte of `data` left by `amount` bits.
///
/// Negative amounts rotate right. Only `group_size == 1` is supported;
/// larger groups fail.
pub fn rotate_left(data: &[u8], amount: i32, group_size: usize) -> Result<Vec<u8>> {
    if group_size != 1 {
        bail!(UnsupportedError::RotateGroup(group_size));
    }

    let amount = (amount & 7) as u32;

    Ok(data.iter().map(|b| b.rotate_left(amount)).collect())
}

/// Inflate a zlib stream.
pub fn inflate(data: &[u8]) -> Result<Vec<u8>> {
    match miniz_oxide::inflate::decompress_to_vec_zlib(data) {
        Ok(decoded) => Ok(decoded),
        Err(e) => bail!(DecodeError::Zlib(e.to_string())),
    }
}
