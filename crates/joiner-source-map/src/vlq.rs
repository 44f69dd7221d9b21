//! Base64 VLQ encoding as used by the `mappings` field
//!
//! Each value is split into 5-bit groups, least significant first. The
//! sign lives in the lowest bit of the first group and the sixth bit of every
//! digit flags a continuation.

use crate::error::{Result, SourceMapError};

const BASE64_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

const VLQ_BASE_SHIFT: u32 = 5;
const VLQ_BASE: i64 = 1 << VLQ_BASE_SHIFT;
const VLQ_BASE_MASK: i64 = VLQ_BASE - 1;
const VLQ_CONTINUATION_BIT: i64 = VLQ_BASE;

fn base64_digit(ch: u8) -> Option<i64> {
    match ch {
        b'A'..=b'Z' => Some((ch - b'A') as i64),
        b'a'..=b'z' => Some((ch - b'a') as i64 + 26),
        b'0'..=b'9' => Some((ch - b'0') as i64 + 52),
        b'+' => Some(62),
        b'/' => Some(63),
        _ => None,
    }
}

/// Append the base64 VLQ encoding of `value` to `out`
pub fn encode(value: i64, out: &mut String) {
    let mut vlq = if value < 0 {
        ((-value) << 1) | 1
    } else {
        value << 1
    };

    loop {
        let mut digit = vlq & VLQ_BASE_MASK;
        vlq >>= VLQ_BASE_SHIFT;
        if vlq > 0 {
            digit |= VLQ_CONTINUATION_BIT;
        }
        out.push(BASE64_ALPHABET[digit as usize] as char);
        if vlq == 0 {
            break;
        }
    }
}

/// Decode one VLQ value starting at byte `pos` of `input`
///
/// Returns the value and the position just past it.
pub fn decode(input: &[u8], mut pos: usize) -> Result<(i64, usize)> {
    let mut result: i64 = 0;
    let mut shift: u32 = 0;

    loop {
        let Some(&ch) = input.get(pos) else {
            return Err(SourceMapError::InvalidVlq {
                position: pos,
                message: "unexpected end of segment".to_string(),
            });
        };
        let digit = base64_digit(ch).ok_or_else(|| SourceMapError::InvalidVlq {
            position: pos,
            message: format!("invalid base64 digit '{}'", ch as char),
        })?;
        pos += 1;

        if shift >= 60 {
            return Err(SourceMapError::InvalidVlq {
                position: pos,
                message: "value overflows 64 bits".to_string(),
            });
        }

        result += (digit & VLQ_BASE_MASK) << shift;
        shift += VLQ_BASE_SHIFT;

        if digit & VLQ_CONTINUATION_BIT == 0 {
            break;
        }
    }

    let negative = result & 1 == 1;
    let magnitude = result >> 1;
    Ok((if negative { -magnitude } else { magnitude }, pos))
}
