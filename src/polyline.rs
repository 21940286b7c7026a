//! Encoded polyline codec.
//!
//! Each coordinate component is scaled to an integer grid, delta-encoded
//! against the previous point, zigzag-mapped to an unsigned value and written
//! as little-endian 5-bit chunks. A chunk with `0x20` set means another chunk
//! follows. Every chunk is offset by 63 so the output stays printable ASCII.

use crate::coord::Coordinate;
use crate::error::PolylineError;

/// Five decimal digits, the precision of the published algorithm.
pub const DEFAULT_PRECISION: u32 = 5;

const CHUNK_OFFSET: u8 = 63;
const CONTINUATION: u64 = 0x20;
const CHUNK_MASK: u64 = 0x1f;

/// Decode a polyline encoded with five digits of precision.
///
/// An empty string yields an empty vector.
pub fn decode(encoded: &str) -> Result<Vec<Coordinate>, PolylineError> {
    decode_with_precision(encoded, DEFAULT_PRECISION)
}

/// Decode a polyline whose values were scaled by `10^precision`.
pub fn decode_with_precision(
    encoded: &str,
    precision: u32,
) -> Result<Vec<Coordinate>, PolylineError> {
    let factor = 10f64.powi(precision as i32);
    let bytes = encoded.as_bytes();

    // Every point needs at least two bytes.
    let mut coords = Vec::with_capacity(bytes.len() / 2);
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lon: i64 = 0;

    while index < bytes.len() {
        let start = index;
        lat = lat
            .checked_add(next_value(encoded, &mut index)?)
            .ok_or(PolylineError::Overflow { offset: start })?;

        if index >= bytes.len() {
            return Err(PolylineError::Truncated { offset: index });
        }

        let start = index;
        lon = lon
            .checked_add(next_value(encoded, &mut index)?)
            .ok_or(PolylineError::Overflow { offset: start })?;

        coords.push(Coordinate::new(lat as f64 / factor, lon as f64 / factor));
    }

    Ok(coords)
}

/// Read one zigzag-encoded value starting at `*index`, advancing past it.
fn next_value(encoded: &str, index: &mut usize) -> Result<i64, PolylineError> {
    let bytes = encoded.as_bytes();
    let start = *index;
    let mut result: u64 = 0;
    let mut shift: u32 = 0;

    loop {
        let Some(&byte) = bytes.get(*index) else {
            return Err(PolylineError::Truncated { offset: *index });
        };
        if !(CHUNK_OFFSET..=b'~').contains(&byte) {
            return Err(PolylineError::InvalidCharacter {
                character: encoded[*index..].chars().next().unwrap_or(byte as char),
                offset: *index,
            });
        }
        *index += 1;

        let chunk = u64::from(byte - CHUNK_OFFSET);
        if shift > 60 || (shift == 60 && (chunk & CHUNK_MASK) > 0xf) {
            return Err(PolylineError::Overflow { offset: start });
        }
        result |= (chunk & CHUNK_MASK) << shift;
        shift += 5;

        if chunk < CONTINUATION {
            break;
        }
    }

    let magnitude = (result >> 1) as i64;
    Ok(if result & 1 != 0 { !magnitude } else { magnitude })
}

/// Encode coordinates with five digits of precision. Elevation is dropped.
pub fn encode(coords: &[Coordinate]) -> String {
    encode_with_precision(coords, DEFAULT_PRECISION)
}

/// Encode coordinates scaled by `10^precision`.
pub fn encode_with_precision(coords: &[Coordinate], precision: u32) -> String {
    let factor = 10f64.powi(precision as i32);
    let mut out = String::with_capacity(coords.len() * 8);
    let mut prev_lat: i64 = 0;
    let mut prev_lon: i64 = 0;

    for c in coords {
        let lat = (c.latitude * factor).round() as i64;
        let lon = (c.longitude * factor).round() as i64;
        push_value(&mut out, lat - prev_lat);
        push_value(&mut out, lon - prev_lon);
        prev_lat = lat;
        prev_lon = lon;
    }

    out
}

fn push_value(out: &mut String, delta: i64) {
    let mut value = if delta < 0 {
        !((delta as u64) << 1)
    } else {
        (delta as u64) << 1
    };

    while value >= CONTINUATION {
        out.push(char::from((CONTINUATION | (value & CHUNK_MASK)) as u8 + CHUNK_OFFSET));
        value >>= 5;
    }
    out.push(char::from(value as u8 + CHUNK_OFFSET));
}
