//! Per-kind sample (de)serialization, ASCII and binary.

use alloc::vec::Vec;

use crate::pixel::RGB8;

/// Row codec for one sample type. Sealed: only implemented in this module.
pub trait SampleCodec: Sized + Copy {
    /// ASCII tokens per sample.
    const TOKENS: usize;

    /// Bytes one binary row of `width` samples occupies.
    fn row_bytes(width: usize) -> usize;

    /// Parse one sample from exactly `TOKENS` tokens; `None` on a bad token.
    fn parse_tokens(tokens: &[&[u8]]) -> Option<Self>;

    /// Append the ASCII form of the sample (no separators).
    fn write_ascii(self, out: &mut Vec<u8>);

    /// Fill `row` from `row_bytes(row.len())` raw bytes.
    fn decode_row(bytes: &[u8], row: &mut [Self]);

    /// Append the raw bytes of `row`.
    fn encode_row(row: &[Self], out: &mut Vec<u8>);
}

impl SampleCodec for bool {
    const TOKENS: usize = 1;

    fn row_bytes(width: usize) -> usize {
        width.div_ceil(8)
    }

    fn parse_tokens(tokens: &[&[u8]]) -> Option<Self> {
        match tokens {
            [b"0"] => Some(false),
            [b"1"] => Some(true),
            _ => None,
        }
    }

    fn write_ascii(self, out: &mut Vec<u8>) {
        out.push(if self { b'1' } else { b'0' });
    }

    fn decode_row(bytes: &[u8], row: &mut [Self]) {
        // MSB of byte 0 is sample 0; trailing pad bits are ignored
        for (x, px) in row.iter_mut().enumerate() {
            *px = (bytes[x / 8] >> (7 - x % 8)) & 1 != 0;
        }
    }

    fn encode_row(row: &[Self], out: &mut Vec<u8>) {
        for chunk in row.chunks(8) {
            let mut byte = 0u8;
            for (bit, &px) in chunk.iter().enumerate() {
                if px {
                    byte |= 0x80 >> bit;
                }
            }
            out.push(byte);
        }
    }
}

impl SampleCodec for u8 {
    const TOKENS: usize = 1;

    fn row_bytes(width: usize) -> usize {
        width
    }

    fn parse_tokens(tokens: &[&[u8]]) -> Option<Self> {
        match tokens {
            [t] => parse_u8(t),
            _ => None,
        }
    }

    fn write_ascii(self, out: &mut Vec<u8>) {
        push_decimal(self, out);
    }

    fn decode_row(bytes: &[u8], row: &mut [Self]) {
        row.copy_from_slice(&bytes[..row.len()]);
    }

    fn encode_row(row: &[Self], out: &mut Vec<u8>) {
        out.extend_from_slice(row);
    }
}

impl SampleCodec for RGB8 {
    const TOKENS: usize = 3;

    fn row_bytes(width: usize) -> usize {
        width * 3
    }

    fn parse_tokens(tokens: &[&[u8]]) -> Option<Self> {
        match tokens {
            [r, g, b] => Some(RGB8::new(parse_u8(r)?, parse_u8(g)?, parse_u8(b)?)),
            _ => None,
        }
    }

    fn write_ascii(self, out: &mut Vec<u8>) {
        push_decimal(self.r, out);
        out.push(b' ');
        push_decimal(self.g, out);
        out.push(b' ');
        push_decimal(self.b, out);
    }

    fn decode_row(bytes: &[u8], row: &mut [Self]) {
        for (px, rgb) in row.iter_mut().zip(bytes.chunks_exact(3)) {
            *px = RGB8::new(rgb[0], rgb[1], rgb[2]);
        }
    }

    fn encode_row(row: &[Self], out: &mut Vec<u8>) {
        for px in row {
            out.extend_from_slice(&[px.r, px.g, px.b]);
        }
    }
}

/// Decimal 0..=255 with no sign; rejects anything else.
fn parse_u8(token: &[u8]) -> Option<u8> {
    if token.is_empty() || token.len() > 3 || !token.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let value = token
        .iter()
        .fold(0u16, |acc, &d| acc * 10 + u16::from(d - b'0'));
    u8::try_from(value).ok()
}

fn push_decimal(value: u8, out: &mut Vec<u8>) {
    if value >= 100 {
        out.push(b'0' + value / 100);
    }
    if value >= 10 {
        out.push(b'0' + (value / 10) % 10);
    }
    out.push(b'0' + value % 10);
}
