//! Variable-size integers as defined in [RFC 8794, section 4].
//!
//! The number of leading zero bits in the first octet, plus one, is the
//! VINT_WIDTH. Element IDs keep their VINT_MARKER bit and are read with
//! [decode_raw]; Element Data Sizes drop it and are read with
//! [decode_masked].
//!
//! [RFC 8794, section 4]: https://www.rfc-editor.org/rfc/rfc8794.html#section-4

use super::error::ErrorKind;

pub const MAX_VINT_WIDTH: usize = 8;

/// Data size reported for elements whose VINT_DATA bits are all set.
pub const UNKNOWN_SIZE: u64 = u64::MAX;

/// Width in octets of the variable-size integer starting with `first`.
pub fn vint_width(first: u8) -> Result<usize, ErrorKind> {
    match first.leading_zeros() {
        8 => Err(ErrorKind::VintTooWide),
        zeros => Ok(zeros as usize + 1),
    }
}

/// Big-endian concatenation of the first `width` octets of `input`.
pub fn decode_raw(input: &[u8], width: usize) -> Result<u64, ErrorKind> {
    if !(1..=MAX_VINT_WIDTH).contains(&width) {
        return Err(ErrorKind::InvalidWidth(width));
    }

    let data = input.get(..width).ok_or(ErrorKind::InvalidWidth(width))?;
    Ok(data.iter().fold(0, |val, b| (val << 8) | u64::from(*b)))
}

/// Like [decode_raw], with the VINT_WIDTH and VINT_MARKER bits cleared.
///
/// Returns [UNKNOWN_SIZE] for the reserved all-ones value of `width`.
pub fn decode_masked(input: &[u8], width: usize) -> Result<u64, ErrorKind> {
    let marker = unknown_size_marker(width);
    let val = decode_raw(input, width)? & marker;

    if val == marker {
        Ok(UNKNOWN_SIZE)
    } else {
        Ok(val)
    }
}

/// The reserved masked value of a `width` octet integer, which is also the
/// mask of its VINT_DATA bits. `width` must be in 1..=8.
pub fn unknown_size_marker(width: usize) -> u64 {
    (1u64 << (7 * width)) - 1
}

#[cfg(test)]
mod tests {
    use quickcheck::{quickcheck, TestResult};

    use super::*;

    #[test]
    fn width_from_marker() {
        for width in 1..=MAX_VINT_WIDTH {
            let first = 0x80u8 >> (width - 1);
            assert_eq!(vint_width(first), Ok(width));
            assert_eq!(vint_width(first | (first >> 1)), Ok(width));
        }

        assert_eq!(vint_width(0xFF), Ok(1));
        assert_eq!(vint_width(0x00), Err(ErrorKind::VintTooWide));
    }

    #[test]
    fn raw_keeps_marker() {
        assert_eq!(decode_raw(&[0x82], 1), Ok(0x82));
        assert_eq!(decode_raw(&[0x40, 0x02], 2), Ok(0x4002));
        assert_eq!(decode_raw(&[0x1A, 0x45, 0xDF, 0xA3, 0x99], 4), Ok(0x1A45DFA3));
    }

    #[test]
    fn masked_clears_marker() {
        assert_eq!(decode_masked(&[0x82], 1), Ok(2));
        assert_eq!(decode_masked(&[0x40, 0x02], 2), Ok(2));
        assert_eq!(decode_masked(&[0x20, 0x00, 0x02], 3), Ok(2));
        assert_eq!(decode_masked(&[0x10, 0x00, 0x00, 0x02], 4), Ok(2));
        assert_eq!(
            decode_masked(&[0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00], 8),
            Ok(4096)
        );
    }

    #[test]
    fn invalid_widths() {
        assert_eq!(decode_raw(&[0; 9], 0), Err(ErrorKind::InvalidWidth(0)));
        assert_eq!(decode_raw(&[0; 9], 9), Err(ErrorKind::InvalidWidth(9)));
        assert_eq!(decode_masked(&[0x40], 2), Err(ErrorKind::InvalidWidth(2)));
    }

    #[test]
    fn reserved_values_are_unknown() {
        let markers = [
            0x7F,
            0x3FFF,
            0x1F_FFFF,
            0x0FFF_FFFF,
            0x07_FFFF_FFFF,
            0x03FF_FFFF_FFFF,
            0x01_FFFF_FFFF_FFFF,
            0x00FF_FFFF_FFFF_FFFF,
        ];

        for (i, marker) in markers.into_iter().enumerate() {
            let width = i + 1;
            assert_eq!(unknown_size_marker(width), marker);

            let encoded = encode(marker, width);
            assert_eq!(decode_masked(&encoded, width), Ok(UNKNOWN_SIZE));
            // IDs never go through the sentinel check
            assert_ne!(decode_raw(&encoded, width), Ok(UNKNOWN_SIZE));
        }

        // 0xFF is the 1 octet all-ones size
        assert_eq!(decode_masked(&[0xFF], 1), Ok(UNKNOWN_SIZE));
    }

    fn encode(val: u64, width: usize) -> Vec<u8> {
        let marked = val | 1u64 << (7 * width);
        marked.to_be_bytes()[8 - width..].to_vec()
    }

    quickcheck! {
        fn masked_round_trip(val: u64, width: u8) -> TestResult {
            let width = usize::from(width % 8) + 1;
            let val = val & unknown_size_marker(width);

            if val == unknown_size_marker(width) {
                return TestResult::discard();
            }

            let encoded = encode(val, width);
            TestResult::from_bool(
                vint_width(encoded[0]) == Ok(width) && decode_masked(&encoded, width) == Ok(val),
            )
        }
    }
}
