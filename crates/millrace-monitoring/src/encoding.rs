//! Payload codecs for the built-in metric families.
//!
//! Values cross the worker boundary as base-128 varints over the
//! two's-complement `u64` image of each `i64`: seven value bits per byte,
//! least-significant group first, high bit set on every byte except the
//! last. Negative values therefore always occupy the full ten bytes.

use thiserror::Error;

/// Ten 7-bit groups cover 64 bits; an eleventh byte is never legal.
const MAX_VARINT_LEN: usize = 10;

/// Payload decode failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("payload ended inside a varint")]
    Truncated,

    #[error("varint runs past {MAX_VARINT_LEN} bytes")]
    Overlong,
}

/// A decoded distribution payload: the running summary of one metric over
/// a step's lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DistributionData {
    pub count: i64,
    pub sum: i64,
    pub min: i64,
    pub max: i64,
}

/// Appends one varint to `out`.
pub fn encode_varint(value: i64, out: &mut Vec<u8>) {
    let mut rest = value as u64;
    while rest >= 0x80 {
        out.push(rest as u8 | 0x80);
        rest >>= 7;
    }
    out.push(rest as u8);
}

/// Reads one varint from the front of `input`, advancing it past the
/// bytes consumed.
pub fn decode_varint(input: &mut &[u8]) -> Result<i64, CodecError> {
    let mut value: u64 = 0;
    for (index, &byte) in input.iter().enumerate() {
        if index == MAX_VARINT_LEN {
            return Err(CodecError::Overlong);
        }
        value |= u64::from(byte & 0x7f) << (7 * index);
        if byte & 0x80 == 0 {
            *input = &input[index + 1..];
            return Ok(value as i64);
        }
    }
    Err(CodecError::Truncated)
}

/// Encodes a sum-counter payload: one varint.
pub fn encode_int64_counter(value: i64) -> Vec<u8> {
    let mut out = Vec::with_capacity(MAX_VARINT_LEN);
    encode_varint(value, &mut out);
    out
}

/// Decodes a sum-counter payload. Bytes past the varint are ignored.
pub fn decode_int64_counter(payload: &[u8]) -> Result<i64, CodecError> {
    let mut input = payload;
    decode_varint(&mut input)
}

/// Encodes a distribution payload: count, sum, min, max, in that order.
pub fn encode_int64_distribution(data: &DistributionData) -> Vec<u8> {
    let mut out = Vec::with_capacity(4 * MAX_VARINT_LEN);
    encode_varint(data.count, &mut out);
    encode_varint(data.sum, &mut out);
    encode_varint(data.min, &mut out);
    encode_varint(data.max, &mut out);
    out
}

/// Decodes a distribution payload. Bytes past the fourth varint are
/// ignored.
pub fn decode_int64_distribution(payload: &[u8]) -> Result<DistributionData, CodecError> {
    let mut input = payload;
    let count = decode_varint(&mut input)?;
    let sum = decode_varint(&mut input)?;
    let min = decode_varint(&mut input)?;
    let max = decode_varint(&mut input)?;
    Ok(DistributionData { count, sum, min, max })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values_take_one_byte() {
        assert_eq!(encode_int64_counter(0), vec![0x00]);
        assert_eq!(encode_int64_counter(1), vec![0x01]);
        assert_eq!(encode_int64_counter(127), vec![0x7f]);
    }

    #[test]
    fn continuation_bit_splits_larger_values() {
        // 300 = 0b10_0101100 → low group 0101100 with continuation, then 10.
        assert_eq!(encode_int64_counter(300), vec![0xac, 0x02]);
        assert_eq!(decode_int64_counter(&[0xac, 0x02]), Ok(300));
    }

    #[test]
    fn negative_values_take_ten_bytes() {
        let bytes = encode_int64_counter(-1);
        assert_eq!(bytes.len(), 10);
        assert_eq!(decode_int64_counter(&bytes), Ok(-1));
    }

    #[test]
    fn extreme_values_survive() {
        for value in [i64::MIN, i64::MAX, -42, 1 << 40] {
            assert_eq!(decode_int64_counter(&encode_int64_counter(value)), Ok(value));
        }
    }

    #[test]
    fn empty_payload_is_truncated() {
        assert_eq!(decode_int64_counter(&[]), Err(CodecError::Truncated));
    }

    #[test]
    fn unterminated_varint_is_truncated() {
        assert_eq!(decode_int64_counter(&[0x80, 0x80]), Err(CodecError::Truncated));
    }

    #[test]
    fn eleven_byte_varint_is_overlong() {
        let bytes = [0x80u8; 11];
        assert_eq!(decode_int64_counter(&bytes), Err(CodecError::Overlong));
    }

    #[test]
    fn counter_ignores_trailing_bytes() {
        assert_eq!(decode_int64_counter(&[0x05, 0xff, 0xff]), Ok(5));
    }

    #[test]
    fn distribution_fields_keep_their_order() {
        let data = DistributionData { count: 3, sum: 1000, min: 7, max: 912 };
        let decoded = decode_int64_distribution(&encode_int64_distribution(&data)).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn zero_distribution_is_four_zero_bytes() {
        let bytes = encode_int64_distribution(&DistributionData::default());
        assert_eq!(bytes, vec![0x00, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn distribution_missing_a_field_is_truncated() {
        let mut bytes = encode_int64_distribution(&DistributionData::default());
        bytes.pop();
        assert_eq!(decode_int64_distribution(&bytes), Err(CodecError::Truncated));
    }

    #[test]
    fn distribution_ignores_trailing_bytes() {
        let mut bytes = encode_int64_distribution(&DistributionData::default());
        bytes.push(0x2a);
        assert!(decode_int64_distribution(&bytes).is_ok());
    }
}
