//! Numeric limits for every supported integer width
//!
//! Each constant uses the smallest native type that covers its width, the
//! same carrier the codec reads into. Signed bounds follow two's complement.

/// Bits in a native `usize`, either 32 or 64 depending on the target
pub const UINT_SIZE: u32 = usize::BITS;

/// Largest native signed integer, `2^31 - 1` or `2^63 - 1`
pub const MAX_INT: isize = isize::MAX;
/// Smallest native signed integer, `-2^31` or `-2^63`
pub const MIN_INT: isize = isize::MIN;
/// Largest native unsigned integer, `2^32 - 1` or `2^64 - 1`
pub const MAX_UINT: usize = usize::MAX;

/// 127
pub const MAX_INT8: i8 = i8::MAX;
/// -128
pub const MIN_INT8: i8 = -1 << 7;
/// 32767
pub const MAX_INT16: i16 = i16::MAX;
/// -32768
pub const MIN_INT16: i16 = -1 << 15;
/// 8388607
pub const MAX_INT24: i32 = (1 << 23) - 1;
/// -8388608
pub const MIN_INT24: i32 = -1 << 23;
/// 2147483647
pub const MAX_INT32: i32 = i32::MAX;
/// -2147483648
pub const MIN_INT32: i32 = i32::MIN;
/// 549755813887
pub const MAX_INT40: i64 = (1 << 39) - 1;
/// -549755813888
pub const MIN_INT40: i64 = -1 << 39;
/// 140737488355327
pub const MAX_INT48: i64 = (1 << 47) - 1;
/// -140737488355328
pub const MIN_INT48: i64 = -1 << 47;
/// 36028797018963967
pub const MAX_INT56: i64 = (1 << 55) - 1;
/// -36028797018963968
pub const MIN_INT56: i64 = -1 << 55;
/// 9223372036854775807
pub const MAX_INT64: i64 = i64::MAX;
/// -9223372036854775808
pub const MIN_INT64: i64 = i64::MIN;

/// 255
pub const MAX_UINT8: u8 = u8::MAX;
/// 65535
pub const MAX_UINT16: u16 = u16::MAX;
/// 16777215
pub const MAX_UINT24: u32 = (1 << 24) - 1;
/// 4294967295
pub const MAX_UINT32: u32 = u32::MAX;
/// 1099511627775
pub const MAX_UINT40: u64 = (1 << 40) - 1;
/// 281474976710655
pub const MAX_UINT48: u64 = (1 << 48) - 1;
/// 72057594037927935
pub const MAX_UINT56: u64 = (1 << 56) - 1;
/// 18446744073709551615
pub const MAX_UINT64: u64 = u64::MAX;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_bounds() {
        assert_eq!(MAX_INT8, 127);
        assert_eq!(MIN_INT8, -128);
        assert_eq!(MAX_INT16, 32767);
        assert_eq!(MIN_INT16, -32768);
        assert_eq!(MAX_INT24, 8388607);
        assert_eq!(MIN_INT24, -8388608);
        assert_eq!(MAX_INT32, 2147483647);
        assert_eq!(MIN_INT32, -2147483648);
        assert_eq!(MAX_INT40, 549755813887);
        assert_eq!(MIN_INT40, -549755813888);
        assert_eq!(MAX_INT48, 140737488355327);
        assert_eq!(MIN_INT48, -140737488355328);
        assert_eq!(MAX_INT56, 36028797018963967);
        assert_eq!(MIN_INT56, -36028797018963968);
        assert_eq!(MAX_INT64, 9223372036854775807);
        assert_eq!(MIN_INT64, -9223372036854775808);
    }

    #[test]
    fn test_unsigned_bounds() {
        assert_eq!(MAX_UINT8, 255);
        assert_eq!(MAX_UINT16, 65535);
        assert_eq!(MAX_UINT24, 16777215);
        assert_eq!(MAX_UINT32, 4294967295);
        assert_eq!(MAX_UINT40, 1099511627775);
        assert_eq!(MAX_UINT48, 281474976710655);
        assert_eq!(MAX_UINT56, 72057594037927935);
        assert_eq!(MAX_UINT64, 18446744073709551615);
    }

    #[test]
    fn test_min_is_max_plus_one_negated() {
        assert_eq!(MIN_INT24 as i64, -(MAX_INT24 as i64) - 1);
        assert_eq!(MIN_INT40, -MAX_INT40 - 1);
        assert_eq!(MIN_INT48, -MAX_INT48 - 1);
        assert_eq!(MIN_INT56, -MAX_INT56 - 1);
        assert_eq!(MAX_UINT24 as i64, 2 * MAX_INT24 as i64 + 1);
        assert_eq!(MAX_UINT56, 2 * MAX_INT56 as u64 + 1);
    }

    #[test]
    fn test_native_word() {
        assert!(UINT_SIZE == 32 || UINT_SIZE == 64);
        assert_eq!(MAX_UINT as u128, (1u128 << UINT_SIZE) - 1);
        assert_eq!(MIN_INT, -MAX_INT - 1);
    }
}
