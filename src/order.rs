//! Big- and little-endian byte orders
//!
//! [`BigEndian`] and [`LittleEndian`] are marker types with no values. All
//! operations are associated functions on the [`ByteOrder`] trait taking the
//! byte region by reference, so one generic decoder can serve both layouts.
//!
//! Every operation touches exactly the first `W` bytes of the region, where
//! `W` is the width of the value. The plain `read_*`/`write_*` functions panic
//! when the region is shorter than `W`; the `try_*` forms return
//! [`Error::ShortBuffer`](crate::Error::ShortBuffer) instead.

use crate::error::{check_len, require_len, Result};

/// Width of a 16-bit value in bytes
pub const WIDTH_U16: usize = 2;
/// Width of a 24-bit value in bytes
pub const WIDTH_U24: usize = 3;
/// Width of a 32-bit value in bytes
pub const WIDTH_U32: usize = 4;
/// Width of a 40-bit value in bytes
pub const WIDTH_U40: usize = 5;
/// Width of a 48-bit value in bytes
pub const WIDTH_U48: usize = 6;
/// Width of a 56-bit value in bytes
pub const WIDTH_U56: usize = 7;
/// Width of a 64-bit value in bytes
pub const WIDTH_U64: usize = 8;

/// Generates the checked counterpart of a read operation
macro_rules! try_read {
    ($(#[$doc:meta])* $name:ident => $read:ident, $width:expr, $ty:ty) => {
        $(#[$doc])*
        #[inline]
        fn $name(buf: &[u8]) -> Result<$ty> {
            check_len(buf, $width)?;
            Ok(Self::$read(buf))
        }
    };
}

/// Generates the checked counterpart of a write operation
macro_rules! try_write {
    ($(#[$doc:meta])* $name:ident => $write:ident, $width:expr, $ty:ty) => {
        $(#[$doc])*
        #[inline]
        fn $name(buf: &mut [u8], v: $ty) -> Result<()> {
            check_len(buf, $width)?;
            Self::$write(buf, v);
            Ok(())
        }
    };
}

/// Serialization of fixed-width integers and IEEE-754 floats in one byte order
///
/// Implemented only by [`BigEndian`] and [`LittleEndian`].
pub trait ByteOrder: private::Sealed {
    /// Human-readable name of the byte order
    const NAME: &'static str;

    /// Reads the first 2 bytes. Panics when `buf.len() < 2`.
    #[inline]
    #[track_caller]
    fn read_u16(buf: &[u8]) -> u16 {
        require_len(buf, WIDTH_U16);
        Self::load(&buf[..WIDTH_U16]) as u16
    }

    /// Writes `v` into the first 2 bytes. Panics when `buf.len() < 2`.
    #[inline]
    #[track_caller]
    fn write_u16(buf: &mut [u8], v: u16) {
        require_len(buf, WIDTH_U16);
        Self::store(v as u64, &mut buf[..WIDTH_U16]);
    }

    /// Reads the first 3 bytes into the low 24 bits. Panics when `buf.len() < 3`.
    #[inline]
    #[track_caller]
    fn read_u24(buf: &[u8]) -> u32 {
        require_len(buf, WIDTH_U24);
        Self::load(&buf[..WIDTH_U24]) as u32
    }

    /// Writes the low 24 bits of `v`; higher bits are dropped.
    /// Panics when `buf.len() < 3`.
    #[inline]
    #[track_caller]
    fn write_u24(buf: &mut [u8], v: u32) {
        require_len(buf, WIDTH_U24);
        Self::store(v as u64, &mut buf[..WIDTH_U24]);
    }

    /// Reads the first 4 bytes. Panics when `buf.len() < 4`.
    #[inline]
    #[track_caller]
    fn read_u32(buf: &[u8]) -> u32 {
        require_len(buf, WIDTH_U32);
        Self::load(&buf[..WIDTH_U32]) as u32
    }

    /// Writes `v` into the first 4 bytes. Panics when `buf.len() < 4`.
    #[inline]
    #[track_caller]
    fn write_u32(buf: &mut [u8], v: u32) {
        require_len(buf, WIDTH_U32);
        Self::store(v as u64, &mut buf[..WIDTH_U32]);
    }

    /// Reads the first 5 bytes into the low 40 bits. Panics when `buf.len() < 5`.
    #[inline]
    #[track_caller]
    fn read_u40(buf: &[u8]) -> u64 {
        require_len(buf, WIDTH_U40);
        Self::load(&buf[..WIDTH_U40])
    }

    /// Writes the low 40 bits of `v`; higher bits are dropped.
    /// Panics when `buf.len() < 5`.
    #[inline]
    #[track_caller]
    fn write_u40(buf: &mut [u8], v: u64) {
        require_len(buf, WIDTH_U40);
        Self::store(v, &mut buf[..WIDTH_U40]);
    }

    /// Reads the first 6 bytes into the low 48 bits. Panics when `buf.len() < 6`.
    #[inline]
    #[track_caller]
    fn read_u48(buf: &[u8]) -> u64 {
        require_len(buf, WIDTH_U48);
        Self::load(&buf[..WIDTH_U48])
    }

    /// Writes the low 48 bits of `v`; higher bits are dropped.
    /// Panics when `buf.len() < 6`.
    #[inline]
    #[track_caller]
    fn write_u48(buf: &mut [u8], v: u64) {
        require_len(buf, WIDTH_U48);
        Self::store(v, &mut buf[..WIDTH_U48]);
    }

    /// Reads the first 7 bytes into the low 56 bits. Panics when `buf.len() < 7`.
    #[inline]
    #[track_caller]
    fn read_u56(buf: &[u8]) -> u64 {
        require_len(buf, WIDTH_U56);
        Self::load(&buf[..WIDTH_U56])
    }

    /// Writes the low 56 bits of `v`; higher bits are dropped.
    /// Panics when `buf.len() < 7`.
    #[inline]
    #[track_caller]
    fn write_u56(buf: &mut [u8], v: u64) {
        require_len(buf, WIDTH_U56);
        Self::store(v, &mut buf[..WIDTH_U56]);
    }

    /// Reads the first 8 bytes. Panics when `buf.len() < 8`.
    #[inline]
    #[track_caller]
    fn read_u64(buf: &[u8]) -> u64 {
        require_len(buf, WIDTH_U64);
        Self::load(&buf[..WIDTH_U64])
    }

    /// Writes `v` into the first 8 bytes. Panics when `buf.len() < 8`.
    #[inline]
    #[track_caller]
    fn write_u64(buf: &mut [u8], v: u64) {
        require_len(buf, WIDTH_U64);
        Self::store(v, &mut buf[..WIDTH_U64]);
    }

    /// Reads 4 bytes as the bit pattern of an IEEE-754 single.
    /// Panics when `buf.len() < 4`.
    #[inline]
    #[track_caller]
    fn read_f32(buf: &[u8]) -> f32 {
        f32::from_bits(Self::read_u32(buf))
    }

    /// Writes the bit pattern of `v`. Panics when `buf.len() < 4`.
    #[inline]
    #[track_caller]
    fn write_f32(buf: &mut [u8], v: f32) {
        Self::write_u32(buf, v.to_bits());
    }

    /// Reads 8 bytes as the bit pattern of an IEEE-754 double.
    /// Panics when `buf.len() < 8`.
    #[inline]
    #[track_caller]
    fn read_f64(buf: &[u8]) -> f64 {
        f64::from_bits(Self::read_u64(buf))
    }

    /// Writes the bit pattern of `v`. Panics when `buf.len() < 8`.
    #[inline]
    #[track_caller]
    fn write_f64(buf: &mut [u8], v: f64) {
        Self::write_u64(buf, v.to_bits());
    }

    try_read!(/// Checked [`read_u16`](Self::read_u16)
        try_read_u16 => read_u16, WIDTH_U16, u16);
    try_write!(/// Checked [`write_u16`](Self::write_u16)
        try_write_u16 => write_u16, WIDTH_U16, u16);
    try_read!(/// Checked [`read_u24`](Self::read_u24)
        try_read_u24 => read_u24, WIDTH_U24, u32);
    try_write!(/// Checked [`write_u24`](Self::write_u24)
        try_write_u24 => write_u24, WIDTH_U24, u32);
    try_read!(/// Checked [`read_u32`](Self::read_u32)
        try_read_u32 => read_u32, WIDTH_U32, u32);
    try_write!(/// Checked [`write_u32`](Self::write_u32)
        try_write_u32 => write_u32, WIDTH_U32, u32);
    try_read!(/// Checked [`read_u40`](Self::read_u40)
        try_read_u40 => read_u40, WIDTH_U40, u64);
    try_write!(/// Checked [`write_u40`](Self::write_u40)
        try_write_u40 => write_u40, WIDTH_U40, u64);
    try_read!(/// Checked [`read_u48`](Self::read_u48)
        try_read_u48 => read_u48, WIDTH_U48, u64);
    try_write!(/// Checked [`write_u48`](Self::write_u48)
        try_write_u48 => write_u48, WIDTH_U48, u64);
    try_read!(/// Checked [`read_u56`](Self::read_u56)
        try_read_u56 => read_u56, WIDTH_U56, u64);
    try_write!(/// Checked [`write_u56`](Self::write_u56)
        try_write_u56 => write_u56, WIDTH_U56, u64);
    try_read!(/// Checked [`read_u64`](Self::read_u64)
        try_read_u64 => read_u64, WIDTH_U64, u64);
    try_write!(/// Checked [`write_u64`](Self::write_u64)
        try_write_u64 => write_u64, WIDTH_U64, u64);
    try_read!(/// Checked [`read_f32`](Self::read_f32)
        try_read_f32 => read_f32, WIDTH_U32, f32);
    try_write!(/// Checked [`write_f32`](Self::write_f32)
        try_write_f32 => write_f32, WIDTH_U32, f32);
    try_read!(/// Checked [`read_f64`](Self::read_f64)
        try_read_f64 => read_f64, WIDTH_U64, f64);
    try_write!(/// Checked [`write_f64`](Self::write_f64)
        try_write_f64 => write_f64, WIDTH_U64, f64);
}

/// Most significant byte first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BigEndian {}

impl ByteOrder for BigEndian {
    const NAME: &'static str = "big-endian";
}

/// Least significant byte first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LittleEndian {}

impl ByteOrder for LittleEndian {
    const NAME: &'static str = "little-endian";
}

/// Byte order of the compilation target
#[cfg(target_endian = "little")]
pub type NativeEndian = LittleEndian;

/// Byte order of the compilation target
#[cfg(target_endian = "big")]
pub type NativeEndian = BigEndian;

mod private {
    use super::{BigEndian, LittleEndian, WIDTH_U64};

    /// Byte shuffling behind [`ByteOrder`](super::ByteOrder), unreachable from
    /// outside the crate
    pub trait Sealed {
        /// Combines all bytes of `src` into an integer. Panics past 8 bytes.
        fn load(src: &[u8]) -> u64;

        /// Writes the low `dst.len()` bytes of `v` into `dst`. Panics past 8 bytes.
        fn store(v: u64, dst: &mut [u8]);
    }

    impl Sealed for BigEndian {
        #[inline]
        fn load(src: &[u8]) -> u64 {
            assert!(src.len() <= WIDTH_U64, "integer wider than 64 bits");
            src.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64)
        }

        #[inline]
        fn store(v: u64, dst: &mut [u8]) {
            assert!(dst.len() <= WIDTH_U64, "integer wider than 64 bits");
            let top = dst.len();
            for (i, byte) in dst.iter_mut().enumerate() {
                *byte = (v >> (8 * (top - i - 1))) as u8;
            }
        }
    }

    impl Sealed for LittleEndian {
        #[inline]
        fn load(src: &[u8]) -> u64 {
            assert!(src.len() <= WIDTH_U64, "integer wider than 64 bits");
            src.iter().rev().fold(0u64, |acc, &b| (acc << 8) | b as u64)
        }

        #[inline]
        fn store(v: u64, dst: &mut [u8]) {
            assert!(dst.len() <= WIDTH_U64, "integer wider than 64 bits");
            for (i, byte) in dst.iter_mut().enumerate() {
                *byte = (v >> (8 * i)) as u8;
            }
        }
    }
}
