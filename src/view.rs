//! Byte-order views over borrowed regions
//!
//! A [`View`] pairs a [`ByteOrder`] with a borrowed byte region so that call
//! sites read like `be(&mut buf[8..]).write_u32(seq)`. It holds nothing but
//! the borrow and is meant to be built right before use and dropped after.

use core::marker::PhantomData;

use crate::error::Result;
use crate::order::{BigEndian, ByteOrder, LittleEndian};

/// A byte region interpreted in byte order `O`
#[derive(Debug, Clone, Copy)]
pub struct View<B, O> {
    buf: B,
    order: PhantomData<O>,
}

/// Big-endian view
pub type BE<B> = View<B, BigEndian>;

/// Little-endian view
pub type LE<B> = View<B, LittleEndian>;

/// Wrap `buf` in a big-endian view
#[inline]
pub fn be<B: AsRef<[u8]>>(buf: B) -> BE<B> {
    View::new(buf)
}

/// Wrap `buf` in a little-endian view
#[inline]
pub fn le<B: AsRef<[u8]>>(buf: B) -> LE<B> {
    View::new(buf)
}

impl<B: AsRef<[u8]>, O: ByteOrder> View<B, O> {
    /// Create a view over `buf`
    #[inline]
    pub fn new(buf: B) -> Self {
        Self {
            buf,
            order: PhantomData,
        }
    }

    /// Release the borrowed region
    #[inline]
    pub fn into_inner(self) -> B {
        self.buf
    }

    /// Length of the underlying region
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.as_ref().len()
    }

    /// Whether the underlying region is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// See [`ByteOrder::read_u16`]
    #[inline]
    #[track_caller]
    pub fn read_u16(&self) -> u16 {
        O::read_u16(self.buf.as_ref())
    }

    /// See [`ByteOrder::read_u24`]
    #[inline]
    #[track_caller]
    pub fn read_u24(&self) -> u32 {
        O::read_u24(self.buf.as_ref())
    }

    /// See [`ByteOrder::read_u32`]
    #[inline]
    #[track_caller]
    pub fn read_u32(&self) -> u32 {
        O::read_u32(self.buf.as_ref())
    }

    /// See [`ByteOrder::read_u40`]
    #[inline]
    #[track_caller]
    pub fn read_u40(&self) -> u64 {
        O::read_u40(self.buf.as_ref())
    }

    /// See [`ByteOrder::read_u48`]
    #[inline]
    #[track_caller]
    pub fn read_u48(&self) -> u64 {
        O::read_u48(self.buf.as_ref())
    }

    /// See [`ByteOrder::read_u56`]
    #[inline]
    #[track_caller]
    pub fn read_u56(&self) -> u64 {
        O::read_u56(self.buf.as_ref())
    }

    /// See [`ByteOrder::read_u64`]
    #[inline]
    #[track_caller]
    pub fn read_u64(&self) -> u64 {
        O::read_u64(self.buf.as_ref())
    }

    /// See [`ByteOrder::read_f32`]
    #[inline]
    #[track_caller]
    pub fn read_f32(&self) -> f32 {
        O::read_f32(self.buf.as_ref())
    }

    /// See [`ByteOrder::read_f64`]
    #[inline]
    #[track_caller]
    pub fn read_f64(&self) -> f64 {
        O::read_f64(self.buf.as_ref())
    }

    /// Checked 16-bit read
    #[inline]
    pub fn try_read_u16(&self) -> Result<u16> {
        O::try_read_u16(self.buf.as_ref())
    }

    /// Checked 24-bit read
    #[inline]
    pub fn try_read_u24(&self) -> Result<u32> {
        O::try_read_u24(self.buf.as_ref())
    }

    /// Checked 32-bit read
    #[inline]
    pub fn try_read_u32(&self) -> Result<u32> {
        O::try_read_u32(self.buf.as_ref())
    }

    /// Checked 40-bit read
    #[inline]
    pub fn try_read_u40(&self) -> Result<u64> {
        O::try_read_u40(self.buf.as_ref())
    }

    /// Checked 48-bit read
    #[inline]
    pub fn try_read_u48(&self) -> Result<u64> {
        O::try_read_u48(self.buf.as_ref())
    }

    /// Checked 56-bit read
    #[inline]
    pub fn try_read_u56(&self) -> Result<u64> {
        O::try_read_u56(self.buf.as_ref())
    }

    /// Checked 64-bit read
    #[inline]
    pub fn try_read_u64(&self) -> Result<u64> {
        O::try_read_u64(self.buf.as_ref())
    }

    /// Checked single-precision read
    #[inline]
    pub fn try_read_f32(&self) -> Result<f32> {
        O::try_read_f32(self.buf.as_ref())
    }

    /// Checked double-precision read
    #[inline]
    pub fn try_read_f64(&self) -> Result<f64> {
        O::try_read_f64(self.buf.as_ref())
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>, O: ByteOrder> View<B, O> {
    /// See [`ByteOrder::write_u16`]
    #[inline]
    #[track_caller]
    pub fn write_u16(&mut self, v: u16) {
        O::write_u16(self.buf.as_mut(), v);
    }

    /// See [`ByteOrder::write_u24`]
    #[inline]
    #[track_caller]
    pub fn write_u24(&mut self, v: u32) {
        O::write_u24(self.buf.as_mut(), v);
    }

    /// See [`ByteOrder::write_u32`]
    #[inline]
    #[track_caller]
    pub fn write_u32(&mut self, v: u32) {
        O::write_u32(self.buf.as_mut(), v);
    }

    /// See [`ByteOrder::write_u40`]
    #[inline]
    #[track_caller]
    pub fn write_u40(&mut self, v: u64) {
        O::write_u40(self.buf.as_mut(), v);
    }

    /// See [`ByteOrder::write_u48`]
    #[inline]
    #[track_caller]
    pub fn write_u48(&mut self, v: u64) {
        O::write_u48(self.buf.as_mut(), v);
    }

    /// See [`ByteOrder::write_u56`]
    #[inline]
    #[track_caller]
    pub fn write_u56(&mut self, v: u64) {
        O::write_u56(self.buf.as_mut(), v);
    }

    /// See [`ByteOrder::write_u64`]
    #[inline]
    #[track_caller]
    pub fn write_u64(&mut self, v: u64) {
        O::write_u64(self.buf.as_mut(), v);
    }

    /// See [`ByteOrder::write_f32`]
    #[inline]
    #[track_caller]
    pub fn write_f32(&mut self, v: f32) {
        O::write_f32(self.buf.as_mut(), v);
    }

    /// See [`ByteOrder::write_f64`]
    #[inline]
    #[track_caller]
    pub fn write_f64(&mut self, v: f64) {
        O::write_f64(self.buf.as_mut(), v);
    }

    /// Checked 16-bit write
    #[inline]
    pub fn try_write_u16(&mut self, v: u16) -> Result<()> {
        O::try_write_u16(self.buf.as_mut(), v)
    }

    /// Checked 24-bit write
    #[inline]
    pub fn try_write_u24(&mut self, v: u32) -> Result<()> {
        O::try_write_u24(self.buf.as_mut(), v)
    }

    /// Checked 32-bit write
    #[inline]
    pub fn try_write_u32(&mut self, v: u32) -> Result<()> {
        O::try_write_u32(self.buf.as_mut(), v)
    }

    /// Checked 40-bit write
    #[inline]
    pub fn try_write_u40(&mut self, v: u64) -> Result<()> {
        O::try_write_u40(self.buf.as_mut(), v)
    }

    /// Checked 48-bit write
    #[inline]
    pub fn try_write_u48(&mut self, v: u64) -> Result<()> {
        O::try_write_u48(self.buf.as_mut(), v)
    }

    /// Checked 56-bit write
    #[inline]
    pub fn try_write_u56(&mut self, v: u64) -> Result<()> {
        O::try_write_u56(self.buf.as_mut(), v)
    }

    /// Checked 64-bit write
    #[inline]
    pub fn try_write_u64(&mut self, v: u64) -> Result<()> {
        O::try_write_u64(self.buf.as_mut(), v)
    }

    /// Checked single-precision write
    #[inline]
    pub fn try_write_f32(&mut self, v: f32) -> Result<()> {
        O::try_write_f32(self.buf.as_mut(), v)
    }

    /// Checked double-precision write
    #[inline]
    pub fn try_write_f64(&mut self, v: f64) -> Result<()> {
        O::try_write_f64(self.buf.as_mut(), v)
    }
}
