//! ByteView: fixed-width byte-order codec for binary formats and wire protocols
//!
//! This crate reads and writes unsigned integers of 16, 24, 32, 40, 48, 56 and
//! 64 bits and IEEE-754 floats from/to borrowed byte slices, in big-endian or
//! little-endian layout. It never allocates and keeps no state.
//!
//! # Layout
//!
//! ```text
//! value 0x112233 as u24
//! +------+------+------+
//! | 0x11 | 0x22 | 0x33 |   BigEndian:    most significant byte first
//! +------+------+------+
//! | 0x33 | 0x22 | 0x11 |   LittleEndian: least significant byte first
//! +------+------+------+
//! ```
//!
//! # Features
//!
//! - Non-power-of-two widths (24/40/48/56 bits) in the low bits of `u32`/`u64`
//! - Float reads and writes are exact bit reinterpretations (NaN payloads survive)
//! - Panicking fail-fast API plus checked `try_*` counterparts
//! - Numeric limit constants for every supported width
//! - `no_std` support
//!
//! # Precondition
//!
//! Every operation touches exactly the first `W` bytes of the region. Callers
//! slice the region to the right offset first. A region shorter than `W` is a
//! programming error: the plain operations panic with
//! `byte region too short: need W bytes, got N`.
//!
//! # Example
//!
//! ```rust
//! use byteview::*;
//!
//! let mut buf = [0u8; 8];
//!
//! BigEndian::write_u32(&mut buf, 0x11223344);
//! assert_eq!(buf[..4], [0x11, 0x22, 0x33, 0x44]);
//!
//! le(&mut buf[4..]).write_u24(0x112233);
//! assert_eq!(buf[4..7], [0x33, 0x22, 0x11]);
//!
//! assert_eq!(LittleEndian::read_u16(&buf), 0x2211);
//! assert_eq!(
//!     BigEndian::try_read_u64(&buf[1..]),
//!     Err(Error::ShortBuffer { needed: 8, len: 7 })
//! );
//! ```

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod limits;
pub mod order;
pub mod view;

// Re-export main types
pub use error::Error;
pub use order::{BigEndian, ByteOrder, LittleEndian, NativeEndian};
pub use view::{be, le, View, BE, LE};

/// Keeps the README usage snippet compiling
#[cfg(doctest)]
#[doc = include_str!("../README.md")]
pub struct ReadmeDoctests;
