//! Basic usage example for ByteView
//!
//! Run with: cargo run --example basic_usage

use byteview::limits::{MAX_INT24, MAX_UINT48, MIN_INT24};
use byteview::*;

fn main() -> Result<(), Error> {
    println!("ByteView Basic Usage Example");
    println!("============================");

    // Example 1: Marker types as free functions
    println!("\n1. Big-endian u32:");
    {
        let mut buf = [0u8; 4];
        BigEndian::write_u32(&mut buf, 0x11223344);
        println!("  Encoded bytes: {:02X?}", buf);
        println!("  Decoded: 0x{:08X}", BigEndian::read_u32(&buf));
    }

    // Example 2: Non-power-of-two widths
    println!("\n2. Little-endian u24 and u48:");
    {
        let mut buf = [0u8; 9];
        LittleEndian::write_u24(&mut buf, 0x112233);
        LittleEndian::write_u48(&mut buf[3..], MAX_UINT48);
        println!("  Encoded bytes: {:02X?}", buf);
        println!(
            "  Decoded: u24=0x{:06X}, u48={}",
            LittleEndian::read_u24(&buf),
            LittleEndian::read_u48(&buf[3..])
        );
    }

    // Example 3: Views over a record
    println!("\n3. Record written through views:");
    {
        // tag u16 | sample u24 | value f32
        let mut record = [0u8; 9];
        be(&mut record[0..]).write_u16(7);
        be(&mut record[2..]).write_u24((MAX_INT24 as u32) & 0xFF_FFFF);
        be(&mut record[5..]).write_f32(-273.15);

        let tag = be(&record[0..]).read_u16();
        let sample = be(&record[2..]).read_u24();
        let value = be(&record[5..]).read_f32();
        println!("  Record bytes: {:02X?}", record);
        println!("  Decoded: tag={}, sample={}, value={}", tag, sample, value);

        // Two's complement 24-bit sample stored in the low bits
        let mut buf = [0u8; 3];
        LittleEndian::write_u24(&mut buf, MIN_INT24 as u32);
        println!("  MIN_INT24 as u24 bytes: {:02X?}", buf);
    }

    // Example 4: Cross-order reads
    println!("\n4. Cross-order reads:");
    {
        let mut buf = [0u8; 2];
        BigEndian::write_u16(&mut buf, 0x1122);
        println!(
            "  Written BE 0x1122, read LE: 0x{:04X}",
            LittleEndian::read_u16(&buf)
        );
    }

    // Example 5: Checked operations on untrusted lengths
    println!("\n5. Checked operations:");
    {
        let short = [0u8; 5];
        match BigEndian::try_read_u64(&short) {
            Ok(v) => println!("  Unexpected value: {}", v),
            Err(e) => println!("  Rejected: {}", e),
        }

        let value = LittleEndian::try_read_u40(&short)?;
        println!("  u40 from 5 bytes: {}", value);
    }

    println!("\nAll examples completed successfully!");
    Ok(())
}
