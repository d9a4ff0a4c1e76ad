//! Basic usage example for wireprim
//!
//! Run with: cargo run --example basic_usage

use wireprim::capability::{native_read, native_write};
use wireprim::hex::HexDump;
use wireprim::*;

fn main() -> Result<()> {
    println!("wireprim Basic Usage Example");
    println!("============================");

    // Example 1: Unsigned varints
    println!("\n1. Unsigned varints:");
    for value in [0u64, 127, 128, 300, u32::MAX as u64, u64::MAX] {
        let mut out: Vec<u8> = Vec::new();
        write_varint(&mut out, value)?;
        println!("  {:>20} -> {} ({} bytes)", value, HexDump(&out), out.len());
    }

    // Example 2: Signed values through zigzag
    println!("\n2. Signed varints:");
    for value in [0i64, -1, 1, -64, 64, i64::MIN] {
        let mut out: Vec<u8> = Vec::new();
        write_signed_varint(&mut out, value)?;
        println!(
            "  {:>20} -> zigzag {:>20} -> {}",
            value,
            encode_zigzag(value),
            HexDump(&out)
        );
    }

    // Example 3: A length-prefixed record in a fixed buffer
    println!("\n3. Record in a fixed buffer:");
    {
        let mut buf = [0u8; 64];
        let mut writer = SliceWriter::new(&mut buf);

        let name: Vec<u16> = "AAPL".encode_utf16().collect();
        write_varint(&mut writer, 12345u32)?;
        write_signed_varint(&mut writer, -25_500_000i64)?;
        write_varint(&mut writer, name.len() as u32)?;
        write_wide_string(&mut writer, &name)?;
        let size = writer.position();
        println!("  Encoded {} bytes: {}", size, HexDump(&buf[..size]));

        let mut reader = SliceReader::new(&buf[..size]);
        let seq: u32 = read_varint(&mut reader)?;
        let price: i64 = read_signed_varint(&mut reader)?;
        let len: u32 = read_varint(&mut reader)?;
        let mut back: Vec<u16> = Vec::new();
        read_wide_string(&mut reader, &mut back, len)?;
        println!(
            "  Decoded: seq={}, price={}, name={:?}",
            seq,
            price,
            String::from_utf16_lossy(&back)
        );
    }

    // Example 4: Lossy narrowing
    println!("\n4. Wide string over narrow units:");
    {
        let wide: Vec<u16> = "añ€".encode_utf16().collect();
        let mut out: Vec<u8> = Vec::new();
        write_narrow_string(&mut out, &wide)?;
        println!("  {:04x?} -> {}", wide, HexDump(&out));
    }

    // Example 5: Which varint path each buffer takes
    println!("\n5. Varint paths:");
    println!("  Vec<u8>        native write: {}", native_write::<Vec<u8>>());
    println!("  SliceWriter    native write: {}", native_write::<SliceWriter<'_>>());
    println!("  &[u8]          native read:  {}", native_read::<&[u8]>());
    println!("  SliceReader    native read:  {}", native_read::<SliceReader<'_>>());

    Ok(())
}
