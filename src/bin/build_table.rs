// Copyright 2025 The crc32check Developers. Licensed under MIT or Apache-2.0.

// CRC-32 (IEEE 802.3 / zlib) polynomial, reflected form.
const POLY: u32 = 0xEDB88320;

// usage:
//
//  ./build_table    # emit the TABLE initializer for src/table.rs

fn byte_crc(byte: u32) -> u32 {
    let mut value = byte;
    for _ in 0..8 {
        value = if value & 1 != 0 {
            POLY ^ (value >> 1)
        } else {
            value >> 1
        };
    }
    value
}

fn main() {
    println!("static TABLE: [u32; 256] = [");
    for row in 0..64u32 {
        let mut line = String::new();
        for col in 0..4 {
            line.push_str(&format!(" {:#010x},", byte_crc(row * 4 + col)));
        }
        println!("   {line}");
    }
    println!("];");
}
