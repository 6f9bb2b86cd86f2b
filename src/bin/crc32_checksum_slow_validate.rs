// Copyright 2025 The crc32check Developers. Licensed under MIT or Apache-2.0.

//! Computes the CRC-32 (raw convention) of a file through the `crc` crate's
//! generic engine instead of this crate's lookup table. Use for validating
//! the table implementation against an independent one.

use std::env;
use std::fs;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: crc32_checksum_slow_validate <filename>");
        return ExitCode::from(1);
    }

    let bytes = match fs::read(&args[1]) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("crc32_checksum_slow_validate: {}: {err}", args[1]);
            return ExitCode::from(2);
        }
    };

    let crc = crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC);
    let mut digest = crc.digest();
    digest.update(&bytes);
    println!("{:08X}", digest.finalize());

    ExitCode::from(0)
}
