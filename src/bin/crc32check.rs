// Copyright 2025 The crc32check Developers. Licensed under MIT or Apache-2.0.

//! Computes the CRC-32 checksum of a file (or standard input with `-`),
//! prints it as eight uppercase hex digits, and cross-checks it against an
//! 8-hex-digit token embedded in the filename when one is present.

use std::borrow::Cow;
use std::env;
use std::ffi::OsStr;
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, Read};
use std::process::ExitCode;

use crc32check::{find_hex_token, Digest};

const BLOCK_SIZE: usize = 64 * 1024;

/// Reads `input` to end of stream in blocks, folding each block into the
/// digest, so arbitrarily large inputs stay within bounded memory.
fn checksum_stream(input: &mut dyn Read, png: bool) -> io::Result<u32> {
    let mut digest = if png { Digest::new_png() } else { Digest::new() };
    let mut block = vec![0u8; BLOCK_SIZE];
    loop {
        let n = input.read(&mut block)?;
        if n == 0 {
            return Ok(digest.sum32());
        }
        digest.write(&block[..n]);
    }
}

fn checksum_path(filename: &OsStr, png: bool) -> io::Result<u32> {
    if filename == "-" {
        checksum_stream(&mut io::stdin().lock(), png)
    } else {
        checksum_stream(&mut File::open(filename)?, png)
    }
}

fn usage(prog: &str) -> String {
    format!("Usage: {prog} <filename> [--png]")
}

/// Builds the stderr verification line for a filename that carries a hex
/// token, comparing the token uppercased against the formatted checksum.
/// Returns `None` when the filename has no token.
fn verification_line(filename: &str, crc_str: &str) -> Option<String> {
    let token = find_hex_token(filename)?.to_ascii_uppercase();
    Some(if token == crc_str {
        format!("{filename} {crc_str} OK")
    } else {
        format!("{filename} {crc_str} != {token} BAD")
    })
}

fn main() -> ExitCode {
    // args_os: a non-Unicode path must still reach the open(2) call rather
    // than abort argument collection.
    let args: Vec<OsString> = env::args_os().collect();

    if args.len() < 2 {
        let prog = args
            .first()
            .map(|a| a.to_string_lossy())
            .unwrap_or(Cow::Borrowed("crc32check"));
        eprintln!("{}", usage(&prog));
        return ExitCode::from(1);
    }

    let filename = &args[1];
    let png = args.len() >= 3 && args[2] == "--png";
    let display = filename.to_string_lossy();

    let crc = match checksum_path(filename, png) {
        Ok(crc) => crc,
        Err(err) => {
            eprintln!("crc32check: {display}: {err}");
            return ExitCode::from(2);
        }
    };

    let crc_str = format!("{crc:08X}");
    println!("{crc_str}");

    // Filenames conventionally carry their own checksum; verification goes
    // to stderr and never changes the exit code.
    if let Some(line) = verification_line(&display, &crc_str) {
        eprintln!("{line}");
    }

    ExitCode::from(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    // Caps every read at `chunk` bytes to exercise short reads.
    struct ShortReads<R> {
        inner: R,
        chunk: usize,
    }

    impl<R: Read> Read for ShortReads<R> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let cap = self.chunk.min(buf.len());
            self.inner.read(&mut buf[..cap])
        }
    }

    #[test]
    fn stream_matches_check_value() {
        let crc = checksum_stream(&mut Cursor::new(b"123456789"), false).unwrap();
        assert_eq!(crc, 0xCBF43926);
        let crc = checksum_stream(&mut Cursor::new(b"123456789"), true).unwrap();
        assert_eq!(crc, 0x2DFD2D88);
    }

    #[test]
    fn stream_of_empty_input() {
        assert_eq!(checksum_stream(&mut Cursor::new(b""), false).unwrap(), 0);
        assert_eq!(checksum_stream(&mut Cursor::new(b""), true).unwrap(), 0);
    }

    #[test]
    fn stream_is_block_size_independent() {
        let data: Vec<u8> = (0u32..100_000).map(|i| (i * 31) as u8).collect();
        let whole = checksum_stream(&mut Cursor::new(&data), true).unwrap();
        for chunk in [1, 7, 512, BLOCK_SIZE - 1, BLOCK_SIZE + 1] {
            let mut reader = ShortReads {
                inner: Cursor::new(&data),
                chunk,
            };
            assert_eq!(
                checksum_stream(&mut reader, true).unwrap(),
                whole,
                "chunk size {chunk}"
            );
        }
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = OsStr::new("/nonexistent/crc32check-test");
        assert!(checksum_path(path, false).is_err());
    }

    #[test]
    fn verification_line_matches_token() {
        assert_eq!(
            verification_line("data_CBF43926.bin", "CBF43926").as_deref(),
            Some("data_CBF43926.bin CBF43926 OK")
        );
    }

    #[test]
    fn verification_line_uppercases_lowercase_token() {
        assert_eq!(
            verification_line("data_cbf43926.bin", "CBF43926").as_deref(),
            Some("data_cbf43926.bin CBF43926 OK")
        );
    }

    #[test]
    fn verification_line_reports_mismatch() {
        assert_eq!(
            verification_line("data_DEADBEEF.bin", "CBF43926").as_deref(),
            Some("data_DEADBEEF.bin CBF43926 != DEADBEEF BAD")
        );
    }

    #[test]
    fn verification_line_absent_without_token() {
        assert_eq!(verification_line("-", "CBF43926"), None);
        assert_eq!(verification_line("notes.txt", "CBF43926"), None);
    }

    #[test]
    fn usage_names_both_arguments() {
        assert_eq!(usage("crc32check"), "Usage: crc32check <filename> [--png]");
    }
}
