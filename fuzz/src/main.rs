#[macro_use]
extern crate afl;
extern crate crc32check;

use crc32check::{find_hex_token, Digest};

fn main() {
    let digest_init = Digest::new_png();
    fuzz!(|data: &[u8]| {
        let mut digest = digest_init.clone();
        digest.write(data);
        digest.sum32();
        if let Ok(name) = std::str::from_utf8(data) {
            let _ = find_hex_token(name);
        }
    });
}
