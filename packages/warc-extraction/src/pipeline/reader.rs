//! Archive stream plumbing.
//!
//! Captures arrive either as raw WARC bytes or gzip-compressed (`.warc.gz`
//! files are a sequence of gzip members, one per record). The container
//! decode itself is delegated to the `warc` crate; this module only prepares
//! the byte stream for it.

use std::io::{self, BufRead, BufReader};

use flate2::read::MultiGzDecoder;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Wrap an archive byte stream, transparently decompressing gzip input.
///
/// The stream is sniffed by magic bytes without consuming them, so plain
/// WARC input passes through untouched. `MultiGzDecoder` keeps reading
/// across member boundaries, which member-per-record archives require.
pub fn decompress<'a, R: BufRead + 'a>(mut input: R) -> io::Result<Box<dyn BufRead + 'a>> {
    let head = input.fill_buf()?;
    if head.starts_with(&GZIP_MAGIC) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(input))))
    } else {
        Ok(Box::new(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::gzip;
    use std::io::Read;

    #[test]
    fn passes_plain_input_through() {
        let mut reader = decompress(&b"WARC/1.0\r\n"[..]).unwrap();
        let mut out = String::new();
        reader.read_to_string(&mut out).unwrap();
        assert_eq!(out, "WARC/1.0\r\n");
    }

    #[test]
    fn decompresses_gzip_input() {
        let compressed = gzip(b"WARC/1.0\r\n");
        let mut reader = decompress(&compressed[..]).unwrap();
        let mut out = String::new();
        reader.read_to_string(&mut out).unwrap();
        assert_eq!(out, "WARC/1.0\r\n");
    }

    #[test]
    fn decompresses_concatenated_members() {
        let mut compressed = gzip(b"first ");
        compressed.extend_from_slice(&gzip(b"second"));
        let mut reader = decompress(&compressed[..]).unwrap();
        let mut out = String::new();
        reader.read_to_string(&mut out).unwrap();
        assert_eq!(out, "first second");
    }

    #[test]
    fn empty_input_is_not_an_error() {
        let mut reader = decompress(&b""[..]).unwrap();
        let mut out = Vec::new();
        reader.read_to_end(&mut out).unwrap();
        assert!(out.is_empty());
    }
}
