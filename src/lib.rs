//! A pure Rust implementation of the **Yay0** compression format used to pack
//! read-only asset data in first-party Nintendo 64 titles.
//!
//! Yay0 is a Lempel-Ziv-style scheme: compressed data is split into three
//! parallel streams (a bit-packed flag stream, a 16-bit token stream, and a
//! raw byte stream for literals and length extensions) interleaved according
//! to the flag bits. See the [`header`] module for the container layout.
//!
//! ```
//! let original = b"the quick brown fox jumps over the lazy dog";
//! let compressed = yay0::compress(original).unwrap();
//! assert!(yay0::is_yay0(&compressed));
//!
//! let mut decompressed = vec![0u8; yay0::get_decompressed_size(&compressed).unwrap() as usize];
//! yay0::decompress(&compressed, &mut decompressed).unwrap();
//! assert_eq!(decompressed, original);
//! ```

#![forbid(unsafe_code)]

mod bitstream;
pub mod decode;
pub mod encode;
pub mod error;
pub mod header;
mod search;

pub use decode::{decompress, decompress_headerless};
pub use encode::compress;
pub use error::Error;
pub use header::is_yay0;

use fehler::throws;

/// Returns the decompressed size declared in a Yay0 container's header.
///
/// Fails with [`Error::Truncated`] if `input` is shorter than 8 bytes, or
/// [`Error::Format`] if the magic number doesn't match.
#[throws(Error)]
pub fn get_decompressed_size(input: &[u8]) -> u32 {
    header::read_decompressed_size(input)?
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inverse(s: &str) {
        let compressed = compress(s.as_bytes()).unwrap();
        let mut decompressed = vec![0u8; s.len()];
        decompress(&compressed, &mut decompressed).unwrap();
        assert_eq!(decompressed, s.as_bytes());
    }

    #[test]
    fn shakespeare() {
        inverse("to live or not to live");
        inverse("Love is a wonderful terrible thing");
        inverse("There is nothing either good or bad, but thinking makes it so.");
        inverse("I burn, I pine, I perish.");
    }

    #[test]
    fn pandas() {
        inverse("To cute to die! Save the red panda!");
        inverse("You are 60% water. Save 60% of yourself!");
        inverse("Save water, it doesn't grow on trees.");
        inverse("The panda bear has an amazing black-and-white fur.");
        inverse("The average panda eats as much as 9 to 14 kg of bamboo shoots a day.");
        inverse("The Empress Dowager Bo was buried with a panda skull in her vault");
    }

    #[test]
    fn not_very_compressible() {
        inverse("as6yhol.;jrew5tyuikbfewedfyjltre22459ba");
        inverse("jhflkdjshaf9p8u89ybkvjsdbfkhvg4ut08yfrr");
    }

    #[test]
    fn short_strings() {
        inverse("ahhd");
        inverse("ahd");
        inverse("x-29");
        inverse("x");
        inverse("k");
        inverse(".");
        inverse("ajsdh");
    }

    #[test]
    fn empty_string() {
        inverse("");
    }

    #[test]
    fn nulls() {
        inverse("\0\0\0\0\0\0\0\0\0\0\0\0\0");
    }

    #[test]
    fn compression_actually_shrinks_repetitive_input() {
        let s = "The Read trait allows for reading bytes from a source. Implementors of the \
                  Read trait are called 'readers'. Readers are defined by one required method, read().";
        inverse(s);
        assert!(compress(s.as_bytes()).unwrap().len() < s.len());
    }

    #[test]
    fn is_yay0_and_get_decompressed_size_agree_with_compress() {
        let data = b"round and round the mulberry bush";
        let compressed = compress(data).unwrap();
        assert!(is_yay0(&compressed));
        assert_eq!(get_decompressed_size(&compressed).unwrap() as usize, data.len());
    }

    #[test]
    fn get_decompressed_size_rejects_bad_magic() {
        let err = get_decompressed_size(b"nope????").unwrap_err();
        assert_eq!(err, Error::Format);
    }

    #[test]
    fn get_decompressed_size_rejects_short_input() {
        let err = get_decompressed_size(b"Yay0").unwrap_err();
        assert_eq!(err, Error::Truncated);
    }
}
