//! The 16-byte Yay0 container header.
//!
//! ```text
//! 0x0  magic             "Yay0"
//! 0x4  decompressed_size u32 (BE)
//! 0x8  comp_offset       u32 (BE)  -- absolute offset of the token stream
//! 0xC  raw_offset        u32 (BE)  -- absolute offset of the raw/literal stream
//! ```

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt, BE};
use fehler::{throw, throws};
use std::io::Cursor;

use crate::error::Error;

pub(crate) const MAGIC: [u8; 4] = *b"Yay0";
pub(crate) const HEADER_SIZE: usize = 16;

/// A parsed header together with the three sub-slices it delimits.
pub(crate) struct Parsed<'a> {
    pub(crate) decompressed_size: u32,
    pub(crate) flag: &'a [u8],
    pub(crate) comp: &'a [u8],
    pub(crate) raw: &'a [u8],
}

/// Returns `true` iff `input` starts with the Yay0 magic number.
pub fn is_yay0(input: &[u8]) -> bool {
    input.len() >= 4 && input[..4] == MAGIC
}

#[throws(Error)]
pub(crate) fn read_decompressed_size(input: &[u8]) -> u32 {
    if input.len() < 8 {
        throw!(Error::Truncated);
    }
    if !is_yay0(input) {
        throw!(Error::Format);
    }
    BigEndian::read_u32(&input[4..8])
}

/// Parses the 16-byte header and slices the three regions it describes out of `input`.
#[throws(Error)]
pub(crate) fn parse(input: &[u8]) -> Parsed<'_> {
    if input.len() < HEADER_SIZE {
        throw!(Error::Truncated);
    }
    if !is_yay0(input) {
        throw!(Error::Format);
    }

    let mut cursor = Cursor::new(input);
    cursor.set_position(4);
    let decompressed_size = cursor.read_u32::<BE>()?;
    let comp_offset = cursor.read_u32::<BE>()? as usize;
    let raw_offset = cursor.read_u32::<BE>()? as usize;

    if comp_offset > input.len() || raw_offset > input.len() {
        throw!(Error::Truncated);
    }

    let min_offset = comp_offset.min(raw_offset);
    if min_offset < HEADER_SIZE {
        throw!(Error::Format);
    }

    Parsed {
        decompressed_size,
        flag: &input[HEADER_SIZE..min_offset],
        comp: &input[comp_offset..],
        raw: &input[raw_offset..],
    }
}

/// Writes the 16-byte header for a container whose three streams have the given
/// byte lengths, returning the absolute offsets of the comp and raw streams.
#[throws(Error)]
pub(crate) fn write(
    out: &mut Vec<u8>,
    decompressed_size: u32,
    flag_len_bytes: usize,
    token_bytes: usize,
) -> (u32, u32) {
    let comp_offset = (HEADER_SIZE + flag_len_bytes) as u32;
    let raw_offset = comp_offset + token_bytes as u32;

    out.write_all(&MAGIC)?;
    out.write_u32::<BE>(decompressed_size)?;
    out.write_u32::<BE>(comp_offset)?;
    out.write_u32::<BE>(raw_offset)?;

    (comp_offset, raw_offset)
}
