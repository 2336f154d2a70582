//! The Yay0 decoder: replays the flag/token/raw streams into output bytes.

use fehler::{throw, throws};

use crate::bitstream::{BitFlagReader, ByteCursor};
use crate::error::Error;
use crate::header;

/// Decompresses a full Yay0 container into `output`.
///
/// `output.len()` must be at least the declared decompressed size; the
/// caller should size it with [`crate::get_decompressed_size`] beforehand.
#[throws(Error)]
pub fn decompress(input: &[u8], output: &mut [u8]) {
    let parsed = header::parse(input)?;
    if output.len() < parsed.decompressed_size as usize {
        throw!(Error::OutputSmall);
    }
    let output = &mut output[..parsed.decompressed_size as usize];
    decompress_headerless(parsed.flag, parsed.comp, parsed.raw, output)?;
}

/// Runs the decoder body directly over already-separated flag, token, and raw
/// streams. `output.len()` is the exact number of bytes to produce.
#[throws(Error)]
pub fn decompress_headerless(flag: &[u8], comp: &[u8], raw: &[u8], output: &mut [u8]) {
    let mut flags = BitFlagReader::new(flag);
    let mut comp = ByteCursor::new(comp);
    let mut raw = ByteCursor::new(raw);

    let mut bytes_emitted = 0usize;
    while bytes_emitted < output.len() {
        let bit = flags.read_bit()?;

        if bit == 1 {
            output[bytes_emitted] = raw.read_u8()?;
            bytes_emitted += 1;
            continue;
        }

        let w = comp.read_u8()?;
        let b = comp.read_u8()?;
        let distance = (usize::from(w & 0x0F) << 8 | usize::from(b)) + 1;
        let raw_len = (w >> 4) & 0x0F;
        let length = if raw_len == 0 {
            usize::from(raw.read_u8()?) + 0x12
        } else {
            usize::from(raw_len) + 2
        };

        if distance > bytes_emitted {
            throw!(Error::BackRef);
        }
        let src_start = bytes_emitted - distance;
        let copy_len = length.min(output.len() - bytes_emitted);

        // The source range may overlap the destination range (distance < length),
        // which is how runs get RLE-encoded. Only a non-overlapping copy may use
        // a bulk copy; everything else must advance byte by byte.
        if distance >= copy_len {
            output.copy_within(src_start..src_start + copy_len, bytes_emitted);
        } else {
            for i in 0..copy_len {
                output[bytes_emitted + i] = output[src_start + i];
            }
        }
        bytes_emitted += copy_len;
    }
}
