//! Binary save/load for a single [`BigInt`] (spec C2, "Binary save/load").
//!
//! Wire shape: an 8-byte little-endian signed size header (magnitude = byte
//! count of the magnitude that follows, sign = the value's sign), then that
//! many little-endian magnitude bytes. Both header and payload bytes fold
//! into a running CRC-32 the caller threads across a whole file of records
//! (see `bernoulli::checkpoint`).

use super::{BigInt, Segment, SEGMENT_BYTES};
use crate::crc::crc_buf;
use crate::error::{BigIntError, Result};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};

/// Width in bytes of the signed size header written ahead of every magnitude.
pub const BERNOULLI_SAVE_HEADER_BYTES: usize = 8;

impl BigInt {
    /// Write `self` to `writer`, returning the running CRC-32 folded over
    /// the header and payload, continuing from `crc`.
    pub fn save<W: Write>(&self, writer: &mut W, crc: u32) -> Result<u32> {
        let bytes = self.magnitude_bytes();
        let byte_len = bytes.len() as i64;
        let header = if self.sign { -byte_len } else { byte_len };

        let mut header_buf = [0u8; BERNOULLI_SAVE_HEADER_BYTES];
        (&mut header_buf[..]).write_i64::<LittleEndian>(header)?;

        writer.write_all(&header_buf)?;
        writer.write_all(&bytes)?;

        Ok(crc_buf(crc_buf(crc, &header_buf), &bytes))
    }

    /// Mirror of [`Self::save`]. Reconstructs a reduced `BigInt` and returns
    /// the running CRC-32 folded over the bytes actually read, continuing
    /// from `crc`. Fails with [`BigIntError::IoShort`] on a short read.
    pub fn load<R: Read>(reader: &mut R, crc: u32) -> Result<(BigInt, u32)> {
        let mut header_buf = [0u8; BERNOULLI_SAVE_HEADER_BYTES];
        read_full(reader, &mut header_buf, "bigint header")?;
        let header = (&header_buf[..]).read_i64::<LittleEndian>()?;
        let sign = header < 0;
        let byte_len = header.unsigned_abs() as usize;

        let mut bytes = vec![0u8; byte_len];
        read_full(reader, &mut bytes, "bigint payload")?;

        let crc = crc_buf(crc_buf(crc, &header_buf), &bytes);
        Ok((Self::from_magnitude_bytes(&bytes, sign), crc))
    }

    /// Minimal little-endian byte representation of the magnitude: full
    /// segments with the top segment's high zero bytes stripped. Empty for
    /// zero, so the on-disk record isn't segment-width-locked (spec:
    /// "segment-width-agnostic at the record level").
    fn magnitude_bytes(&self) -> Vec<u8> {
        if self.is_zero() {
            return Vec::new();
        }
        let mut bytes = Vec::with_capacity(self.data().len() * SEGMENT_BYTES);
        for &seg in self.data() {
            bytes.extend_from_slice(&seg.to_le_bytes());
        }
        while matches!(bytes.last(), Some(0)) {
            bytes.pop();
        }
        bytes
    }

    /// Inverse of [`Self::magnitude_bytes`]: zero-fills the top segment when
    /// `bytes.len()` doesn't fill a whole number of segments.
    fn from_magnitude_bytes(bytes: &[u8], sign: bool) -> BigInt {
        if bytes.is_empty() {
            return BigInt::zero();
        }
        let n = bytes.len().div_ceil(SEGMENT_BYTES);
        let mut data = vec![0 as Segment; n];
        for (i, chunk) in bytes.chunks(SEGMENT_BYTES).enumerate() {
            let mut word = [0u8; SEGMENT_BYTES];
            word[..chunk.len()].copy_from_slice(chunk);
            data[i] = Segment::from_le_bytes(word);
        }
        BigInt::from_raw(data, sign)
    }
}

/// Fill `buf` completely or fail with [`BigIntError::IoShort`] naming how
/// many bytes actually arrived before the stream ran dry.
pub(crate) fn read_full<R: Read>(
    reader: &mut R,
    buf: &mut [u8],
    operation: &'static str,
) -> Result<()> {
    let mut total = 0;
    while total < buf.len() {
        let n = reader.read(&mut buf[total..])?;
        if n == 0 {
            return Err(BigIntError::IoShort {
                operation,
                expected: buf.len(),
                actual: total,
            });
        }
        total += n;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(v: &BigInt) {
        let mut buf = Vec::new();
        let write_crc = v.save(&mut buf, 0).unwrap();
        let (loaded, read_crc) = BigInt::load(&mut &buf[..], 0).unwrap();
        assert_eq!(&loaded, v);
        assert_eq!(write_crc, read_crc);
    }

    #[test]
    fn roundtrips_zero_and_small_values() {
        roundtrip(&BigInt::zero());
        roundtrip(&BigInt::from_i64(1));
        roundtrip(&BigInt::from_i64(-1));
        roundtrip(&BigInt::from_i64(i64::MIN));
    }

    #[test]
    fn roundtrips_multi_segment_values() {
        let big: BigInt = "123456789012345678901234567890123456789".parse().unwrap();
        roundtrip(&big);
        roundtrip(&big.neg());
    }

    #[test]
    fn zero_has_empty_payload() {
        let mut buf = Vec::new();
        BigInt::zero().save(&mut buf, 0).unwrap();
        assert_eq!(buf.len(), BERNOULLI_SAVE_HEADER_BYTES);
    }

    #[test]
    fn short_read_is_reported() {
        let mut buf = Vec::new();
        BigInt::from_i64(12345).save(&mut buf, 0).unwrap();
        buf.truncate(buf.len() - 1);
        let err = BigInt::load(&mut &buf[..], 0).unwrap_err();
        assert!(matches!(err, BigIntError::IoShort { .. }));
    }

    #[test]
    fn running_crc_differs_from_fresh_crc() {
        let v = BigInt::from_i64(99);
        let mut buf = Vec::new();
        let fresh = v.save(&mut buf, 0).unwrap();
        let mut buf2 = Vec::new();
        let chained = v.save(&mut buf2, 0xdead_beef).unwrap();
        assert_ne!(fresh, chained);
    }
}
