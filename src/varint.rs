//! ILInt, the variable-length unsigned integer used for every id and length in the tag format.
//!
//! Values below [`BASE`] are a single byte. Anything larger is a prefix byte `BASE + (n - 1)`
//! followed by `n` big-endian bytes (1 to 8) holding `value - BASE`. Each value has exactly one
//! valid encoding, and decoding rejects any other.

use byteorder::{BigEndian, ReadBytesExt};

use crate::error::{Error, Result};

/// Smallest value that needs more than one byte, and the lowest multi-byte prefix.
pub const BASE: u64 = 0xF8;

/// Longest possible encoding, in bytes.
pub const MAX_SIZE: usize = 9;

/// Number of bytes needed to encode `v`.
pub fn size(v: u64) -> usize {
    if v < BASE {
        1
    } else {
        let magnitude = 8 - ((v - BASE).leading_zeros() as usize / 8);
        1 + magnitude.max(1)
    }
}

/// Total encoded length announced by a first byte, including the byte itself.
pub fn encoded_len(prefix: u8) -> usize {
    if (prefix as u64) < BASE {
        1
    } else {
        (prefix as u64 - BASE) as usize + 2
    }
}

/// Encode `v` at the start of `out`, returning the number of bytes written. Nothing is written if
/// `out` is shorter than [`size`]`(v)`.
pub fn encode(v: u64, out: &mut [u8]) -> Result<usize> {
    let len = size(v);
    if out.len() < len {
        return Err(Error::InvalidArgument(format!(
            "ILInt {} needs {} bytes, but only {} are available",
            v,
            len,
            out.len()
        )));
    }
    write(v, len, out);
    Ok(len)
}

/// Append the encoding of `v` to a byte vector.
pub fn encode_vec(v: u64, buf: &mut Vec<u8>) {
    let mut tmp = [0u8; MAX_SIZE];
    let len = size(v);
    write(v, len, &mut tmp);
    buf.extend_from_slice(&tmp[..len]);
}

// `len` must be `size(v)`, and `out` at least that long.
fn write(v: u64, len: usize, out: &mut [u8]) {
    if len == 1 {
        out[0] = v as u8;
    } else {
        out[0] = (BASE as usize + len - 2) as u8;
        let magnitude = (v - BASE).to_be_bytes();
        out[1..len].copy_from_slice(&magnitude[MAX_SIZE - len..]);
    }
}

/// Decode one value from the start of `inp`, returning it with the number of bytes consumed.
pub fn decode(inp: &[u8]) -> Result<(u64, usize)> {
    let mut data = inp;
    let v = read(&mut data)?;
    Ok((v, inp.len() - data.len()))
}

/// Read one value off the front of a byte cursor. The cursor only advances on success.
pub fn read(buf: &mut &[u8]) -> Result<u64> {
    let mut data = *buf;
    let prefix = data
        .read_u8()
        .map_err(|_| Error::truncated("decode ILInt prefix", 0, 1))?;
    if (prefix as u64) < BASE {
        *buf = data;
        return Ok(prefix as u64);
    }

    let len = encoded_len(prefix);
    let body = len - 1;
    if data.len() < body {
        return Err(Error::truncated("decode ILInt body", data.len(), body));
    }
    let magnitude = data
        .read_uint::<BigEndian>(body)
        .map_err(|_| Error::truncated("decode ILInt body", data.len(), body))?;
    if magnitude > u64::MAX - BASE {
        return Err(Error::Overflow);
    }
    let v = magnitude + BASE;
    if size(v) != len {
        return Err(Error::NonCanonicalEncoding {
            value: v,
            expected: size(v),
            actual: len,
        });
    }
    *buf = data;
    Ok(v)
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::Rng;

    fn edge_cases() -> Vec<(u64, usize)> {
        let mut cases = vec![(0, 1), (1, 1), (BASE - 1, 1), (BASE, 2)];
        for bytes in 1..8u32 {
            let top = BASE + (1u64 << (8 * bytes)) - 1;
            cases.push((top, bytes as usize + 1));
            cases.push((top + 1, bytes as usize + 2));
        }
        cases.push((u64::MAX - 1, 9));
        cases.push((u64::MAX, 9));
        cases
    }

    #[test]
    fn sizes() {
        assert_eq!(size(247), 1);
        assert_eq!(size(248), 2);
        assert_eq!(size(247 + 255), 2);
        assert_eq!(size(247 + 256), 2);
        assert_eq!(size(248 + 256), 3);
        assert_eq!(size(0xFFFF_FFFF_FFFF_FFFF), 9);
        for (v, len) in edge_cases() {
            assert_eq!(size(v), len, "size of {}", v);
        }
    }

    #[test]
    fn encoding() {
        let mut out = [0u8; MAX_SIZE];
        assert_eq!(encode(0, &mut out).unwrap(), 1);
        assert_eq!(out[0], 0);
        assert_eq!(encode(247, &mut out).unwrap(), 1);
        assert_eq!(out[0], 0xF7);
        assert_eq!(encode(248, &mut out).unwrap(), 2);
        assert_eq!(&out[..2], &[0xF8, 0x00]);
        assert_eq!(encode(0x1_0000 + 248, &mut out).unwrap(), 4);
        assert_eq!(&out[..4], &[0xFA, 0x01, 0x00, 0x00]);
        assert_eq!(encode(u64::MAX, &mut out).unwrap(), 9);
        assert_eq!(
            &out[..],
            &[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x07]
        );
    }

    #[test]
    fn encode_short_buffer() {
        let mut out = [0xAAu8; 2];
        assert!(matches!(
            encode(0x1_0000, &mut out),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(out, [0xAA, 0xAA], "nothing should be written");
        let mut empty: [u8; 0] = [];
        assert!(encode(1, &mut empty).is_err());
    }

    #[test]
    fn encode_vec_matches_encode() {
        let mut buf = Vec::new();
        let mut expected = Vec::new();
        for (v, len) in edge_cases() {
            let mut out = [0u8; MAX_SIZE];
            assert_eq!(encode(v, &mut out).unwrap(), len);
            expected.extend_from_slice(&out[..len]);
            encode_vec(v, &mut buf);
            assert_eq!(buf, expected, "value {}", v);
        }
    }

    #[test]
    fn roundtrip_edges() {
        for (v, len) in edge_cases() {
            let mut buf = Vec::new();
            encode_vec(v, &mut buf);
            assert_eq!(buf.len(), len);
            assert_eq!(encoded_len(buf[0]), len);
            assert_eq!(decode(&buf).unwrap(), (v, len), "value {}", v);
        }
    }

    #[test]
    fn roundtrip_shifts() {
        for s in 0..64 {
            let v = 1u64 << s;
            let mut buf = Vec::new();
            encode_vec(v, &mut buf);
            assert_eq!(decode(&buf).unwrap(), (v, size(v)));
        }
    }

    #[test]
    fn roundtrip_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let bits = rng.gen_range(0..64);
            let v: u64 = rng.gen::<u64>() >> bits;
            let mut buf = Vec::new();
            encode_vec(v, &mut buf);
            assert_eq!(decode(&buf).unwrap(), (v, size(v)));
        }
    }

    #[test]
    fn decode_ignores_trailing_bytes() {
        let buf = [0xF8, 0x01, 0xAB, 0xCD];
        assert_eq!(decode(&buf).unwrap(), (249, 2));
    }

    #[test]
    fn empty() {
        assert!(matches!(decode(&[]), Err(Error::TruncatedInput { .. })));
    }

    #[test]
    fn not_enough_bytes() {
        let mut buf = Vec::new();
        encode_vec(u64::MAX, &mut buf);
        for cut in 1..buf.len() {
            assert!(
                matches!(decode(&buf[..cut]), Err(Error::TruncatedInput { .. })),
                "cut at {} should fail",
                cut
            );
        }
    }

    #[test]
    fn overflow() {
        let buf = [0xFF; 9];
        assert_eq!(decode(&buf), Err(Error::Overflow));
        // The largest magnitude that still fits is u64::MAX itself.
        let mut buf = vec![0xFF];
        buf.extend_from_slice(&(u64::MAX - BASE).to_be_bytes());
        assert_eq!(decode(&buf).unwrap(), (u64::MAX, 9));
    }

    #[test]
    fn not_shortest() {
        // A 0xF8 prefix adds 248 to the byte after it, so no value below 248 has a two-byte form.
        // [0xF8, v] is the shortest encoding of v + 248, never a longer spelling of v.
        for v in 0..BASE {
            let (decoded, len) = decode(&[0xF8, v as u8]).unwrap();
            assert_ne!(decoded, v);
            assert_eq!((decoded, len), (v + BASE, 2));
        }
        // 253 stretched to three bytes.
        let err = decode(&[0xF9, 0x00, 0x05]).unwrap_err();
        assert_eq!(
            err,
            Error::NonCanonicalEncoding {
                value: 253,
                expected: 2,
                actual: 3
            }
        );
        // 249 stretched to nine bytes.
        let mut buf = vec![0xFF];
        buf.extend_from_slice(&1u64.to_be_bytes());
        assert!(matches!(
            decode(&buf),
            Err(Error::NonCanonicalEncoding { value: 249, .. })
        ));
    }

    #[test]
    fn cursor_only_advances_on_success() {
        let data = [0xF9, 0x00, 0x05, 0x01];
        let mut cursor = &data[..];
        assert!(read(&mut cursor).is_err());
        assert_eq!(cursor.len(), data.len());

        let data = [0xF8, 0x01, 0x07];
        let mut cursor = &data[..];
        assert_eq!(read(&mut cursor).unwrap(), 249);
        assert_eq!(read(&mut cursor).unwrap(), 7);
        assert!(cursor.is_empty());
    }
}
