//! Binary layout of a student file.
//!
//! All integers are little-endian.
//!
//! ```text
//! magic    4 bytes  "RCLL"
//! version  u16
//! count    u32
//! record*  count times:
//!     roll_number  i32
//!     grade        u32   Unicode scalar value
//!     name_len     u32
//!     name         name_len bytes of UTF-8
//! ```

use crate::{FormatError, StudentRecord};

pub const MAGIC: [u8; 4] = *b"RCLL";
pub const FORMAT_VERSION: u16 = 1;

/// Size of magic + version + record count.
pub const HEADER_SIZE: usize = MAGIC.len() + 2 + 4;

/// Encodes the full record sequence, header included.
pub fn encode(records: &[StudentRecord]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(
        HEADER_SIZE
            + records
                .iter()
                .map(|record| 12 + record.name().len())
                .sum::<usize>(),
    );

    bytes.extend_from_slice(&MAGIC);
    bytes.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
    bytes.extend_from_slice(&(records.len() as u32).to_le_bytes());

    for record in records {
        bytes.extend_from_slice(&record.roll_number().to_le_bytes());
        bytes.extend_from_slice(&u32::from(record.grade()).to_le_bytes());

        let name_bytes = record.name().as_bytes();
        bytes.extend_from_slice(&(name_bytes.len() as u32).to_le_bytes());
        bytes.extend_from_slice(name_bytes);
    }

    bytes
}

/// Decodes a blob produced by [`encode`].
///
/// The whole input must be consumed; anything after the last record is
/// rejected.
pub fn decode(bytes: &[u8]) -> Result<Vec<StudentRecord>, FormatError> {
    let mut reader = Reader::new(bytes);

    let magic = reader.take(MAGIC.len())?;
    if magic != MAGIC {
        return Err(FormatError::BadMagic {
            found: magic.to_vec(),
        });
    }

    let version = u16::from_le_bytes(reader.array()?);
    if version != FORMAT_VERSION {
        return Err(FormatError::UnsupportedVersion(version));
    }

    let count = u32::from_le_bytes(reader.array()?);

    // The count comes from the file, so don't trust it for allocation.
    let mut records = Vec::new();
    for _ in 0..count {
        let roll_number = i32::from_le_bytes(reader.array()?);

        let grade_offset = reader.offset;
        let grade_value = u32::from_le_bytes(reader.array()?);
        let grade = char::from_u32(grade_value).ok_or(FormatError::InvalidGrade {
            offset: grade_offset,
            value: grade_value,
        })?;

        let name_len = u32::from_le_bytes(reader.array()?) as usize;
        let name_offset = reader.offset;
        let name = std::str::from_utf8(reader.take(name_len)?)
            .map_err(|_| FormatError::InvalidName {
                offset: name_offset,
            })?;

        records.push(StudentRecord::new(name, roll_number, grade));
    }

    match reader.remaining() {
        0 => Ok(records),
        extra => Err(FormatError::TrailingBytes(extra)),
    }
}

/// Cursor over the input that reports truncation with the failing offset.
struct Reader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], FormatError> {
        if self.remaining() < len {
            return Err(FormatError::Truncated {
                offset: self.offset,
                needed: len,
            });
        }

        let bytes = self.bytes;
        let slice = &bytes[self.offset..self.offset + len];
        self.offset += len;
        Ok(slice)
    }

    fn array<const N: usize>(&mut self) -> Result<[u8; N], FormatError> {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.take(N)?);
        Ok(buf)
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<StudentRecord> {
        vec![
            StudentRecord::new("Alice", 1, 'A'),
            StudentRecord::new("Bob", 2, 'B'),
            StudentRecord::new("", -3, 'é'),
        ]
    }

    #[test]
    fn test_encode_header() {
        let bytes = encode(&[]);

        assert_eq!(bytes.len(), HEADER_SIZE);
        assert_eq!(&bytes[0..4], b"RCLL");
        assert_eq!(&bytes[4..6], &1u16.to_le_bytes());
        assert_eq!(&bytes[6..10], &0u32.to_le_bytes());
    }

    #[test]
    fn test_encode_record_layout() {
        let bytes = encode(&[StudentRecord::new("Bob", 2, 'B')]);
        let record = &bytes[HEADER_SIZE..];

        assert_eq!(&record[0..4], &2i32.to_le_bytes());
        assert_eq!(&record[4..8], &('B' as u32).to_le_bytes());
        assert_eq!(&record[8..12], &3u32.to_le_bytes());
        assert_eq!(&record[12..], b"Bob");
    }

    #[test]
    fn test_decode_restores_sequence() {
        let records = sample();
        let decoded = decode(&encode(&records)).expect("Blob to decode");
        assert_eq!(decoded, records);
    }

    #[test]
    fn test_decode_empty_sequence() {
        assert_eq!(decode(&encode(&[])), Ok(vec![]));
    }

    #[test]
    fn test_decode_bad_magic() {
        let mut bytes = encode(&sample());
        bytes[0] = b'X';

        assert_eq!(
            decode(&bytes),
            Err(FormatError::BadMagic {
                found: b"XCLL".to_vec()
            })
        );
    }

    #[test]
    fn test_decode_unsupported_version() {
        let mut bytes = encode(&sample());
        bytes[4..6].copy_from_slice(&7u16.to_le_bytes());

        assert_eq!(decode(&bytes), Err(FormatError::UnsupportedVersion(7)));
    }

    #[test]
    fn test_decode_empty_input() {
        assert_eq!(
            decode(&[]),
            Err(FormatError::Truncated {
                offset: 0,
                needed: 4
            })
        );
    }

    #[test]
    fn test_decode_every_truncation_fails() {
        let bytes = encode(&sample());

        for len in 0..bytes.len() {
            let result = decode(&bytes[..len]);
            assert!(
                matches!(result, Err(FormatError::Truncated { .. })),
                "Expected truncation error at length {len}, got {result:?}"
            );
        }
    }

    #[test]
    fn test_decode_count_larger_than_data() {
        let mut bytes = encode(&[StudentRecord::new("Alice", 1, 'A')]);
        bytes[6..10].copy_from_slice(&u32::MAX.to_le_bytes());

        assert!(matches!(
            decode(&bytes),
            Err(FormatError::Truncated { .. })
        ));
    }

    #[test]
    fn test_decode_invalid_grade() {
        let mut bytes = encode(&[StudentRecord::new("Alice", 1, 'A')]);
        let grade_offset = HEADER_SIZE + 4;
        bytes[grade_offset..grade_offset + 4].copy_from_slice(&0xD800u32.to_le_bytes());

        assert_eq!(
            decode(&bytes),
            Err(FormatError::InvalidGrade {
                offset: grade_offset,
                value: 0xD800
            })
        );
    }

    #[test]
    fn test_decode_invalid_name() {
        let mut bytes = encode(&[StudentRecord::new("Al", 1, 'A')]);
        let name_offset = HEADER_SIZE + 12;
        bytes[name_offset] = 0xFF;

        assert_eq!(
            decode(&bytes),
            Err(FormatError::InvalidName {
                offset: name_offset
            })
        );
    }

    #[test]
    fn test_decode_trailing_bytes() {
        let mut bytes = encode(&sample());
        bytes.extend_from_slice(b"junk");

        assert_eq!(decode(&bytes), Err(FormatError::TrailingBytes(4)));
    }
}
