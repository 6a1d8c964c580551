use byteorder::{BigEndian, ReadBytesExt};

#[cfg(feature = "bigint")]
use num_bigint::BigInt;

use crate::buffer::TagBuffer;
use crate::error::{Error, Result};
use crate::factory::DecodeContext;
use crate::id::*;
use crate::tag::Tag;

/// Arbitrary bytes.
#[derive(Clone, Debug, PartialEq)]
pub struct ByteArrayTag {
    id: TagId,
    value: TagBuffer,
}

impl ByteArrayTag {
    pub fn new(secure: bool) -> Self {
        Self::with_id(TAG_BYTE_ARRAY, secure)
    }

    pub fn with_id(id: TagId, secure: bool) -> Self {
        Self {
            id,
            value: TagBuffer::new(secure),
        }
    }

    pub fn from_bytes(value: &[u8]) -> Self {
        Self {
            id: TAG_BYTE_ARRAY,
            value: TagBuffer::from_slice(value, false),
        }
    }

    pub fn value(&self) -> &TagBuffer {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut TagBuffer {
        &mut self.value
    }

    pub fn secure(&self) -> bool {
        self.value.secure()
    }
}

impl Default for ByteArrayTag {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Tag for ByteArrayTag {
    fn id(&self) -> TagId {
        self.id
    }

    fn value_size(&self) -> u64 {
        self.value.len() as u64
    }

    fn serialize_value(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.value);
    }

    fn deserialize_value(&mut self, _: &mut DecodeContext<'_>, value: &[u8]) -> Result<()> {
        self.value.set(value);
        Ok(())
    }

    crate::tag_any!();
}

/// UTF-8 text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringTag {
    id: TagId,
    value: String,
}

impl StringTag {
    pub fn new(value: impl Into<String>) -> Self {
        Self::with_id(TAG_STRING, value)
    }

    pub fn with_id(id: TagId, value: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

impl Default for StringTag {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl Tag for StringTag {
    fn id(&self) -> TagId {
        self.id
    }

    fn value_size(&self) -> u64 {
        self.value.len() as u64
    }

    fn serialize_value(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.value.as_bytes());
    }

    fn deserialize_value(&mut self, _: &mut DecodeContext<'_>, value: &[u8]) -> Result<()> {
        let text =
            std::str::from_utf8(value).map_err(|e| Error::invalid_value(self.id, e.to_string()))?;
        self.value = text.to_owned();
        Ok(())
    }

    crate::tag_any!();
}

/// Arbitrary-precision integer, as big-endian two's-complement bytes.
///
/// The bytes are kept as-is. With the `bigint` feature they convert to and from
/// [`num_bigint::BigInt`].
#[derive(Clone, Debug, PartialEq)]
pub struct BigIntTag {
    id: TagId,
    value: TagBuffer,
}

impl BigIntTag {
    pub fn new(secure: bool) -> Self {
        Self::with_id(TAG_BINT, secure)
    }

    pub fn with_id(id: TagId, secure: bool) -> Self {
        Self {
            id,
            value: TagBuffer::new(secure),
        }
    }

    pub fn value(&self) -> &TagBuffer {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut TagBuffer {
        &mut self.value
    }

    pub fn secure(&self) -> bool {
        self.value.secure()
    }
}

#[cfg(feature = "bigint")]
impl BigIntTag {
    pub fn from_bigint(value: &BigInt) -> Self {
        let mut tag = Self::new(false);
        tag.set_bigint(value);
        tag
    }

    pub fn set_bigint(&mut self, value: &BigInt) {
        self.value.set(&value.to_signed_bytes_be());
    }

    /// The stored value as a number. An empty value reads as zero.
    pub fn to_bigint(&self) -> BigInt {
        BigInt::from_signed_bytes_be(&self.value)
    }
}

impl Default for BigIntTag {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Tag for BigIntTag {
    fn id(&self) -> TagId {
        self.id
    }

    fn value_size(&self) -> u64 {
        self.value.len() as u64
    }

    fn serialize_value(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.value);
    }

    fn deserialize_value(&mut self, _: &mut DecodeContext<'_>, value: &[u8]) -> Result<()> {
        self.value.set(value);
        Ok(())
    }

    crate::tag_any!();
}

/// Decimal number `integral * 10^-scale`.
///
/// Encoded as a big-endian `i32` scale followed by the integral part in the same form as
/// [`BigIntTag`].
#[derive(Clone, Debug, PartialEq)]
pub struct BigDecimalTag {
    id: TagId,
    scale: i32,
    integral: TagBuffer,
}

impl BigDecimalTag {
    pub fn new(secure: bool) -> Self {
        Self::with_id(TAG_BDEC, secure)
    }

    pub fn with_id(id: TagId, secure: bool) -> Self {
        Self {
            id,
            scale: 0,
            integral: TagBuffer::new(secure),
        }
    }

    pub fn scale(&self) -> i32 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: i32) {
        self.scale = scale;
    }

    pub fn integral(&self) -> &TagBuffer {
        &self.integral
    }

    pub fn integral_mut(&mut self) -> &mut TagBuffer {
        &mut self.integral
    }

    pub fn secure(&self) -> bool {
        self.integral.secure()
    }
}

#[cfg(feature = "bigint")]
impl BigDecimalTag {
    pub fn from_bigint(scale: i32, integral: &BigInt) -> Self {
        let mut tag = Self::new(false);
        tag.scale = scale;
        tag.integral.set(&integral.to_signed_bytes_be());
        tag
    }

    /// The integral part as a number. An empty integral reads as zero.
    pub fn integral_bigint(&self) -> BigInt {
        BigInt::from_signed_bytes_be(&self.integral)
    }
}

impl Default for BigDecimalTag {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Tag for BigDecimalTag {
    fn id(&self) -> TagId {
        self.id
    }

    fn value_size(&self) -> u64 {
        4 + self.integral.len() as u64
    }

    fn serialize_value(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.scale.to_be_bytes());
        buf.extend_from_slice(&self.integral);
    }

    fn deserialize_value(&mut self, _: &mut DecodeContext<'_>, value: &[u8]) -> Result<()> {
        let mut cursor = value;
        let scale = cursor
            .read_i32::<BigEndian>()
            .map_err(|_| Error::ValueSizeMismatch {
                id: self.id,
                expected: 4,
                actual: value.len() as u64,
            })?;
        self.scale = scale;
        self.integral.set(cursor);
        Ok(())
    }

    crate::tag_any!();
}
