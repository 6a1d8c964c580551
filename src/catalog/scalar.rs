use crate::error::{Error, Result};
use crate::factory::DecodeContext;
use crate::id::*;
use crate::tag::{fixed_value, Tag};
use crate::varint;

/// Tag with no value at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NullTag {
    id: TagId,
}

impl NullTag {
    pub fn with_id(id: TagId) -> Self {
        Self { id }
    }
}

impl Default for NullTag {
    fn default() -> Self {
        Self::with_id(TAG_NULL)
    }
}

impl Tag for NullTag {
    fn id(&self) -> TagId {
        self.id
    }

    fn value_size(&self) -> u64 {
        0
    }

    fn serialize_value(&self, _: &mut Vec<u8>) {}

    fn deserialize_value(&mut self, _: &mut DecodeContext<'_>, value: &[u8]) -> Result<()> {
        fixed_value::<0>(self.id, value)?;
        Ok(())
    }

    crate::tag_any!();
}

/// Boolean tag. Encoded as a single byte, 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoolTag {
    id: TagId,
    value: bool,
}

impl BoolTag {
    pub fn new(value: bool) -> Self {
        Self::with_id(TAG_BOOL, value)
    }

    pub fn with_id(id: TagId, value: bool) -> Self {
        Self { id, value }
    }

    pub fn value(&self) -> bool {
        self.value
    }

    pub fn set_value(&mut self, value: bool) {
        self.value = value;
    }
}

impl Default for BoolTag {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Tag for BoolTag {
    fn id(&self) -> TagId {
        self.id
    }

    fn value_size(&self) -> u64 {
        1
    }

    fn serialize_value(&self, buf: &mut Vec<u8>) {
        buf.push(self.value as u8);
    }

    fn deserialize_value(&mut self, _: &mut DecodeContext<'_>, value: &[u8]) -> Result<()> {
        self.value = match fixed_value::<1>(self.id, value)? {
            [0] => false,
            [1] => true,
            [b] => {
                return Err(Error::invalid_value(
                    self.id,
                    format!("boolean byte must be 0 or 1, got {}", b),
                ))
            }
        };
        Ok(())
    }

    crate::tag_any!();
}

// Fixed-width numbers, stored big-endian.
macro_rules! number_tag {
    ($(#[$meta:meta])* $name:ident, $ty:ty, $id:expr, $size:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq)]
        pub struct $name {
            id: TagId,
            value: $ty,
        }

        impl $name {
            pub fn new(value: $ty) -> Self {
                Self::with_id($id, value)
            }

            pub fn with_id(id: TagId, value: $ty) -> Self {
                Self { id, value }
            }

            pub fn value(&self) -> $ty {
                self.value
            }

            pub fn set_value(&mut self, value: $ty) {
                self.value = value;
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new(<$ty>::default())
            }
        }

        impl Tag for $name {
            fn id(&self) -> TagId {
                self.id
            }

            fn value_size(&self) -> u64 {
                $size
            }

            fn serialize_value(&self, buf: &mut Vec<u8>) {
                buf.extend_from_slice(&self.value.to_be_bytes());
            }

            fn deserialize_value(
                &mut self,
                _: &mut DecodeContext<'_>,
                value: &[u8],
            ) -> Result<()> {
                self.value = <$ty>::from_be_bytes(fixed_value::<$size>(self.id, value)?);
                Ok(())
            }

            crate::tag_any!();
        }
    };
}

number_tag!(Int8Tag, i8, TAG_INT8, 1);
number_tag!(UInt8Tag, u8, TAG_UINT8, 1);
number_tag!(Int16Tag, i16, TAG_INT16, 2);
number_tag!(UInt16Tag, u16, TAG_UINT16, 2);
number_tag!(Int32Tag, i32, TAG_INT32, 4);
number_tag!(UInt32Tag, u32, TAG_UINT32, 4);
number_tag!(Int64Tag, i64, TAG_INT64, 8);
number_tag!(UInt64Tag, u64, TAG_UINT64, 8);
number_tag!(
    /// IEEE 754 single precision.
    Binary32Tag,
    f32,
    TAG_BINARY32,
    4
);
number_tag!(
    /// IEEE 754 double precision.
    Binary64Tag,
    f64,
    TAG_BINARY64,
    8
);

/// 128-bit value kept as opaque bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Binary128Tag {
    id: TagId,
    value: [u8; 16],
}

impl Binary128Tag {
    pub fn new(value: [u8; 16]) -> Self {
        Self::with_id(TAG_BINARY128, value)
    }

    pub fn with_id(id: TagId, value: [u8; 16]) -> Self {
        Self { id, value }
    }

    pub fn value(&self) -> &[u8; 16] {
        &self.value
    }

    pub fn set_value(&mut self, value: [u8; 16]) {
        self.value = value;
    }
}

impl Default for Binary128Tag {
    fn default() -> Self {
        Self::new([0; 16])
    }
}

impl Tag for Binary128Tag {
    fn id(&self) -> TagId {
        self.id
    }

    fn value_size(&self) -> u64 {
        16
    }

    fn serialize_value(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.value);
    }

    fn deserialize_value(&mut self, _: &mut DecodeContext<'_>, value: &[u8]) -> Result<()> {
        self.value = fixed_value::<16>(self.id, value)?;
        Ok(())
    }

    crate::tag_any!();
}

/// Unsigned 64-bit integer stored as an ILInt, so small values stay small.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ILIntTag {
    id: TagId,
    value: u64,
}

impl ILIntTag {
    pub fn new(value: u64) -> Self {
        Self::with_id(TAG_ILINT64, value)
    }

    pub fn with_id(id: TagId, value: u64) -> Self {
        Self { id, value }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn set_value(&mut self, value: u64) {
        self.value = value;
    }
}

impl Default for ILIntTag {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Tag for ILIntTag {
    fn id(&self) -> TagId {
        self.id
    }

    fn value_size(&self) -> u64 {
        varint::size(self.value) as u64
    }

    fn serialize_value(&self, buf: &mut Vec<u8>) {
        varint::encode_vec(self.value, buf);
    }

    fn deserialize_value(&mut self, _: &mut DecodeContext<'_>, value: &[u8]) -> Result<()> {
        let (v, used) = varint::decode(value)?;
        if used != value.len() {
            return Err(Error::ValueSizeMismatch {
                id: self.id,
                expected: used as u64,
                actual: value.len() as u64,
            });
        }
        self.value = v;
        Ok(())
    }

    crate::tag_any!();
}
