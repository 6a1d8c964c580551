use crate::buffer::TagBuffer;
use crate::error::Result;
use crate::factory::DecodeContext;
use crate::id::TagId;
use crate::tag::Tag;

/// Opaque tag holding its value bytes as-is.
///
/// A lenient factory builds these for ids it doesn't recognize, so unknown data survives a
/// decode/encode cycle byte for byte.
#[derive(Clone, Debug, PartialEq)]
pub struct RawTag {
    id: TagId,
    value: TagBuffer,
}

impl RawTag {
    pub fn new(id: TagId, secure: bool) -> Self {
        Self {
            id,
            value: TagBuffer::new(secure),
        }
    }

    pub fn from_bytes(id: TagId, value: &[u8]) -> Self {
        Self {
            id,
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

impl Tag for RawTag {
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
