use std::any::Any;
use std::fmt::Debug;

use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::factory::DecodeContext;
use crate::id::{self, TagId};
use crate::varint;

/// A self-describing value: an id fixed at construction, plus a payload that knows how to size,
/// write, and read itself.
///
/// Encoded tags are `ILInt(id)`, then `ILInt(value_size)` unless the id is implicit, then exactly
/// `value_size` bytes of value. Sizes are always recomputed from the current payload.
pub trait Tag: Debug + Any {
    fn id(&self) -> TagId;

    /// Size of the encoded value alone, without the id and length header.
    fn value_size(&self) -> u64;

    /// Append exactly [`Tag::value_size`] bytes of value to `buf`.
    fn serialize_value(&self, buf: &mut Vec<u8>);

    /// Replace the payload with one parsed from `value`, which holds the whole value and nothing
    /// else. On failure the payload must be left as it was.
    fn deserialize_value(&mut self, ctx: &mut DecodeContext<'_>, value: &[u8]) -> Result<()>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn is_implicit(&self) -> bool {
        id::is_implicit(self.id())
    }

    fn is_standard(&self) -> bool {
        id::is_standard(self.id())
    }

    /// Size of the complete encoded tag.
    fn encoded_size(&self) -> u64 {
        let value_size = self.value_size();
        let header = if self.is_implicit() {
            varint::size(self.id())
        } else {
            varint::size(self.id()) + varint::size(value_size)
        };
        header as u64 + value_size
    }

    /// Append the complete encoded tag to `buf`.
    fn serialize(&self, buf: &mut Vec<u8>) {
        varint::encode_vec(self.id(), buf);
        if !self.is_implicit() {
            varint::encode_vec(self.value_size(), buf);
        }
        let start = buf.len();
        self.serialize_value(buf);
        debug_assert_eq!((buf.len() - start) as u64, self.value_size());
    }

    /// Write the complete encoded tag at the start of `out`, returning the bytes written. Fails
    /// without writing anything if `out` can't hold [`Tag::encoded_size`] bytes.
    fn serialize_to_slice(&self, out: &mut [u8]) -> Result<usize> {
        let size = self.encoded_size();
        if size > out.len() as u64 {
            return Err(Error::InvalidArgument(format!(
                "tag {} needs {} bytes, but only {} are available",
                self.id(),
                size,
                out.len()
            )));
        }
        let mut tmp = Zeroizing::new(Vec::with_capacity(size as usize));
        self.serialize(&mut tmp);
        out[..tmp.len()].copy_from_slice(&tmp);
        Ok(tmp.len())
    }

    fn to_vec(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_size() as usize);
        self.serialize(&mut buf);
        buf
    }
}

/// Fills in the `Any` accessors of a [`Tag`] implementation.
#[macro_export]
macro_rules! tag_any {
    () => {
        fn as_any(&self) -> &dyn ::std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
            self
        }
    };
}

impl<'a> dyn Tag + 'a {
    pub fn is<T: Tag>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Tag>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Tag>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}

impl<'a> PartialEq for dyn Tag + 'a {
    fn eq(&self, other: &Self) -> bool {
        tag_eq(self, other)
    }
}

pub fn same_id(a: &dyn Tag, b: &dyn Tag) -> bool {
    a.id() == b.id()
}

/// True if both tags are the same Rust type.
pub fn same_class(a: &dyn Tag, b: &dyn Tag) -> bool {
    a.as_any().type_id() == b.as_any().type_id()
}

/// True if both tags are the same type, with the same id, and encode to the same bytes.
pub fn tag_eq(a: &dyn Tag, b: &dyn Tag) -> bool {
    if !same_id(a, b) || !same_class(a, b) || a.value_size() != b.value_size() {
        return false;
    }
    let left = Zeroizing::new(a.to_vec());
    let right = Zeroizing::new(b.to_vec());
    *left == *right
}

/// Check that a fixed-width value got exactly `N` bytes.
pub(crate) fn fixed_value<const N: usize>(id: TagId, value: &[u8]) -> Result<[u8; N]> {
    value.try_into().map_err(|_| Error::ValueSizeMismatch {
        id,
        expected: N as u64,
        actual: value.len() as u64,
    })
}
