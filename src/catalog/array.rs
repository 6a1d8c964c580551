use std::ops::Index;

use crate::error::{Error, Result};
use crate::factory::DecodeContext;
use crate::id::*;
use crate::tag::Tag;
use crate::varint;

// A read that ran off the end of the container's value means the entries claim more bytes than
// the container declared.
fn overrun(id: TagId, declared: usize, err: Error) -> Error {
    match err {
        Error::TruncatedInput {
            actual, expected, ..
        } => Error::ValueSizeMismatch {
            id,
            expected: declared as u64,
            actual: (declared + expected.saturating_sub(actual)) as u64,
        },
        err => err,
    }
}

// Bytes left after the last counted entry.
fn check_consumed(id: TagId, declared: usize, remaining: usize) -> Result<()> {
    if remaining != 0 {
        return Err(Error::ValueSizeMismatch {
            id,
            expected: declared as u64,
            actual: (declared - remaining) as u64,
        });
    }
    Ok(())
}

fn check_room(len: usize, max_entries: Option<usize>) -> Result<()> {
    match max_entries {
        Some(max) if len >= max => Err(Error::ListFull { max: max as u64 }),
        _ => Ok(()),
    }
}

fn check_count(count: u64, max_entries: Option<usize>) -> Result<()> {
    match max_entries {
        Some(max) if count > max as u64 => Err(Error::ListFull { max: max as u64 }),
        _ => Ok(()),
    }
}

fn check_insert(index: usize, len: usize) -> Result<()> {
    if index > len {
        return Err(Error::InvalidArgument(format!(
            "insert position {} is past the end of a list of {}",
            index, len
        )));
    }
    Ok(())
}

/// Counted sequence of ILInt-encoded integers.
///
/// The value is the entry count as an ILInt, followed by each entry as an ILInt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ILIntArrayTag {
    id: TagId,
    values: Vec<u64>,
    max_entries: Option<usize>,
}

impl ILIntArrayTag {
    pub fn new() -> Self {
        Self::with_id(TAG_ILINT64_ARRAY)
    }

    pub fn with_id(id: TagId) -> Self {
        Self {
            id,
            values: Vec::new(),
            max_entries: None,
        }
    }

    pub fn max_entries(&self) -> Option<usize> {
        self.max_entries
    }

    /// Limit how many entries the array will hold. Existing entries are kept even if there are
    /// already more than `max`.
    pub fn set_max_entries(&mut self, max: Option<usize>) {
        self.max_entries = max;
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn push(&mut self, value: u64) -> Result<()> {
        check_room(self.values.len(), self.max_entries)?;
        self.values.push(value);
        Ok(())
    }

    pub fn insert(&mut self, index: usize, value: u64) -> Result<()> {
        check_room(self.values.len(), self.max_entries)?;
        check_insert(index, self.values.len())?;
        self.values.insert(index, value);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Option<u64> {
        if index < self.values.len() {
            Some(self.values.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn get(&self, index: usize) -> Option<u64> {
        self.values.get(index).copied()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut u64> {
        self.values.get_mut(index)
    }

    /// Replace the entry at `index`.
    pub fn set(&mut self, index: usize, value: u64) -> Result<()> {
        let len = self.values.len();
        let slot = self.values.get_mut(index).ok_or_else(|| {
            Error::InvalidArgument(format!("index {} out of range for {} entries", index, len))
        })?;
        *slot = value;
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u64> {
        self.values.iter()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.values
    }
}

impl Default for ILIntArrayTag {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<u64>> for ILIntArrayTag {
    fn from(values: Vec<u64>) -> Self {
        Self {
            values,
            ..Self::new()
        }
    }
}

impl Index<usize> for ILIntArrayTag {
    type Output = u64;

    fn index(&self, index: usize) -> &u64 {
        &self.values[index]
    }
}

impl<'a> IntoIterator for &'a ILIntArrayTag {
    type Item = &'a u64;
    type IntoIter = std::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl Tag for ILIntArrayTag {
    fn id(&self) -> TagId {
        self.id
    }

    fn value_size(&self) -> u64 {
        let count = varint::size(self.values.len() as u64) as u64;
        count + self.values.iter().map(|v| varint::size(*v) as u64).sum::<u64>()
    }

    fn serialize_value(&self, buf: &mut Vec<u8>) {
        varint::encode_vec(self.values.len() as u64, buf);
        for v in self.values.iter() {
            varint::encode_vec(*v, buf);
        }
    }

    fn deserialize_value(&mut self, _: &mut DecodeContext<'_>, value: &[u8]) -> Result<()> {
        let mut cursor = value;
        let count = varint::read(&mut cursor).map_err(|e| overrun(self.id, value.len(), e))?;
        check_count(count, self.max_entries)?;
        // Every entry takes at least one byte, so the count is bounded by the input.
        let mut values = Vec::new();
        for _ in 0..count {
            let v = varint::read(&mut cursor).map_err(|e| overrun(self.id, value.len(), e))?;
            values.push(v);
        }
        check_consumed(self.id, value.len(), cursor.len())?;
        self.values = values;
        Ok(())
    }

    crate::tag_any!();
}

// Both tag lists share storage and the editing API, and differ only in how they are encoded.
macro_rules! tag_list {
    ($(#[$attr:meta])* $name:ident, $default_id:expr) => {
        $(#[$attr])*
        #[derive(Debug, PartialEq)]
        pub struct $name {
            id: TagId,
            tags: Vec<Box<dyn Tag>>,
            max_entries: Option<usize>,
        }

        impl $name {
            pub fn new() -> Self {
                Self::with_id($default_id)
            }

            pub fn with_id(id: TagId) -> Self {
                Self {
                    id,
                    tags: Vec::new(),
                    max_entries: None,
                }
            }

            pub fn max_entries(&self) -> Option<usize> {
                self.max_entries
            }

            /// Limit how many entries the list will hold. Existing entries are kept even if
            /// there are already more than `max`.
            pub fn set_max_entries(&mut self, max: Option<usize>) {
                self.max_entries = max;
            }

            pub fn len(&self) -> usize {
                self.tags.len()
            }

            pub fn is_empty(&self) -> bool {
                self.tags.is_empty()
            }

            pub fn push(&mut self, tag: Box<dyn Tag>) -> Result<()> {
                check_room(self.tags.len(), self.max_entries)?;
                self.tags.push(tag);
                Ok(())
            }

            pub fn insert(&mut self, index: usize, tag: Box<dyn Tag>) -> Result<()> {
                check_room(self.tags.len(), self.max_entries)?;
                check_insert(index, self.tags.len())?;
                self.tags.insert(index, tag);
                Ok(())
            }

            /// Take the entry at `index` out of the list, handing ownership back to the caller.
            pub fn remove(&mut self, index: usize) -> Option<Box<dyn Tag>> {
                if index < self.tags.len() {
                    Some(self.tags.remove(index))
                } else {
                    None
                }
            }

            pub fn clear(&mut self) {
                self.tags.clear();
            }

            pub fn get(&self, index: usize) -> Option<&(dyn Tag + 'static)> {
                self.tags.get(index).map(|t| &**t)
            }

            pub fn get_mut(&mut self, index: usize) -> Option<&mut (dyn Tag + 'static)> {
                self.tags.get_mut(index).map(|t| &mut **t)
            }

            /// Replace the entry at `index`, returning the old one.
            pub fn set(&mut self, index: usize, tag: Box<dyn Tag>) -> Result<Box<dyn Tag>> {
                let len = self.tags.len();
                let slot = self.tags.get_mut(index).ok_or_else(|| {
                    Error::InvalidArgument(format!(
                        "index {} out of range for {} entries",
                        index, len
                    ))
                })?;
                Ok(std::mem::replace(slot, tag))
            }

            pub fn iter(&self) -> impl Iterator<Item = &(dyn Tag + 'static)> + '_ {
                self.tags.iter().map(|t| &**t)
            }

            fn entries_size(&self) -> u64 {
                self.tags.iter().map(|t| t.encoded_size()).sum()
            }

            fn serialize_entries(&self, buf: &mut Vec<u8>) {
                for tag in self.tags.iter() {
                    tag.serialize(buf);
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<Vec<Box<dyn Tag>>> for $name {
            fn from(tags: Vec<Box<dyn Tag>>) -> Self {
                Self {
                    tags,
                    ..Self::new()
                }
            }
        }

        impl Index<usize> for $name {
            type Output = dyn Tag;

            fn index(&self, index: usize) -> &(dyn Tag + 'static) {
                &*self.tags[index]
            }
        }
    };
}

tag_list!(
    /// Counted sequence of complete tags.
    ///
    /// The value is the entry count as an ILInt, followed by each entry as a full tag. Entries
    /// are decoded through the factory in use, so they may be of any type it knows.
    TagArrayTag,
    TAG_ILTAG_ARRAY
);

tag_list!(
    /// Sequence of complete tags, packed back to back with no count.
    ///
    /// Entries are read until the value is used up.
    TagSequenceTag,
    TAG_ILTAG_SEQ
);

impl Tag for TagArrayTag {
    fn id(&self) -> TagId {
        self.id
    }

    fn value_size(&self) -> u64 {
        varint::size(self.tags.len() as u64) as u64 + self.entries_size()
    }

    fn serialize_value(&self, buf: &mut Vec<u8>) {
        varint::encode_vec(self.tags.len() as u64, buf);
        self.serialize_entries(buf);
    }

    fn deserialize_value(&mut self, ctx: &mut DecodeContext<'_>, value: &[u8]) -> Result<()> {
        let mut cursor = value;
        let count = varint::read(&mut cursor).map_err(|e| overrun(self.id, value.len(), e))?;
        check_count(count, self.max_entries)?;
        let mut tags = Vec::new();
        for _ in 0..count {
            let tag = ctx
                .deserialize(&mut cursor)
                .map_err(|e| overrun(self.id, value.len(), e))?;
            tags.push(tag);
        }
        check_consumed(self.id, value.len(), cursor.len())?;
        self.tags = tags;
        Ok(())
    }

    crate::tag_any!();
}

impl Tag for TagSequenceTag {
    fn id(&self) -> TagId {
        self.id
    }

    fn value_size(&self) -> u64 {
        self.entries_size()
    }

    fn serialize_value(&self, buf: &mut Vec<u8>) {
        self.serialize_entries(buf);
    }

    fn deserialize_value(&mut self, ctx: &mut DecodeContext<'_>, value: &[u8]) -> Result<()> {
        let mut tags = Vec::new();
        let mut cursor = value;
        while !cursor.is_empty() {
            check_room(tags.len(), self.max_entries)?;
            let tag = ctx
                .deserialize(&mut cursor)
                .map_err(|e| overrun(self.id, value.len(), e))?;
            tags.push(tag);
        }
        self.tags = tags;
        Ok(())
    }

    crate::tag_any!();
}
