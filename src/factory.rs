//! Turning ids back into tags.
//!
//! Decoding a tag walks through: read the id, read the length if the id is explicit, create an
//! empty tag for the id, take the value bytes, and let the tag parse them. Container tags come back
//! through the same [`DecodeContext`] for each child. Any failing step fails the whole decode, and
//! nothing decoded so far is kept.

use tracing::{debug, trace};

use crate::catalog::*;
use crate::config::FactoryConfig;
use crate::error::{Error, Result};
use crate::id::{self, StandardId, TagId, TAG_ILINT64};
use crate::raw::RawTag;
use crate::tag::Tag;
use crate::varint;

/// Maps ids to empty tags ready to be decoded into.
///
/// Applications with their own tag types implement this trait, handle their ids in
/// [`TagFactory::create`], and hand everything else to [`create_standard`].
pub trait TagFactory {
    fn config(&self) -> &FactoryConfig;

    /// Build an empty tag for `id`, or `None` if this factory refuses the id.
    fn create(&self, id: TagId) -> Option<Box<dyn Tag>>;

    fn secure(&self) -> bool {
        self.config().secure
    }

    fn strict(&self) -> bool {
        self.config().strict
    }

    /// Decode one complete tag off the front of `data`. The cursor only advances on success.
    fn deserialize(&self, data: &mut &[u8]) -> Result<Box<dyn Tag>>
    where
        Self: Sized,
    {
        DecodeContext::new(self).deserialize(data)
    }

    /// Decode one complete tag off the front of `data` into an existing tag with the same id.
    fn deserialize_into(&self, data: &mut &[u8], tag: &mut dyn Tag) -> Result<()>
    where
        Self: Sized,
    {
        DecodeContext::new(self).deserialize_into(data, tag)
    }
}

/// State carried through one recursive decode: the factory in use and the current nesting depth.
pub struct DecodeContext<'f> {
    factory: &'f dyn TagFactory,
    depth: usize,
}

impl<'f> DecodeContext<'f> {
    pub fn new(factory: &'f dyn TagFactory) -> Self {
        Self { factory, depth: 0 }
    }

    pub fn factory(&self) -> &'f dyn TagFactory {
        self.factory
    }

    /// Number of tags whose values are being decoded right now.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Decode one complete tag off the front of `data`. The cursor only advances on success.
    pub fn deserialize(&mut self, data: &mut &[u8]) -> Result<Box<dyn Tag>> {
        let mut cursor = *data;
        let (id, len) = extract_tag_header(&mut cursor)?;
        trace!(id, len, depth = self.depth, "decoding tag");
        let mut tag = self.factory.create(id).ok_or(Error::UnknownTagId(id))?;
        let value = take_value(&mut cursor, len)?;
        self.deserialize_value(&mut *tag, value)?;
        *data = cursor;
        Ok(tag)
    }

    /// Decode one complete tag off the front of `data` into `tag`, which must have the same id.
    pub fn deserialize_into(&mut self, data: &mut &[u8], tag: &mut dyn Tag) -> Result<()> {
        let mut cursor = *data;
        let (id, len) = extract_tag_header(&mut cursor)?;
        if id != tag.id() {
            return Err(Error::InvalidArgument(format!(
                "expected tag id {}, found {}",
                tag.id(),
                id
            )));
        }
        let value = take_value(&mut cursor, len)?;
        self.deserialize_value(tag, value)?;
        *data = cursor;
        Ok(())
    }

    fn deserialize_value(&mut self, tag: &mut dyn Tag, value: &[u8]) -> Result<()> {
        let max_depth = self.factory.config().max_depth;
        if self.depth >= max_depth {
            return Err(Error::DepthLimit(max_depth));
        }
        self.depth += 1;
        let result = tag.deserialize_value(self, value);
        self.depth -= 1;
        if let Err(ref e) = result {
            debug!(id = tag.id(), depth = self.depth, error = %e, "tag value rejected");
        }
        result
    }
}

/// Read an id and the size of the value that follows it.
///
/// Explicit tags carry the size on the wire. Implicit tags get it from the id, or for
/// [`TAG_ILINT64`] from the first byte of the value, which stays unread.
pub fn extract_tag_header(data: &mut &[u8]) -> Result<(TagId, u64)> {
    let mut cursor = *data;
    let id = varint::read(&mut cursor)?;
    let len = if id::is_implicit(id) {
        match id::implicit_value_size(id) {
            Some(len) => len,
            None if id == TAG_ILINT64 => match cursor.first() {
                Some(prefix) => varint::encoded_len(*prefix) as u64,
                None => return Err(Error::truncated("decode ILInt64 tag", 0, 1)),
            },
            None => return Err(Error::UnknownTagId(id)),
        }
    } else {
        varint::read(&mut cursor)?
    };
    *data = cursor;
    Ok((id, len))
}

fn take_value<'a>(data: &mut &'a [u8], len: u64) -> Result<&'a [u8]> {
    if len > data.len() as u64 {
        return Err(Error::truncated(
            "read tag value",
            data.len(),
            usize::try_from(len).unwrap_or(usize::MAX),
        ));
    }
    let (value, rest) = data.split_at(len as usize);
    *data = rest;
    Ok(value)
}

/// The factory for every standard tag type.
///
/// Unknown ids become [`RawTag`]s, or are refused in strict mode.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StandardTagFactory {
    config: FactoryConfig,
}

impl StandardTagFactory {
    pub fn new(secure: bool, strict: bool) -> Self {
        Self::with_config(FactoryConfig::new(secure, strict))
    }

    pub fn with_config(config: FactoryConfig) -> Self {
        Self { config }
    }

    pub fn set_secure(&mut self, secure: bool) {
        self.config.secure = secure;
    }

    pub fn set_strict(&mut self, strict: bool) {
        self.config.strict = strict;
    }

    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.config.max_depth = max_depth;
    }
}

impl TagFactory for StandardTagFactory {
    fn config(&self) -> &FactoryConfig {
        &self.config
    }

    fn create(&self, id: TagId) -> Option<Box<dyn Tag>> {
        create_standard(&self.config, id)
    }
}

/// Build an empty standard tag for `id`, following the secure and strict settings in `config`.
pub fn create_standard(config: &FactoryConfig, id: TagId) -> Option<Box<dyn Tag>> {
    match StandardId::from_id(id) {
        Some(kind) => Some(create_catalog(kind, config.secure)),
        None if config.strict => {
            debug!(id, "unknown tag id refused in strict mode");
            None
        }
        None => {
            debug!(id, "unknown tag id, keeping raw bytes");
            Some(Box::new(RawTag::new(id, config.secure)))
        }
    }
}

fn create_catalog(kind: StandardId, secure: bool) -> Box<dyn Tag> {
    match kind {
        StandardId::Null => Box::new(NullTag::default()),
        StandardId::Bool => Box::new(BoolTag::default()),
        StandardId::Int8 => Box::new(Int8Tag::default()),
        StandardId::UInt8 => Box::new(UInt8Tag::default()),
        StandardId::Int16 => Box::new(Int16Tag::default()),
        StandardId::UInt16 => Box::new(UInt16Tag::default()),
        StandardId::Int32 => Box::new(Int32Tag::default()),
        StandardId::UInt32 => Box::new(UInt32Tag::default()),
        StandardId::Int64 => Box::new(Int64Tag::default()),
        StandardId::UInt64 => Box::new(UInt64Tag::default()),
        StandardId::ILInt64 => Box::new(ILIntTag::default()),
        StandardId::Binary32 => Box::new(Binary32Tag::default()),
        StandardId::Binary64 => Box::new(Binary64Tag::default()),
        StandardId::Binary128 => Box::new(Binary128Tag::default()),
        StandardId::ByteArray => Box::new(ByteArrayTag::new(secure)),
        StandardId::String => Box::new(StringTag::default()),
        StandardId::BigInt => Box::new(BigIntTag::new(secure)),
        StandardId::BigDecimal => Box::new(BigDecimalTag::new(secure)),
        StandardId::ILInt64Array => Box::new(ILIntArrayTag::default()),
        StandardId::TagArray => Box::new(TagArrayTag::default()),
        StandardId::TagSequence => Box::new(TagSequenceTag::default()),
    }
}
