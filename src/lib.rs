//! iltag is a compact, self-describing binary encoding built from tags.
//!
//! Every tag is an id plus a value. Ids and lengths are written as ILInts, a variable-length
//! unsigned integer that keeps small numbers to a single byte. The crate provides:
//!
//! - The ILInt codec, in [`varint`]
//! - The [`Tag`] trait, implemented by every tag type, including your own
//! - A catalog of standard tags: integers, floats, strings, byte arrays, big numbers, arrays
//!     of ILInts or of other tags, and tag sequences
//! - Factories, which turn ids back into tags while decoding. The [`StandardTagFactory`] knows
//!     the whole catalog, and custom factories can extend it with application ids
//! - Lenient decoding, where unknown ids are kept as [`RawTag`]s and survive a round trip
//!     untouched, or strict decoding, where they are rejected
//! - A secure mode, where raw, byte-array and big-number tags wipe their storage when dropped
//!
//! The byte layout is described in [`format`].
//!
//! # Example
//!
//! ```
//! use iltag::{Int32Tag, StandardTagFactory, StringTag, Tag, TagArrayTag, TagFactory};
//!
//! let mut array = TagArrayTag::new();
//! array.push(Box::new(Int32Tag::new(-5))).unwrap();
//! array.push(Box::new(StringTag::new("ok"))).unwrap();
//! let data = array.to_vec();
//!
//! let factory = StandardTagFactory::default();
//! let tag = factory.deserialize(&mut &data[..]).unwrap();
//! let array = tag.downcast_ref::<TagArrayTag>().unwrap();
//! assert_eq!(array[1].downcast_ref::<StringTag>().unwrap().value(), "ok");
//! ```

mod buffer;
mod catalog;
mod config;
mod error;
mod factory;
mod raw;
mod tag;

pub mod format;
pub mod id;
pub mod varint;

pub use self::buffer::TagBuffer;
pub use self::catalog::*;
pub use self::config::FactoryConfig;
pub use self::error::{Error, Result};
pub use self::factory::{
    create_standard, extract_tag_header, DecodeContext, StandardTagFactory, TagFactory,
};
pub use self::id::{StandardId, TagId};
pub use self::raw::RawTag;
pub use self::tag::{same_class, same_id, tag_eq, Tag};

/// Default limit on how deeply containers may nest while decoding. Each tag being decoded counts
/// as one level, so a top-level array holding scalars uses two.
pub const MAX_DEPTH: usize = 100;
