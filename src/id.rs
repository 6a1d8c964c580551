//! Tag identifiers reserved by the format.

/// Wire identifier of a tag.
pub type TagId = u64;

/// Ids below this have a value size fixed by the id, and no length field on the wire.
pub const IMPLICIT_LIMIT: TagId = 16;

/// Ids below this are reserved for the format. Applications use ids from here up.
pub const STANDARD_LIMIT: TagId = 32;

pub const TAG_NULL: TagId = 0;
pub const TAG_BOOL: TagId = 1;
pub const TAG_INT8: TagId = 2;
pub const TAG_UINT8: TagId = 3;
pub const TAG_INT16: TagId = 4;
pub const TAG_UINT16: TagId = 5;
pub const TAG_INT32: TagId = 6;
pub const TAG_UINT32: TagId = 7;
pub const TAG_INT64: TagId = 8;
pub const TAG_UINT64: TagId = 9;
pub const TAG_ILINT64: TagId = 10;
pub const TAG_BINARY32: TagId = 11;
pub const TAG_BINARY64: TagId = 12;
pub const TAG_BINARY128: TagId = 13;
pub const TAG_BYTE_ARRAY: TagId = 16;
pub const TAG_STRING: TagId = 17;
pub const TAG_BINT: TagId = 18;
pub const TAG_BDEC: TagId = 19;
pub const TAG_ILINT64_ARRAY: TagId = 20;
pub const TAG_ILTAG_ARRAY: TagId = 21;
pub const TAG_ILTAG_SEQ: TagId = 22;
/// Reserved. No catalog type yet; decoded as a raw tag in lenient mode.
pub const TAG_RANGE: TagId = 23;
/// Reserved. No catalog type yet; decoded as a raw tag in lenient mode.
pub const TAG_VERSION: TagId = 24;

/// Standard tag kinds that have a catalog type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StandardId {
    Null,
    Bool,
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    ILInt64,
    Binary32,
    Binary64,
    Binary128,
    ByteArray,
    String,
    BigInt,
    BigDecimal,
    ILInt64Array,
    TagArray,
    TagSequence,
}

impl StandardId {
    /// Look up the standard kind for an id, if it has one.
    pub fn from_id(id: TagId) -> Option<StandardId> {
        use self::StandardId::*;
        Some(match id {
            TAG_NULL => Null,
            TAG_BOOL => Bool,
            TAG_INT8 => Int8,
            TAG_UINT8 => UInt8,
            TAG_INT16 => Int16,
            TAG_UINT16 => UInt16,
            TAG_INT32 => Int32,
            TAG_UINT32 => UInt32,
            TAG_INT64 => Int64,
            TAG_UINT64 => UInt64,
            TAG_ILINT64 => ILInt64,
            TAG_BINARY32 => Binary32,
            TAG_BINARY64 => Binary64,
            TAG_BINARY128 => Binary128,
            TAG_BYTE_ARRAY => ByteArray,
            TAG_STRING => String,
            TAG_BINT => BigInt,
            TAG_BDEC => BigDecimal,
            TAG_ILINT64_ARRAY => ILInt64Array,
            TAG_ILTAG_ARRAY => TagArray,
            TAG_ILTAG_SEQ => TagSequence,
            _ => return None,
        })
    }

    pub fn id(self) -> TagId {
        use self::StandardId::*;
        match self {
            Null => TAG_NULL,
            Bool => TAG_BOOL,
            Int8 => TAG_INT8,
            UInt8 => TAG_UINT8,
            Int16 => TAG_INT16,
            UInt16 => TAG_UINT16,
            Int32 => TAG_INT32,
            UInt32 => TAG_UINT32,
            Int64 => TAG_INT64,
            UInt64 => TAG_UINT64,
            ILInt64 => TAG_ILINT64,
            Binary32 => TAG_BINARY32,
            Binary64 => TAG_BINARY64,
            Binary128 => TAG_BINARY128,
            ByteArray => TAG_BYTE_ARRAY,
            String => TAG_STRING,
            BigInt => TAG_BINT,
            BigDecimal => TAG_BDEC,
            ILInt64Array => TAG_ILINT64_ARRAY,
            TagArray => TAG_ILTAG_ARRAY,
            TagSequence => TAG_ILTAG_SEQ,
        }
    }

    pub fn name(self) -> &'static str {
        use self::StandardId::*;
        match self {
            Null => "Null",
            Bool => "Bool",
            Int8 => "Int8",
            UInt8 => "UInt8",
            Int16 => "Int16",
            UInt16 => "UInt16",
            Int32 => "Int32",
            UInt32 => "UInt32",
            Int64 => "Int64",
            UInt64 => "UInt64",
            ILInt64 => "ILInt64",
            Binary32 => "Binary32",
            Binary64 => "Binary64",
            Binary128 => "Binary128",
            ByteArray => "ByteArray",
            String => "String",
            BigInt => "BigInt",
            BigDecimal => "BigDecimal",
            ILInt64Array => "ILInt64Array",
            TagArray => "TagArray",
            TagSequence => "TagSequence",
        }
    }
}

impl From<StandardId> for TagId {
    fn from(id: StandardId) -> Self {
        id.id()
    }
}

pub fn is_implicit(id: TagId) -> bool {
    id < IMPLICIT_LIMIT
}

pub fn is_standard(id: TagId) -> bool {
    id < STANDARD_LIMIT
}

/// Value size of an implicit tag, known from its id alone.
///
/// Returns `None` for [`TAG_ILINT64`], whose value delimits itself, for the unassigned implicit
/// ids 14 and 15, and for every explicit id.
pub fn implicit_value_size(id: TagId) -> Option<u64> {
    match id {
        TAG_NULL => Some(0),
        TAG_BOOL | TAG_INT8 | TAG_UINT8 => Some(1),
        TAG_INT16 | TAG_UINT16 => Some(2),
        TAG_INT32 | TAG_UINT32 | TAG_BINARY32 => Some(4),
        TAG_INT64 | TAG_UINT64 | TAG_BINARY64 => Some(8),
        TAG_BINARY128 => Some(16),
        _ => None,
    }
}
