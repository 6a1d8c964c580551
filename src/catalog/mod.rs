//! The standard tag types, one per catalog id.

mod array;
mod blob;
mod scalar;

pub use self::array::*;
pub use self::blob::*;
pub use self::scalar::*;
