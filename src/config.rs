use educe::Educe;
use serde::{Deserialize, Serialize};

use crate::MAX_DEPTH;

/// Settings that steer how a factory builds and decodes tags.
#[derive(Clone, Debug, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default)]
pub struct FactoryConfig {
    /// Raw, byte-array and big-number tags wipe their storage when dropped.
    pub secure: bool,
    /// Unknown ids fail the decode instead of becoming raw tags.
    pub strict: bool,
    /// Deepest container nesting accepted while decoding.
    #[educe(Default = MAX_DEPTH)]
    pub max_depth: usize,
}

impl FactoryConfig {
    pub fn new(secure: bool, strict: bool) -> Self {
        Self {
            secure,
            strict,
            ..Self::default()
        }
    }
}
