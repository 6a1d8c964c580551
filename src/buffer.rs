use std::fmt;
use std::ops::Deref;

use educe::Educe;
use zeroize::Zeroize;

/// Byte storage backing raw, byte-array and big-number tags.
///
/// A secure buffer wipes its contents when dropped, cleared, truncated, or moved to a larger
/// allocation, so sensitive material doesn't linger in freed memory. Equality only looks at the
/// bytes.
#[derive(Clone, Educe)]
#[educe(PartialEq, Default)]
pub struct TagBuffer {
    data: Vec<u8>,
    #[educe(PartialEq(ignore))]
    secure: bool,
}

impl TagBuffer {
    pub fn new(secure: bool) -> Self {
        Self {
            data: Vec::new(),
            secure,
        }
    }

    pub fn from_slice(data: &[u8], secure: bool) -> Self {
        let mut buf = Self::new(secure);
        buf.extend_from_slice(data);
        buf
    }

    pub fn secure(&self) -> bool {
        self.secure
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Replace the whole contents.
    pub fn set(&mut self, data: &[u8]) {
        self.clear();
        self.extend_from_slice(data);
    }

    pub fn extend_from_slice(&mut self, data: &[u8]) {
        self.reserve(data.len());
        self.data.extend_from_slice(data);
    }

    pub fn push(&mut self, byte: u8) {
        self.extend_from_slice(&[byte]);
    }

    pub fn truncate(&mut self, len: usize) {
        if len >= self.data.len() {
            return;
        }
        if self.secure {
            self.data[len..].zeroize();
        }
        self.data.truncate(len);
    }

    pub fn clear(&mut self) {
        self.truncate(0);
    }

    fn reserve(&mut self, additional: usize) {
        if self.data.capacity() - self.data.len() >= additional {
            return;
        }
        if !self.secure {
            self.data.reserve(additional);
            return;
        }
        // Growing in place could leave a copy behind in the old allocation.
        let want = (self.data.len() + additional).max(self.data.capacity() * 2);
        let mut grown = Vec::with_capacity(want);
        grown.extend_from_slice(&self.data);
        let mut old = std::mem::replace(&mut self.data, grown);
        old.zeroize();
    }
}

impl Deref for TagBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for TagBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for TagBuffer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.secure {
            write!(f, "TagBuffer(<{} secure bytes>)", self.data.len())
        } else {
            write!(f, "TagBuffer({:02x?})", self.data)
        }
    }
}

impl Drop for TagBuffer {
    fn drop(&mut self) {
        if self.secure {
            self.data.zeroize();
        }
    }
}
