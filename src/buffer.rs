//! An owned view over the bytes of a parse.

use crate::stream::Stream;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// A container for the bytes a parse reads from.
pub type BufferData = Arc<dyn AsRef<[u8]> + Send + Sync>;

/// An immutable byte region with a base offset and a logical length.
///
/// The view spans `[base, end)` within the underlying allocation, which
/// may be larger on either side. A buffer is created once per parse and
/// never mutated; every [`Stream`] opened from it borrows the same view.
#[derive(Clone)]
pub struct Buffer {
    data: BufferData,
    base: usize,
    end: usize,
}

impl Buffer {
    /// Create a buffer spanning a whole allocation.
    pub fn new(data: BufferData) -> Self {
        let end = data.as_ref().as_ref().len();

        Self { data, base: 0, end }
    }

    /// Create a buffer starting at `base` within the allocation.
    ///
    /// A base past the end of the allocation is clamped.
    pub fn with_base(data: BufferData, base: usize) -> Self {
        let end = data.as_ref().as_ref().len();

        Self {
            base: base.min(end),
            data,
            end,
        }
    }

    /// Create a buffer spanning `[base, end)` within the allocation.
    ///
    /// Both bounds are clamped to the allocation, and `base` to `end`.
    pub fn with_view(data: BufferData, base: usize, end: usize) -> Self {
        let len = data.as_ref().as_ref().len();
        let end = end.min(len);

        Self {
            base: base.min(end),
            data,
            end,
        }
    }

    /// Create an all-zero buffer of the given length.
    pub fn zeroed(len: usize) -> Self {
        Self::new(Arc::new(vec![0u8; len]))
    }

    /// Returns the logical length of the view.
    pub fn len(&self) -> usize {
        self.end - self.base
    }

    /// Returns `true` if the view holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.base == self.end
    }

    /// Returns the bytes of the view.
    pub fn bytes(&self) -> &[u8] {
        &self.data.as_ref().as_ref()[self.base..self.end]
    }

    /// Returns a buffer whose allocation holds exactly the view.
    ///
    /// When the view already spans its whole allocation, the allocation
    /// is shared instead of copied.
    pub fn trim(&self) -> Self {
        if self.base == 0 && self.end == self.data.as_ref().as_ref().len() {
            return self.clone();
        }

        Self::new(Arc::new(self.bytes().to_vec()))
    }

    /// Open a stream over the view.
    pub fn stream(&self) -> Stream<'_> {
        Stream::new(self.bytes())
    }
}

impl Debug for Buffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Buffer {{ {} bytes }}", self.len())
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(data: Vec<u8>) -> Self {
        Self::new(Arc::new(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_allocation() {
        let buffer = Buffer::from(vec![1, 2, 3]);
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.bytes(), &[1, 2, 3]);
    }

    #[test]
    fn base_and_view() {
        let data: BufferData = Arc::new(vec![1u8, 2, 3, 4, 5]);

        let buffer = Buffer::with_base(data.clone(), 2);
        assert_eq!(buffer.bytes(), &[3, 4, 5]);

        let buffer = Buffer::with_view(data.clone(), 1, 4);
        assert_eq!(buffer.bytes(), &[2, 3, 4]);

        // Out-of-range bounds clamp instead of failing.
        let buffer = Buffer::with_view(data, 4, 100);
        assert_eq!(buffer.bytes(), &[5]);
    }

    #[test]
    fn zeroed() {
        let buffer = Buffer::zeroed(4);
        assert_eq!(buffer.bytes(), &[0, 0, 0, 0]);
        assert!(!buffer.is_empty());
    }

    #[test]
    fn trim_copies_narrow_views() {
        let data: BufferData = Arc::new(vec![1u8, 2, 3, 4]);
        let buffer = Buffer::with_view(data, 1, 3);
        let trimmed = buffer.trim();
        assert_eq!(trimmed.bytes(), buffer.bytes());
        assert_eq!(trimmed.len(), 2);

        let whole = Buffer::from(vec![1, 2]);
        assert_eq!(whole.trim().bytes(), &[1, 2]);
    }

    #[test]
    fn stream_reads_the_view() {
        let data: BufferData = Arc::new(vec![0u8, 0x12, 0x34]);
        let buffer = Buffer::with_base(data, 1);
        let mut stream = buffer.stream();
        assert_eq!(stream.read_u16_be().unwrap(), 0x1234);
        assert!(stream.is_eof());
    }
}
