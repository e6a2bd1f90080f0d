//! Read-only views of the bytes buffered so far.

/// A source of buffered stream bytes, starting at the first octet of the
/// stream.
///
/// The parser never discards bytes: every call must expose the same prefix
/// as the previous one, possibly extended.
pub trait ByteWindow {
    /// Number of bytes currently buffered.
    fn available(&self) -> usize;

    /// The first `len` buffered bytes. `len` never exceeds [available].
    ///
    /// [available]: ByteWindow::available
    fn window(&self, len: usize) -> Option<&[u8]>;
}

impl ByteWindow for [u8] {
    fn available(&self) -> usize {
        self.len()
    }

    fn window(&self, len: usize) -> Option<&[u8]> {
        self.get(..len)
    }
}

impl ByteWindow for Vec<u8> {
    fn available(&self) -> usize {
        self.len()
    }

    fn window(&self, len: usize) -> Option<&[u8]> {
        self.get(..len)
    }
}

// Bytes consumed from a circular buffer are gone, so the caller must not
// consume before extraction is done.
impl ByteWindow for circular::Buffer {
    fn available(&self) -> usize {
        self.available_data()
    }

    fn window(&self, len: usize) -> Option<&[u8]> {
        self.data().get(..len)
    }
}
