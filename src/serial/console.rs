//! Line staging for status text.
//!
//! Tasks that want to emit readable status lines compose them here with
//! `ufmt` and then push the bytes through the serial bridge one at a time.
//! The buffer is fixed-size; a line that does not fit is rejected whole.

use ufmt::uWrite;

/// The staged line would exceed the buffer capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overflow;

/// Fixed-capacity byte buffer with a [`ufmt::uWrite`] implementation.
///
/// ```
/// use coop_core::LineBuffer;
/// use ufmt::uwrite;
///
/// let mut line: LineBuffer = LineBuffer::new();
/// uwrite!(line, "counter reached {}", 1000u32).unwrap();
/// assert_eq!(line.as_bytes(), b"counter reached 1000");
/// ```
pub struct LineBuffer<const N: usize = 64> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> LineBuffer<N> {
    pub const fn new() -> Self {
        Self {
            buf: [0; N],
            len: 0,
        }
    }

    /// Bytes staged so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Discard the staged line.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Append a single byte.
    pub fn push(&mut self, byte: u8) -> Result<(), Overflow> {
        if self.len >= N {
            return Err(Overflow);
        }
        self.buf[self.len] = byte;
        self.len += 1;
        Ok(())
    }
}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> uWrite for LineBuffer<N> {
    type Error = Overflow;

    fn write_str(&mut self, s: &str) -> Result<(), Overflow> {
        let bytes = s.as_bytes();
        if self.len + bytes.len() > N {
            return Err(Overflow);
        }
        self.buf[self.len..self.len + bytes.len()].copy_from_slice(bytes);
        self.len += bytes.len();
        Ok(())
    }
}
