use bytes::Buf;

/// A read cursor over a borrowed frame buffer.
///
/// Besides the remaining bytes, the cursor remembers where it started, so that
/// the absolute offset of the current position can be reported.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned at the start of `buf`.
    #[inline]
    pub fn new(buf: &'a [u8]) -> Self {
        Cursor { buf, pos: 0 }
    }

    /// The whole underlying buffer, including the consumed part.
    #[inline]
    pub fn buf(&self) -> &'a [u8] {
        self.buf
    }

    /// The remaining bytes, with the lifetime of the underlying buffer.
    #[inline]
    pub fn chunk_shared_lifetime(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// The number of bytes consumed so far.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.pos
    }
}

impl<'a> Buf for Cursor<'a> {
    #[inline]
    fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[inline]
    fn chunk(&self) -> &[u8] {
        &self.buf[self.pos..]
    }

    #[inline]
    fn advance(&mut self, cnt: usize) {
        assert!(cnt <= self.remaining());
        self.pos += cnt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor() {
        let b = [10; 1000];
        for c_pos in 0..1001 {
            let mut cursor = Cursor::new(&b[..]);
            cursor.advance(c_pos);

            assert_eq!(c_pos, cursor.cursor());
            assert_eq!(cursor.buf(), &b[..]);
            assert_eq!(cursor.remaining(), 1000 - c_pos);
            assert_eq!(cursor.chunk(), &b[c_pos..]);
            assert_eq!(cursor.chunk_shared_lifetime(), &b[c_pos..]);
        }
    }

    #[test]
    #[should_panic]
    fn test_cursor_overrun() {
        let b = [0u8; 4];
        let mut cursor = Cursor::new(&b[..]);
        cursor.advance(5);
    }
}
