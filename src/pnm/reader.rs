//! Cursor over an in-memory Netpbm stream.

/// Byte cursor with the two reads the codec needs: a text line and a
/// fixed-size block.
pub(crate) struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes up to (not including) the next `\n`; the cursor moves past it.
    ///
    /// A final line without a terminator is still returned. `None` at end of
    /// input.
    pub(crate) fn read_line(&mut self) -> Option<&'a [u8]> {
        let rest = self.data.get(self.pos..)?;
        if rest.is_empty() {
            return None;
        }
        match rest.iter().position(|&b| b == b'\n') {
            Some(end) => {
                self.pos += end + 1;
                Some(&rest[..end])
            }
            None => {
                self.pos = self.data.len();
                Some(rest)
            }
        }
    }

    /// Exactly `n` bytes, or `None` (cursor unchanged) if fewer remain.
    pub(crate) fn read_bytes(&mut self, n: usize) -> Option<&'a [u8]> {
        let end = self.pos.checked_add(n)?;
        let out = self.data.get(self.pos..end)?;
        self.pos = end;
        Some(out)
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left after the cursor.
    pub(crate) fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }
}
