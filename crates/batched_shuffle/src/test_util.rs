//! Shared helpers for unit tests.

use rand::RngCore;

/// Replays a fixed list of words, panicking once they run out.
pub(crate) struct Replay {
    words: Vec<u64>,
    next: usize,
}

impl Replay {
    pub(crate) fn new(words: &[u64]) -> Self {
        Self {
            words: words.to_vec(),
            next: 0,
        }
    }

    /// Number of words handed out so far.
    pub(crate) fn consumed(&self) -> usize {
        self.next
    }
}

impl RngCore for Replay {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        let word = self.words[self.next];
        self.next += 1;
        word
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
