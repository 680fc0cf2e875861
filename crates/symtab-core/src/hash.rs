//! Polynomial rolling hash modulo the Mersenne prime `2^61 - 1`.
//!
//! Input bytes are packed little-endian into 4- or 8-byte blocks and folded
//! with `h = (h * mul + block) mod p`. The trailing partial block is always
//! folded, even when it is empty, so `""` and `"abcd"` take different numbers
//! of steps.

use std::hash::{BuildHasher, Hasher};

/// `2^61 - 1`.
pub const MODULUS: u64 = (1 << 61) - 1;

/// Bytes consumed per multiply-mod step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockWidth {
    Four,
    Eight,
}

impl BlockWidth {
    pub const fn bytes(self) -> usize {
        match self {
            BlockWidth::Four => 4,
            BlockWidth::Eight => 8,
        }
    }
}

/// One hash variant: initial value, multiplier and block width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RollingHash {
    initial_value: u64,
    mul: u64,
    width: BlockWidth,
}

impl Default for RollingHash {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl RollingHash {
    /// `initial_value = 0`, `mul = 31`, 4-byte blocks.
    pub const DEFAULT: Self = Self::new(0, 31, BlockWidth::Four);

    pub const fn new(initial_value: u64, mul: u64, width: BlockWidth) -> Self {
        Self {
            initial_value,
            mul,
            width,
        }
    }

    pub const fn width(&self) -> BlockWidth {
        self.width
    }

    #[inline]
    const fn step(&self, h: u64, block: u64) -> u64 {
        ((h as u128 * self.mul as u128 + block as u128) % MODULUS as u128) as u64
    }

    /// Hash a byte string.
    pub const fn hash(&self, bytes: &[u8]) -> u64 {
        let width = self.width.bytes();
        let full = bytes.len() - bytes.len() % width;

        let mut h = self.initial_value;
        let mut i = 0;
        while i < full {
            h = self.step(h, read_block(bytes, i, width));
            i += width;
        }
        self.step(h, read_block(bytes, full, bytes.len() - full))
    }

    pub const fn hash_str(&self, s: &str) -> u64 {
        self.hash(s.as_bytes())
    }

    pub fn build_hasher(&self) -> RollingHasher {
        RollingHasher::new(*self)
    }
}

/// Little-endian block of `len` bytes starting at `start`.
#[inline]
const fn read_block(bytes: &[u8], start: usize, len: usize) -> u64 {
    let mut block = 0u64;
    let mut j = 0;
    while j < len {
        block |= (bytes[start + j] as u64) << (8 * j);
        j += 1;
    }
    block
}

/// Streaming form of [`RollingHash`].
///
/// Partial blocks are buffered across `write` calls, so any split of the input
/// produces the same result as [`RollingHash::hash`] on the concatenation.
#[derive(Debug, Clone)]
pub struct RollingHasher {
    params: RollingHash,
    state: u64,
    pending: [u8; 8],
    pending_len: usize,
}

impl RollingHasher {
    pub const fn new(params: RollingHash) -> Self {
        Self {
            params,
            state: params.initial_value,
            pending: [0; 8],
            pending_len: 0,
        }
    }
}

impl Default for RollingHasher {
    fn default() -> Self {
        Self::new(RollingHash::DEFAULT)
    }
}

impl Hasher for RollingHasher {
    fn write(&mut self, bytes: &[u8]) {
        let width = self.params.width.bytes();
        for &byte in bytes {
            self.pending[self.pending_len] = byte;
            self.pending_len += 1;
            if self.pending_len == width {
                self.state = self.params.step(self.state, read_block(&self.pending, 0, width));
                self.pending_len = 0;
            }
        }
    }

    fn finish(&self) -> u64 {
        self.params
            .step(self.state, read_block(&self.pending, 0, self.pending_len))
    }
}

/// [`BuildHasher`] for hash maps keyed by names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildRollingHasher(pub RollingHash);

impl BuildHasher for BuildRollingHasher {
    type Hasher = RollingHasher;

    fn build_hasher(&self) -> RollingHasher {
        RollingHasher::new(self.0)
    }
}
