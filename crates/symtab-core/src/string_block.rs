//! Contiguous storage for a fixed set of names.
//!
//! All names are concatenated into a single buffer; an offset table with
//! `len() + 1` entries marks where each one starts. Name `i` spans
//! `offsets[i]..offsets[i + 1]`, minus the separator byte when names are
//! NUL-terminated. The last offset is always the total block size.

use std::hash::Hasher;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::hash::RollingHasher;
use crate::{Error, Result};

/// Separator written after every name in the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Terminator {
    #[default]
    None,
    /// A `\0` byte after each name, for consumers that expect C strings.
    Nul,
}

impl Terminator {
    /// Bytes occupied by the separator.
    pub const fn width(self) -> usize {
        match self {
            Terminator::None => 0,
            Terminator::Nul => 1,
        }
    }
}

/// Strip a declaration down to its name.
///
/// Leading whitespace is skipped and the name ends at the first whitespace or
/// `=`, so `"  Red = 0xff0000"` yields `"Red"`.
pub fn trim_name(raw: &str) -> &str {
    let raw = raw.trim_start();
    let end = raw
        .find(|c: char| c.is_whitespace() || c == '=')
        .unwrap_or(raw.len());
    &raw[..end]
}

/// Split comma-delimited declaration text into exactly `count` trimmed names.
///
/// A single trailing comma is accepted.
pub fn split_names(source: &str, count: usize) -> Result<Vec<&str>> {
    let mut pieces: Vec<&str> = source.split(',').collect();
    if pieces.last().is_some_and(|last| last.trim().is_empty()) {
        pieces.pop();
    }

    if pieces.len() != count {
        return Err(Error::NameCountMismatch {
            expected: count,
            found: pieces.len(),
        });
    }

    Ok(pieces.into_iter().map(trim_name).collect())
}

/// Immutable block of names with O(1) access by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringBlock {
    data: Box<str>,
    offsets: Box<[u32]>,
    terminator: Terminator,
}

impl StringBlock {
    /// Parse `count` names out of comma-delimited declaration text.
    pub fn from_source(source: &str, count: usize, terminator: Terminator) -> Result<Self> {
        let names = split_names(source, count)?;
        Ok(Self::from_names(names, terminator))
    }

    /// Pack the given names in order.
    ///
    /// # Panics
    /// Panics if the block would exceed `u32::MAX` bytes.
    pub fn from_names<I, S>(names: I, terminator: Terminator) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut data = String::new();
        let mut offsets = Vec::new();

        for name in names {
            offsets.push(block_offset(data.len()));
            data.push_str(name.as_ref());
            if terminator == Terminator::Nul {
                data.push('\0');
            }
        }
        offsets.push(block_offset(data.len()));

        Self {
            data: data.into_boxed_str(),
            offsets: offsets.into_boxed_slice(),
            terminator,
        }
    }

    #[inline]
    fn slice(&self, index: usize) -> &str {
        let start = self.offsets[index] as usize;
        let end = self.offsets[index + 1] as usize - self.terminator.width();
        &self.data[start..end]
    }

    /// Name at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&str> {
        (index < self.len()).then(|| self.slice(index))
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        (0..self.len()).map(|i| self.slice(i))
    }

    /// Number of names.
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total bytes in the block, separators included.
    pub fn block_size(&self) -> usize {
        self.data.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.data.as_bytes()
    }

    pub fn offsets(&self) -> &[u32] {
        &self.offsets
    }

    pub fn terminator(&self) -> Terminator {
        self.terminator
    }

    /// Length in bytes of the longest name.
    pub fn max_len(&self) -> usize {
        self.iter().map(str::len).max().unwrap_or(0)
    }

    /// Copy of the block with ASCII letters lowercased. Offsets are unchanged.
    pub fn to_ascii_lowercase(&self) -> Self {
        Self {
            data: self.data.to_ascii_lowercase().into_boxed_str(),
            offsets: self.offsets.clone(),
            terminator: self.terminator,
        }
    }

    /// Rolling hash over the block bytes and the offset table.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = RollingHasher::default();
        hasher.write(self.data.as_bytes());
        for offset in self.offsets.iter() {
            hasher.write(&offset.to_le_bytes());
        }
        hasher.finish()
    }

    /// Serialize to a compact binary form (postcard).
    pub fn to_binary(&self) -> Result<Vec<u8>> {
        let raw = RawBlock {
            data: self.data.to_string(),
            offsets: self.offsets.to_vec(),
            terminator: self.terminator,
            fingerprint: self.fingerprint(),
        };
        Ok(postcard::to_allocvec(&raw)?)
    }

    /// Decode a block written by [`StringBlock::to_binary`].
    ///
    /// The offset table and the stored fingerprint are checked before the
    /// block is handed out.
    pub fn from_binary(bytes: &[u8]) -> Result<Self> {
        let raw: RawBlock = postcard::from_bytes(bytes)?;
        validate_offsets(&raw.data, &raw.offsets, raw.terminator)?;

        let block = Self {
            data: raw.data.into_boxed_str(),
            offsets: raw.offsets.into_boxed_slice(),
            terminator: raw.terminator,
        };

        let computed = block.fingerprint();
        if computed != raw.fingerprint {
            return Err(Error::FingerprintMismatch {
                stored: raw.fingerprint,
                computed,
            });
        }
        Ok(block)
    }
}

impl Index<usize> for StringBlock {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        assert!(
            index < self.len(),
            "StringBlock: index {index} out of range for {} names",
            self.len()
        );
        self.slice(index)
    }
}

fn block_offset(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("StringBlock: {len} bytes exceeds u32 offsets"))
}

/// Wire layout of an encoded block.
#[derive(Serialize, Deserialize)]
pub(crate) struct RawBlock {
    pub(crate) data: String,
    pub(crate) offsets: Vec<u32>,
    pub(crate) terminator: Terminator,
    pub(crate) fingerprint: u64,
}

fn validate_offsets(data: &str, offsets: &[u32], terminator: Terminator) -> Result<()> {
    let (Some(&first), Some(&last)) = (offsets.first(), offsets.last()) else {
        return Err(Error::CorruptBlock("empty offset table"));
    };
    if first != 0 {
        return Err(Error::CorruptBlock("first offset is not zero"));
    }
    if last as usize != data.len() {
        return Err(Error::CorruptBlock("last offset does not match block size"));
    }

    let width = terminator.width() as u32;
    for pair in offsets.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        if end < start || end - start < width {
            return Err(Error::CorruptBlock("offsets are not increasing"));
        }
        let name_end = (end - width) as usize;
        if !data.is_char_boundary(start as usize) || !data.is_char_boundary(name_end) {
            return Err(Error::CorruptBlock("offset splits a character"));
        }
        if terminator == Terminator::Nul && data.as_bytes()[name_end] != 0 {
            return Err(Error::CorruptBlock("missing NUL separator"));
        }
    }
    Ok(())
}
