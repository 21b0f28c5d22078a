//! Codewords as sequences of alphabet positions.
//!
//! A codeword stores symbol *indices* rather than characters, so the derived
//! `Ord` is lexicographic over the alphabet order and a `BTreeMap` keyed by
//! codewords iterates leaves left to right. The empty codeword is the root of
//! the tree; it is what the sentinel symbol spells.

use smallvec::SmallVec;

/// Position of a symbol in its [`Alphabet`](crate::Alphabet).
pub type SymbolIndex = u32;

/// Most codewords are short; keep them inline.
const INLINE_SYMBOLS: usize = 16;

/// A word over an alphabet, by symbol position.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Codeword(SmallVec<[SymbolIndex; INLINE_SYMBOLS]>);

impl Codeword {
    /// The empty codeword (tree root).
    #[inline]
    pub fn root() -> Self {
        Self(SmallVec::new())
    }

    pub fn from_symbols(symbols: impl IntoIterator<Item = SymbolIndex>) -> Self {
        Self(symbols.into_iter().collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn symbols(&self) -> &[SymbolIndex] {
        &self.0
    }

    #[inline]
    pub fn last(&self) -> Option<SymbolIndex> {
        self.0.last().copied()
    }

    /// `true` if `self` is a (not necessarily proper) prefix of `other`.
    #[inline]
    pub fn is_prefix_of(&self, other: &Codeword) -> bool {
        other.0.starts_with(&self.0)
    }

    /// The codeword with its last symbol dropped, or `None` at the root.
    pub fn parent(&self) -> Option<Codeword> {
        if self.is_root() {
            return None;
        }
        Some(self.truncated(self.len() - 1))
    }

    /// One-symbol extension.
    pub fn child(&self, symbol: SymbolIndex) -> Codeword {
        let mut out = self.clone();
        out.0.push(symbol);
        out
    }

    /// The first `len` symbols (clamped to the codeword's length).
    pub fn truncated(&self, len: usize) -> Codeword {
        Self(SmallVec::from_slice(&self.0[..len.min(self.len())]))
    }

    /// Longest common symbol-by-symbol prefix.
    pub fn common_prefix(&self, other: &Codeword) -> Codeword {
        let shared = self
            .0
            .iter()
            .zip(other.0.iter())
            .take_while(|(a, b)| a == b)
            .count();
        self.truncated(shared)
    }
}
