//! Ordered alphabets and the conversion between text and [`Codeword`]s.

use std::fmt;
use std::str::FromStr;

use crate::codeword::{Codeword, SymbolIndex};
use crate::error::{Error, Result};

/// Reserved symbol spelling the empty codeword (`𝛆`, U+1D6C6).
///
/// It never appears in an alphabet. A code whose only leaf is the root renders
/// as `[𝛆 0]`.
pub const SENTINEL: char = '\u{1D6C6}';

/// An ordered set of at least one distinct symbol.
///
/// The listing order is the symbol order: codewords sort lexicographically by
/// symbol position, not by code point.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet keeping the given order.
    pub fn new(symbols: impl IntoIterator<Item = char>) -> Result<Self> {
        let symbols: Vec<char> = symbols.into_iter().collect();
        if symbols.is_empty() {
            return Err(Error::EmptyAlphabet);
        }
        for (i, &c) in symbols.iter().enumerate() {
            if c == SENTINEL {
                return Err(Error::ReservedSymbol(c));
            }
            if symbols[..i].contains(&c) {
                return Err(Error::DuplicateSymbol(c));
            }
        }
        Ok(Self { symbols })
    }

    /// The alphabet `01`.
    pub fn binary() -> Self {
        Self {
            symbols: vec!['0', '1'],
        }
    }

    /// Build an alphabet from the distinct characters of `text`, sorted by
    /// code point.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut symbols: Vec<char> = text.chars().collect();
        symbols.sort_unstable();
        symbols.dedup();
        Self::new(symbols)
    }

    /// Number of symbols (the branching factor `k`).
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`; alphabets are non-empty by construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[inline]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn symbol(&self, index: SymbolIndex) -> Option<char> {
        self.symbols.get(index as usize).copied()
    }

    pub fn index_of(&self, symbol: char) -> Option<SymbolIndex> {
        self.symbols
            .iter()
            .position(|&c| c == symbol)
            .map(|i| i as SymbolIndex)
    }

    /// Symbol positions `0..k`.
    pub(crate) fn indices(&self) -> impl DoubleEndedIterator<Item = SymbolIndex> {
        0..self.symbols.len() as SymbolIndex
    }

    /// Parse `word` into a codeword. The empty string and the lone sentinel
    /// both mean the root.
    pub fn parse(&self, word: &str) -> Result<Codeword> {
        let mut chars = word.chars();
        if chars.next() == Some(SENTINEL) && chars.next().is_none() {
            return Ok(Codeword::root());
        }
        let mut out = Vec::with_capacity(word.len());
        for c in word.chars() {
            out.push(self.index_of(c).ok_or(Error::UnknownSymbol(c))?);
        }
        Ok(Codeword::from_symbols(out))
    }

    /// Render `word` as text; the root spells as the sentinel.
    ///
    /// Codewords are only ever built against their own alphabet, so every
    /// index is in range.
    pub fn spell(&self, word: &Codeword) -> String {
        if word.is_root() {
            return SENTINEL.to_string();
        }
        word.symbols()
            .iter()
            .map(|&i| self.symbols[i as usize])
            .collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::binary()
    }
}

impl FromStr for Alphabet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_text(s)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.symbols {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
