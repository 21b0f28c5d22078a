//! The prefix code itself: an ordered leaf map with labels.
//!
//! A [`PrefixCode`] is the leaf set of a finite complete `k`-ary tree. The
//! authoritative store is a `BTreeMap` from codeword to label, so iteration is
//! left-to-right over the tree and the covering leaf of any word is a single
//! ordered lookup. A `label -> codeword` index is rebuilt after each mutation.
//!
//! The trivial code (a lone root leaf) is the empty codeword, rendered with
//! [`SENTINEL`](crate::SENTINEL). Expanding it needs no special casing: the
//! root is a prefix of every word.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::alphabet::Alphabet;
use crate::codeword::{Codeword, SymbolIndex};
use crate::config::{Config, InitialShape};
use crate::error::{Error, Result};

/// Leaf label; a code with `n` leaves uses exactly `0..n`.
pub type Label = usize;

/// Result of a structural mutation that had valid input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The code changed.
    Changed,
    /// Nothing to do at that location; the code is untouched.
    Unchanged,
}

impl Outcome {
    #[inline]
    pub fn is_changed(self) -> bool {
        self == Outcome::Changed
    }
}

/// A complete prefix code over an [`Alphabet`], each leaf carrying a unique
/// label in `0..n`.
///
/// `Clone` is a deep copy; two codes never share leaf storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefixCode {
    pub(crate) alphabet: Alphabet,
    /// Leaves in lexicographic order.
    pub(crate) leaves: BTreeMap<Codeword, Label>,
    /// `by_label[l]` is the leaf carrying label `l`.
    pub(crate) by_label: Vec<Codeword>,
}

impl PrefixCode {
    /// Trivial code over the binary alphabet `01`.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let mut code = Self::with_alphabet(config.alphabet);
        if config.shape == InitialShape::OneLevel {
            let _ = code.expand_word(&Codeword::root());
        }
        code
    }

    /// Trivial code over `alphabet`.
    pub fn with_alphabet(alphabet: Alphabet) -> Self {
        let mut leaves = BTreeMap::new();
        leaves.insert(Codeword::root(), 0);
        Self {
            alphabet,
            leaves,
            by_label: vec![Codeword::root()],
        }
    }

    /// Trivial code over an explicitly ordered symbol sequence.
    pub fn from_symbols(symbols: impl IntoIterator<Item = char>) -> Result<Self> {
        Ok(Self::with_alphabet(Alphabet::new(symbols)?))
    }

    /// Trivial code over the sorted distinct characters of `text`.
    pub fn from_text(text: &str) -> Result<Self> {
        Ok(Self::with_alphabet(Alphabet::from_text(text)?))
    }

    /// Build a code from explicit `(codeword, label)` pairs.
    ///
    /// The pairs must form a complete prefix code whose labels are a bijection
    /// onto `0..n`.
    pub fn from_leaves<I, S>(alphabet: Alphabet, leaves: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Label)>,
        S: AsRef<str>,
    {
        let mut map = BTreeMap::new();
        for (word, label) in leaves {
            let word = alphabet.parse(word.as_ref())?;
            if map.contains_key(&word) {
                return Err(Error::invalid_code(format!(
                    "codeword `{}` given twice",
                    alphabet.spell(&word)
                )));
            }
            map.insert(word, label);
        }
        let mut code = Self {
            alphabet,
            leaves: map,
            by_label: Vec::new(),
        };
        code.validate()?;
        code.reindex();
        Ok(code)
    }

    #[inline]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Number of leaves.
    #[inline]
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    /// Always `false`; a code has at least the root leaf.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// `true` while the code is only the unexpanded root.
    pub fn is_trivial(&self) -> bool {
        self.leaves.len() == 1 && self.leaves.contains_key(&Codeword::root())
    }

    /// Leaves with their labels, in lexicographic order.
    pub fn leaves(&self) -> impl Iterator<Item = (&Codeword, Label)> + '_ {
        self.leaves.iter().map(|(leaf, &label)| (leaf, label))
    }

    /// Spelled codewords in lexicographic order.
    pub fn codewords(&self) -> Vec<String> {
        self.leaves.keys().map(|leaf| self.alphabet.spell(leaf)).collect()
    }

    #[inline]
    pub fn spell(&self, word: &Codeword) -> String {
        self.alphabet.spell(word)
    }

    /// The leaf that is a prefix of `word`, if `word` lies at or below a leaf.
    pub fn prefix_of(&self, word: &str) -> Result<Option<String>> {
        let word = self.alphabet.parse(word)?;
        Ok(self
            .covering_leaf(&word)
            .map(|(leaf, _)| self.alphabet.spell(leaf)))
    }

    /// Grow the minimal subtree below the leaf covering `word` so that `word`
    /// becomes an exposed caret.
    ///
    /// With the covering leaf `p` at depth `d` and `word` at depth `d + m`,
    /// this adds the `k - 1` siblings of each spine step and the `k` children
    /// of `word`: `m * (k - 1) + k` leaves. They take contiguous labels from
    /// `p`'s label in lexicographic order; later labels shift up to make room.
    ///
    /// Returns [`Outcome::Unchanged`] when no leaf is a prefix of `word` (the
    /// location is already internal).
    pub fn expand_at(&mut self, word: &str) -> Result<Outcome> {
        let word = self.alphabet.parse(word)?;
        Ok(self.expand_word(&word))
    }

    /// Collapse every leaf having `word` as a prefix into the single leaf
    /// `word`.
    ///
    /// `word` takes the smallest label among the removed leaves and the
    /// remaining labels close the gap in order. The empty word resets the code
    /// to the trivial one.
    ///
    /// Returns [`Outcome::Unchanged`] when no leaf extends `word`, or when
    /// `word` is itself a leaf.
    pub fn reduce_at(&mut self, word: &str) -> Result<Outcome> {
        let word = self.alphabet.parse(word)?;
        Ok(self.reduce_word(&word))
    }

    pub(crate) fn expand_word(&mut self, word: &Codeword) -> Outcome {
        let Some((prefix, label)) = self
            .covering_leaf(word)
            .map(|(leaf, label)| (leaf.clone(), label))
        else {
            return Outcome::Unchanged;
        };

        let k = self.alphabet.len();
        let spine = &word.symbols()[prefix.len()..];
        let mut fresh = Vec::with_capacity(spine.len() * (k - 1) + k);
        for (depth, &taken) in spine.iter().enumerate() {
            let stem = word.truncated(prefix.len() + depth);
            fresh.extend(
                self.alphabet
                    .indices()
                    .filter(|&s| s != taken)
                    .map(|s| stem.child(s)),
            );
        }
        fresh.extend(self.alphabet.indices().map(|s| word.child(s)));
        fresh.sort_unstable();

        let added = fresh.len();
        self.leaves.remove(&prefix);
        for v in self.leaves.values_mut() {
            if *v > label {
                *v += added - 1;
            }
        }
        self.leaves.extend(fresh.into_iter().zip(label..));
        self.reindex();

        tracing::trace!(
            word = %self.alphabet.spell(word),
            from = %self.alphabet.spell(&prefix),
            added,
            size = self.leaves.len(),
            "expanded"
        );
        Outcome::Changed
    }

    pub(crate) fn reduce_word(&mut self, word: &Codeword) -> Outcome {
        let doomed: Vec<(Codeword, Label)> = self
            .leaves
            .range(word..)
            .take_while(|(leaf, _)| word.is_prefix_of(leaf))
            .map(|(leaf, &label)| (leaf.clone(), label))
            .collect();
        match doomed.as_slice() {
            [] => return Outcome::Unchanged,
            [(only, _)] if only == word => return Outcome::Unchanged,
            _ => {}
        }

        let mut gone: Vec<Label> = doomed.iter().map(|&(_, label)| label).collect();
        gone.sort_unstable();
        let min = gone[0];
        for (leaf, _) in &doomed {
            self.leaves.remove(leaf);
        }
        // Rank-compact the survivors around `min`. For a contiguous run of
        // removed labels this is a plain shift down by `removed - 1`.
        for v in self.leaves.values_mut() {
            let old = *v;
            *v = old - gone.partition_point(|&r| r < old) + usize::from(old > min);
        }
        self.leaves.insert(word.clone(), min);
        self.reindex();

        tracing::trace!(
            word = %self.alphabet.spell(word),
            removed = doomed.len(),
            size = self.leaves.len(),
            "reduced"
        );
        Outcome::Changed
    }

    /// The leaf that is a prefix of `word`.
    ///
    /// In a prefix-free set such a leaf is the greatest key not above `word`.
    pub(crate) fn covering_leaf(&self, word: &Codeword) -> Option<(&Codeword, Label)> {
        self.leaves
            .range(..=word)
            .next_back()
            .filter(|(leaf, _)| leaf.is_prefix_of(word))
            .map(|(leaf, &label)| (leaf, label))
    }

    /// Replace the symbols of the alphabet, keeping the tree shape and labels.
    ///
    /// Leaves are stored by symbol position, so any alphabet of the same size
    /// is consistent with the current code.
    pub fn rename_alphabet(&mut self, alphabet: Alphabet) -> Result<()> {
        if alphabet.len() != self.alphabet.len() {
            return Err(Error::AlphabetSize {
                expected: self.alphabet.len(),
                got: alphabet.len(),
            });
        }
        self.alphabet = alphabet;
        Ok(())
    }

    /// Check the code invariants: symbols within the alphabet, no leaf a
    /// prefix of another, every internal node fully populated, labels a
    /// bijection onto `0..n`.
    pub fn validate(&self) -> Result<()> {
        if self.leaves.is_empty() {
            return Err(Error::invalid_code("no leaves"));
        }

        let k = self.alphabet.len() as SymbolIndex;
        let mut prev: Option<&Codeword> = None;
        for leaf in self.leaves.keys() {
            if let Some(&s) = leaf.symbols().iter().find(|&&s| s >= k) {
                return Err(Error::invalid_code(format!(
                    "symbol position {s} outside an alphabet of {k}"
                )));
            }
            // Sorted order puts any extension of `p` right after it.
            if let Some(p) = prev.filter(|p| p.is_prefix_of(leaf)) {
                return Err(Error::invalid_code(format!(
                    "`{}` is a prefix of `{}`",
                    self.spell(p),
                    self.spell(leaf)
                )));
            }
            prev = Some(leaf);
        }

        let internal: BTreeSet<Codeword> = self
            .leaves
            .keys()
            .flat_map(|leaf| (0..leaf.len()).map(move |n| leaf.truncated(n)))
            .collect();
        for node in &internal {
            for s in self.alphabet.indices() {
                let child = node.child(s);
                if !self.leaves.contains_key(&child) && !internal.contains(&child) {
                    return Err(Error::invalid_code(format!(
                        "no leaf at or below `{}`",
                        self.spell(&child)
                    )));
                }
            }
        }

        let n = self.leaves.len();
        let mut seen = vec![false; n];
        for &label in self.leaves.values() {
            match seen.get_mut(label) {
                Some(slot) if !*slot => *slot = true,
                _ => {
                    return Err(Error::invalid_code(format!(
                        "labels are not a bijection onto 0..{n}"
                    )))
                }
            }
        }
        Ok(())
    }

    pub(crate) fn reindex(&mut self) {
        let mut by_label = vec![Codeword::root(); self.leaves.len()];
        for (leaf, &label) in &self.leaves {
            by_label[label] = leaf.clone();
        }
        self.by_label = by_label;
    }
}

impl Default for PrefixCode {
    fn default() -> Self {
        Self::new()
    }
}

/// `[codeword label]` pairs in lexicographic order, joined by `", "`.
impl fmt::Display for PrefixCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (leaf, label)) in self.leaves.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "[{} {}]", self.alphabet.spell(leaf), label)?;
        }
        Ok(())
    }
}
