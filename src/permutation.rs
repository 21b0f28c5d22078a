//! Label bookkeeping: the permutation carried by a code's leaves.
//!
//! Labels live on the leaves and can be rearranged without touching the tree.
//! Reading the labels in lexicographic leaf order gives a [`Permutation`]
//! (`index -> label`).

use std::collections::BTreeMap;
use std::fmt;

use crate::code::{Label, PrefixCode};
use crate::codeword::Codeword;
use crate::error::{Error, Result};

/// A bijection of `0..n`, stored as its images.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Permutation {
    images: Vec<usize>,
}

impl Permutation {
    pub fn identity(n: usize) -> Self {
        Self {
            images: (0..n).collect(),
        }
    }

    /// `images[i]` is the image of `i`; must be a bijection of `0..images.len()`.
    pub fn new(images: Vec<usize>) -> Result<Self> {
        let n = images.len();
        let mut seen = vec![false; n];
        for &image in &images {
            match seen.get_mut(image) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(Error::NotAPermutation(n)),
            }
        }
        Ok(Self { images })
    }

    /// Build from `(preimage, image)` pairs; the preimages must be exactly
    /// `0..n`.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (usize, usize)>) -> Result<Self> {
        let map: BTreeMap<usize, usize> = pairs.into_iter().collect();
        let n = map.len();
        if map.keys().copied().ne(0..n) {
            return Err(Error::NotAPermutation(n));
        }
        Self::new(map.into_values().collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[inline]
    pub fn image(&self, i: usize) -> Option<usize> {
        self.images.get(i).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.images
    }

    /// The inverse bijection.
    pub fn inverse(&self) -> Self {
        let mut images = vec![0; self.images.len()];
        for (i, &image) in self.images.iter().enumerate() {
            images[image] = i;
        }
        Self { images }
    }
}

/// `[index image]` pairs in index order, joined by `", "`.
impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, image) in self.images.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "[{i} {image}]")?;
        }
        Ok(())
    }
}

impl PrefixCode {
    /// Labels read in lexicographic leaf order.
    pub fn permutation(&self) -> Permutation {
        Permutation {
            images: self.leaves.values().copied().collect(),
        }
    }

    /// Label of the leaf spelled `leaf`, or `None` if it is not a leaf.
    pub fn label_at_leaf(&self, leaf: &str) -> Option<Label> {
        let leaf = self.alphabet.parse(leaf).ok()?;
        self.leaves.get(&leaf).copied()
    }

    /// The leaf carrying `label`, or `None` if the label is out of range.
    pub fn leaf_at_label(&self, label: Label) -> Option<String> {
        self.by_label.get(label).map(|leaf| self.alphabet.spell(leaf))
    }

    /// Exchange the labels of two leaves.
    pub fn swap_labels(&mut self, a: &str, b: &str) -> Result<()> {
        let a = self.leaf_key(a)?;
        let b = self.leaf_key(b)?;
        let la = self.leaves[&a];
        let lb = self.leaves[&b];
        self.leaves.insert(a, lb);
        self.leaves.insert(b, la);
        self.by_label.swap(la, lb);
        Ok(())
    }

    /// Relabel every leaf `l -> perm(l)`.
    pub fn apply_permutation(&mut self, perm: &Permutation) -> Result<()> {
        if perm.len() != self.leaves.len() {
            return Err(Error::PermutationArity {
                expected: self.leaves.len(),
                got: perm.len(),
            });
        }
        for label in self.leaves.values_mut() {
            *label = perm.images[*label];
        }
        self.reindex();
        Ok(())
    }

    fn leaf_key(&self, leaf: &str) -> Result<Codeword> {
        let key = self.alphabet.parse(leaf)?;
        if !self.leaves.contains_key(&key) {
            return Err(Error::MissingCodeword(leaf.to_string()));
        }
        Ok(key)
    }
}
