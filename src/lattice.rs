//! The refinement lattice on codes over one alphabet.
//!
//! `A ≤ B` when every leaf of `B` extends some leaf of `A`: `B` is at least as
//! deep everywhere. The internal nodes of a complete code are the prefix
//! closure of its exposed carets, and expanding a trivial code at a set of
//! words produces exactly the closure of that set. Join and meet are therefore
//! built by expanding a fresh code at the union (join) or the pairwise common
//! prefixes (meet) of the two caret sets. Results carry the natural labelling.

use std::collections::BTreeSet;

use crate::alphabet::Alphabet;
use crate::code::PrefixCode;
use crate::codeword::Codeword;
use crate::error::{Error, Result};

impl PrefixCode {
    /// `true` if `self ≤ other` in the refinement order.
    pub fn precedes(&self, other: &PrefixCode) -> bool {
        self.alphabet == other.alphabet
            && other
                .leaves
                .keys()
                .all(|leaf| self.covering_leaf(leaf).is_some())
    }

    /// Least upper bound: the coarsest code refining both.
    pub fn join(&self, other: &PrefixCode) -> Result<PrefixCode> {
        self.check_same_alphabet(other)?;
        let mut carets = self.caret_words();
        carets.extend(other.caret_words());
        let joined = PrefixCode::from_carets(self.alphabet.clone(), &carets);
        tracing::debug!(
            left = self.len(),
            right = other.len(),
            carets = carets.len(),
            size = joined.len(),
            "join"
        );
        Ok(joined)
    }

    /// Greatest lower bound: the finest code that both refine.
    ///
    /// Each pair of exposed carets contributes its longest common prefix. The
    /// empty prefix is kept: two non-trivial codes always share the root
    /// caret.
    pub fn meet(&self, other: &PrefixCode) -> Result<PrefixCode> {
        self.check_same_alphabet(other)?;
        let ours = self.caret_words();
        let theirs = other.caret_words();
        let common: BTreeSet<Codeword> = ours
            .iter()
            .flat_map(|v| theirs.iter().map(move |w| v.common_prefix(w)))
            .collect();
        let met = PrefixCode::from_carets(self.alphabet.clone(), &common);
        tracing::debug!(
            left = self.len(),
            right = other.len(),
            common = common.len(),
            size = met.len(),
            "meet"
        );
        Ok(met)
    }

    /// Fresh code over `alphabet` expanded at every word of `carets`.
    ///
    /// Expanding at a word that is already internal does nothing, so the
    /// result does not depend on the order of `carets`.
    pub(crate) fn from_carets<'a>(
        alphabet: Alphabet,
        carets: impl IntoIterator<Item = &'a Codeword>,
    ) -> PrefixCode {
        let mut code = PrefixCode::with_alphabet(alphabet);
        for caret in carets {
            let _ = code.expand_word(caret);
        }
        code
    }

    fn check_same_alphabet(&self, other: &PrefixCode) -> Result<()> {
        if self.alphabet != other.alphabet {
            return Err(Error::AlphabetMismatch);
        }
        Ok(())
    }
}
