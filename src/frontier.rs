//! Exposed carets: internal nodes whose children are all leaves.

use std::collections::BTreeMap;

use crate::code::PrefixCode;
use crate::codeword::Codeword;

impl PrefixCode {
    /// Spelled exposed carets in lexicographic order.
    pub fn exposed_carets(&self) -> Vec<String> {
        self.caret_words()
            .iter()
            .map(|caret| self.alphabet.spell(caret))
            .collect()
    }

    /// Exposed carets as codewords, in lexicographic order.
    ///
    /// A parent qualifies once all `k` of its children show up as leaves.
    /// Leaves are distinct, so counting children per parent is enough.
    pub fn caret_words(&self) -> Vec<Codeword> {
        let k = self.alphabet.len();
        let mut children: BTreeMap<Codeword, usize> = BTreeMap::new();
        for leaf in self.leaves.keys() {
            if let Some(parent) = leaf.parent() {
                *children.entry(parent).or_default() += 1;
            }
        }
        children
            .into_iter()
            .filter(|&(_, n)| n == k)
            .map(|(parent, _)| parent)
            .collect()
    }
}
