//! Depth-first bracket strings describing a code's shape.
//!
//! Walking the tree in preorder with children in alphabet order, each internal
//! node writes `1` and each leaf writes `0`. Over an alphabet of size `k`, a
//! tree with `c` internal nodes has `(k - 1) * c + 1` leaves. The trivial code
//! (a lone root leaf) has no encoding: a valid string starts with `1`.
//!
//! ```rust
//! use prefcode::{Alphabet, PrefixCode};
//!
//! let code = PrefixCode::from_dfs(Alphabet::binary(), "1100100").unwrap();
//! assert_eq!(code.to_string(), "[00 0], [01 1], [10 2], [11 3]");
//! assert_eq!(code.to_dfs().as_deref(), Some("1100100"));
//! ```

use std::collections::BTreeSet;

use crate::alphabet::Alphabet;
use crate::code::PrefixCode;
use crate::codeword::Codeword;
use crate::error::{DfsDefect, Error, Result};

/// Check that `dfs` describes a complete tree of branching factor `arity`.
pub fn check_dfs(arity: usize, dfs: &str) -> Result<()> {
    let defect = |d| Err(Error::MalformedDfs(d));

    if let Some(c) = dfs.chars().find(|&c| c != '0' && c != '1') {
        return defect(DfsDefect::BadChar(c));
    }
    if !dfs.starts_with('1') {
        return defect(DfsDefect::NoRootCaret);
    }

    let carets = dfs.bytes().filter(|&b| b == b'1').count();
    let leaves = dfs.len() - carets;
    let expected = arity.saturating_sub(1) * carets + 1;
    if leaves != expected {
        return defect(DfsDefect::LeafCount {
            expected,
            got: leaves,
        });
    }

    // Open slots: the root, plus `k - 1` per caret, minus one per leaf.
    let last = dfs.len() - 1;
    let mut open = 1usize;
    for (pos, b) in dfs.bytes().enumerate() {
        if b == b'1' {
            open += arity.saturating_sub(1);
        } else {
            open -= 1;
        }
        if open == 0 && pos < last {
            return defect(DfsDefect::ClosedEarly(pos));
        }
    }
    Ok(())
}

pub fn is_valid_dfs(arity: usize, dfs: &str) -> bool {
    check_dfs(arity, dfs).is_ok()
}

impl PrefixCode {
    /// Build the code described by `dfs`, with the natural labelling.
    pub fn from_dfs(alphabet: Alphabet, dfs: &str) -> Result<Self> {
        if let Err(e) = check_dfs(alphabet.len(), dfs) {
            tracing::debug!(dfs, error = %e, "rejected DFS string");
            return Err(e);
        }

        // Children go on the stack in reverse so they pop in alphabet order.
        let mut stack = vec![Codeword::root()];
        let mut leaves = Vec::new();
        for b in dfs.bytes() {
            let Some(top) = stack.pop() else {
                break;
            };
            if b == b'1' {
                stack.extend(alphabet.indices().rev().map(|s| top.child(s)));
            } else {
                leaves.push(top);
            }
        }

        // Parents of leaves include every exposed caret; expanding the rest is
        // a no-op or covered by the closure.
        let cores: BTreeSet<Codeword> = leaves.iter().filter_map(Codeword::parent).collect();
        Ok(Self::from_carets(alphabet, &cores))
    }

    /// Replace this code's shape with the one described by `dfs`.
    ///
    /// On error the code is left as it was.
    pub fn load_dfs(&mut self, dfs: &str) -> Result<()> {
        *self = Self::from_dfs(self.alphabet.clone(), dfs)?;
        Ok(())
    }

    /// Preorder encoding of the shape, or `None` for the trivial code.
    pub fn to_dfs(&self) -> Option<String> {
        if self.is_trivial() {
            return None;
        }
        let mut out = String::with_capacity(2 * self.len());
        let mut stack = vec![Codeword::root()];
        while let Some(node) = stack.pop() {
            if self.leaves.contains_key(&node) {
                out.push('0');
            } else {
                out.push('1');
                stack.extend(self.alphabet.indices().rev().map(|s| node.child(s)));
            }
        }
        Some(out)
    }
}
