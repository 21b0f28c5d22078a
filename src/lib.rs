//! # prefcode
//!
//! Complete prefix codes over a finite ordered alphabet, i.e. finite complete
//! `k`-ary trees represented by their leaves, with a label permutation carried
//! on the leaves.
//!
//! A [`PrefixCode`] grows by [`expand_at`](PrefixCode::expand_at) and shrinks
//! by [`reduce_at`](PrefixCode::reduce_at), keeping its labels a bijection onto
//! `0..n` throughout. Codes over the same alphabet form a lattice under
//! refinement, with [`join`](PrefixCode::join) and [`meet`](PrefixCode::meet)
//! computed from their exposed carets.
//!
//! ## Example
//!
//! ```rust
//! use prefcode::{Outcome, PrefixCode};
//!
//! let mut code = PrefixCode::new();
//! assert_eq!(code.expand_at("1001").unwrap(), Outcome::Changed);
//! assert_eq!(
//!     code.to_string(),
//!     "[0 0], [1000 1], [10010 2], [10011 3], [101 4], [11 5]"
//! );
//!
//! assert_eq!(code.reduce_at("10").unwrap(), Outcome::Changed);
//! assert_eq!(code.to_string(), "[0 0], [10 1], [11 2]");
//!
//! // Nothing below `11101`: a routine no-op, not an error.
//! assert_eq!(code.reduce_at("11101").unwrap(), Outcome::Unchanged);
//! ```
//!
//! Codes are plain owned values: `clone()` is a deep copy, and a code is
//! mutated through `&mut` by a single owner.

pub mod alphabet;
pub mod code;
pub mod codeword;
pub mod config;
pub mod dfs;
pub mod error;
mod frontier;
mod lattice;
pub mod permutation;

pub use alphabet::{Alphabet, SENTINEL};
pub use code::{Label, Outcome, PrefixCode};
pub use codeword::{Codeword, SymbolIndex};
pub use config::{Config, InitialShape};
pub use dfs::{check_dfs, is_valid_dfs};
pub use error::{DfsDefect, Error, Result};
pub use permutation::Permutation;

#[cfg(test)]
mod proptests;
