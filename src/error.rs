//! Error types for prefix code construction and manipulation.

use thiserror::Error;

/// Result type alias using the crate [`enum@Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Why a DFS string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsDefect {
    /// A character other than `0` or `1`.
    BadChar(char),
    /// The string does not open with a `1`.
    NoRootCaret,
    /// Leaf count disagrees with `(k-1) * carets + 1`.
    LeafCount { expected: usize, got: usize },
    /// Every open slot was closed before the final character (0-based position).
    ClosedEarly(usize),
}

impl std::fmt::Display for DfsDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DfsDefect::BadChar(c) => write!(f, "unexpected character `{c}`"),
            DfsDefect::NoRootCaret => f.write_str("must start with `1`"),
            DfsDefect::LeafCount { expected, got } => {
                write!(f, "expected {expected} leaves, found {got}")
            }
            DfsDefect::ClosedEarly(pos) => write!(f, "tree closed at position {pos}"),
        }
    }
}

/// Crate error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An alphabet needs at least one symbol.
    #[error("empty alphabet")]
    EmptyAlphabet,

    /// The sentinel symbol cannot be part of an alphabet.
    #[error("reserved symbol `{0}` in alphabet")]
    ReservedSymbol(char),

    /// Alphabet symbols must be distinct.
    #[error("duplicate symbol `{0}` in alphabet")]
    DuplicateSymbol(char),

    /// A word used a symbol outside the code's alphabet.
    #[error("symbol `{0}` is not in the alphabet")]
    UnknownSymbol(char),

    /// Binary operation between codes over different alphabets.
    #[error("codes are over different alphabets")]
    AlphabetMismatch,

    /// Replacement alphabet has the wrong number of symbols.
    #[error("alphabet has {got} symbols, expected {expected}")]
    AlphabetSize { expected: usize, got: usize },

    /// Codeword is not a leaf of the code.
    #[error("codeword `{0}` is not in the code")]
    MissingCodeword(String),

    /// Permutation size disagrees with the code's cardinality.
    #[error("permutation over {got} labels applied to a code with {expected} leaves")]
    PermutationArity { expected: usize, got: usize },

    /// Map is not a bijection of `0..n`.
    #[error("not a permutation of 0..{0}")]
    NotAPermutation(usize),

    /// Rejected DFS string.
    #[error("malformed DFS string: {0}")]
    MalformedDfs(DfsDefect),

    /// Leaf set or labelling breaks a prefix code invariant.
    #[error("invalid prefix code: {0}")]
    InvalidCode(String),
}

impl Error {
    /// Create an invalid code error
    pub fn invalid_code(msg: impl Into<String>) -> Self {
        Error::InvalidCode(msg.into())
    }
}
