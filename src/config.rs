//! Construction options for [`PrefixCode`](crate::PrefixCode).

use crate::alphabet::Alphabet;

/// Shape of a freshly built code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InitialShape {
    /// Only the root, rendered as the sentinel.
    #[default]
    Trivial,
    /// The root expanded once: one leaf per alphabet symbol.
    OneLevel,
}

/// Configuration for building a prefix code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Alphabet bounding the branching factor
    pub alphabet: Alphabet,
    /// Shape the code starts in
    pub shape: InitialShape,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::binary(),
            shape: InitialShape::Trivial,
        }
    }
}

impl Config {
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    pub fn with_shape(mut self, shape: InitialShape) -> Self {
        self.shape = shape;
        self
    }
}
