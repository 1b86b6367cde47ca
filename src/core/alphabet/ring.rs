/*!
Cyclic character rings.

A ring is an ordered set of unique characters with O(1) lookup from a
character to its position.
*/

use std::collections::HashMap;

/// Ordered, duplicate-free character set used for index arithmetic
#[derive(Debug, Clone)]
pub struct Ring {
    symbols: Vec<char>,
    positions: HashMap<char, usize>,
}

impl Ring {
    /// Build a ring from its symbols, in order.
    ///
    /// Only called with the constant symbol sets; a repeated symbol keeps
    /// its first position.
    pub(crate) fn new(symbols: &str) -> Self {
        let symbols: Vec<char> = symbols.chars().collect();
        let mut positions = HashMap::with_capacity(symbols.len());
        for (idx, &c) in symbols.iter().enumerate() {
            positions.entry(c).or_insert(idx);
        }

        Self { symbols, positions }
    }

    /// Number of symbols in the ring
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the ring has no symbols
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Check membership
    pub fn contains(&self, c: char) -> bool {
        self.positions.contains_key(&c)
    }

    /// Position of a character in the ring
    pub fn position(&self, c: char) -> Option<usize> {
        self.positions.get(&c).copied()
    }

    /// Character at a position
    pub fn symbol(&self, idx: usize) -> Option<char> {
        self.symbols.get(idx).copied()
    }

    /// All symbols, in ring order
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_and_symbol_agree() {
        let ring = Ring::new("xyz");
        assert_eq!(ring.len(), 3);
        for (idx, c) in "xyz".chars().enumerate() {
            assert_eq!(ring.position(c), Some(idx));
            assert_eq!(ring.symbol(idx), Some(c));
        }
    }

    #[test]
    fn test_missing_lookups() {
        let ring = Ring::new("xyz");
        assert!(!ring.contains('a'));
        assert_eq!(ring.position('a'), None);
        assert_eq!(ring.symbol(3), None);
    }

    #[test]
    fn test_repeated_symbol_keeps_first_position() {
        let ring = Ring::new("aba");
        assert_eq!(ring.position('a'), Some(0));
        assert_eq!(ring.len(), 3);
    }
}
