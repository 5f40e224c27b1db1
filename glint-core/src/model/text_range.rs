use serde::{Deserialize, Serialize};

/// A half-open range of text by `char` offsets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub struct TextRange {
    pub start_offset: usize,
    pub end_offset: usize,
}

impl TextRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start_offset: start.min(end),
            end_offset: start.max(end),
        }
    }

    /// Range covering `len` chars starting at `start`
    pub fn at(start: usize, len: usize) -> Self {
        Self::new(start, start + len)
    }

    /// Check if this range contains the given offset
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start_offset && offset < self.end_offset
    }

    pub fn len(&self) -> usize {
        self.end_offset - self.start_offset
    }

    pub fn is_empty(&self) -> bool {
        self.start_offset == self.end_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_orders_bounds() {
        let range = TextRange::new(9, 4);
        assert_eq!(range.start_offset, 4);
        assert_eq!(range.end_offset, 9);
        assert_eq!(range.len(), 5);
    }

    #[test]
    fn test_contains_is_half_open() {
        let range = TextRange::at(5, 5);
        assert!(!range.contains(4));
        assert!(range.contains(5));
        assert!(range.contains(9));
        assert!(!range.contains(10));
    }
}
