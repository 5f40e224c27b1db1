use serde::{Deserialize, Serialize};

use super::{StyleAttribute, TextRange};

/// A style attribute attached to a text range
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Annotation {
    #[serde(flatten)]
    pub range: TextRange,
    pub attribute: StyleAttribute,
}

impl Annotation {
    pub fn new(range: TextRange, attribute: StyleAttribute) -> Self {
        Self { range, attribute }
    }
}
