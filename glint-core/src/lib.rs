//! Glint Core - keyword highlighting engine
//!
//! Finds every occurrence of a keyword in a set of texts and lays style
//! annotations (colors, weight, slant) over the matches, keeping compatible
//! annotations that were already there. Rendering the result is left to the
//! embedding UI.

pub mod error;
pub mod export;
pub mod highlighter;
pub mod matcher;
pub mod merge;
pub mod model;
pub mod target;

pub use error::{HighlightError, Result};
pub use export::{to_json, ExportAnnotation, ExportDocument, ExportTarget};
pub use highlighter::Highlighter;
pub use matcher::{CaseInsensitiveMatcher, ExactMatcher, Matcher, MatcherKind};
pub use merge::merge_spans;
pub use model::{
    AnnotatedText, Annotation, AttributeKind, Color, ResolvedStyle, Style, StyleAttribute,
    StyledRun, TextRange, Typeface,
};
pub use target::{shared, SharedTarget, Target, TargetId, TextTarget};
