pub mod annotated_text;
pub mod annotation;
pub mod style;
pub mod text_range;

pub use annotated_text::{AnnotatedText, StyledRun};
pub use annotation::Annotation;
pub use style::{AttributeKind, Color, ResolvedStyle, Style, StyleAttribute, Typeface};
pub use text_range::TextRange;
