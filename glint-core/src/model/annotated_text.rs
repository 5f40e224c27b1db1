use serde::{Deserialize, Serialize};

use super::{Annotation, AttributeKind, ResolvedStyle, StyleAttribute, TextRange};

/// Text together with the style annotations laid over it.
///
/// Annotations are kept in application order. Annotations of different kinds
/// compose; where two of the same kind overlap, the later one wins for the
/// overlapped chars.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnnotatedText {
    text: String,
    #[serde(default)]
    annotations: Vec<Annotation>,
}

/// A maximal run of chars sharing one resolved style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    pub range: TextRange,
    pub text: String,
    pub style: ResolvedStyle,
}

impl AnnotatedText {
    /// Plain text without annotations
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            annotations: Vec::new(),
        }
    }

    pub fn with_annotation(mut self, range: TextRange, attribute: StyleAttribute) -> Self {
        self.annotate(range, attribute);
        self
    }

    pub fn annotate(&mut self, range: TextRange, attribute: StyleAttribute) {
        self.annotations.push(Annotation::new(range, attribute));
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn is_annotated(&self) -> bool {
        !self.annotations.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Length in chars, the unit all offsets are expressed in
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Same text with every annotation stripped
    pub fn to_plain(&self) -> Self {
        Self::new(self.text.clone())
    }

    /// Effective style of the char at `index`
    pub fn style_at(&self, index: usize) -> ResolvedStyle {
        let mut style = ResolvedStyle::default();
        for annotation in &self.annotations {
            if annotation.range.contains(index) {
                style.apply(annotation.attribute);
            }
        }
        style
    }

    /// Effective style of every char, in order
    pub fn resolve(&self) -> Vec<ResolvedStyle> {
        let len = self.char_len();
        let mut styles = vec![ResolvedStyle::default(); len];
        for annotation in &self.annotations {
            let end = annotation.range.end_offset.min(len);
            for style in styles.iter_mut().take(end).skip(annotation.range.start_offset) {
                style.apply(annotation.attribute);
            }
        }
        styles
    }

    /// Split the text into runs of identical resolved style, for renderers
    pub fn runs(&self) -> Vec<StyledRun> {
        let styles = self.resolve();
        let mut runs: Vec<StyledRun> = Vec::new();

        for (index, (c, style)) in self.text.chars().zip(styles).enumerate() {
            match runs.last_mut() {
                Some(run) if run.style == style => {
                    run.text.push(c);
                    run.range.end_offset = index + 1;
                }
                _ => runs.push(StyledRun {
                    range: TextRange::at(index, 1),
                    text: c.to_string(),
                    style,
                }),
            }
        }

        runs
    }

    /// Canonical form with the same rendering.
    ///
    /// For each attribute kind the effective value of every char is resolved
    /// and contiguous equal values are coalesced into a single annotation.
    /// The result is ordered by start offset, then by kind. Two texts that
    /// render identically normalize to equal values.
    pub fn normalized(&self) -> Self {
        let styles = self.resolve();
        let mut annotations = Vec::new();

        for &kind in AttributeKind::all() {
            let mut current: Option<(usize, StyleAttribute)> = None;
            for (index, style) in styles.iter().enumerate() {
                let attribute = style.attribute(kind);
                match (current, attribute) {
                    (Some((_, open)), Some(next)) if open == next => {}
                    _ => {
                        if let Some((start, open)) = current.take() {
                            annotations.push(Annotation::new(TextRange::new(start, index), open));
                        }
                        current = attribute.map(|next| (index, next));
                    }
                }
            }
            if let Some((start, open)) = current {
                annotations.push(Annotation::new(TextRange::new(start, styles.len()), open));
            }
        }

        // Stable sort keeps kind order for annotations starting together
        annotations.sort_by_key(|a| a.range.start_offset);

        Self {
            text: self.text.clone(),
            annotations,
        }
    }
}

impl From<&str> for AnnotatedText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for AnnotatedText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
