use tracing::{debug, trace, warn};

use crate::error::Result;
use crate::matcher::Matcher;
use crate::merge::merge_spans;
use crate::model::{AnnotatedText, Color, Style};
use crate::target::Target;

/// Highlights a keyword across a set of registered targets.
///
/// Style changes only show up on the next [`highlight`](Self::highlight) or
/// [`invalidate`](Self::invalidate) call.
#[derive(Debug)]
pub struct Highlighter<T> {
    style: Style,
    targets: Vec<T>,
    last_keyword: Option<String>,
}

impl<T: Target> Highlighter<T> {
    pub fn new() -> Self {
        Self {
            style: Style::default(),
            targets: Vec::new(),
            last_keyword: None,
        }
    }

    pub fn set_foreground_color(&mut self, color: Color) -> &mut Self {
        self.style.foreground = Some(color);
        self
    }

    pub fn reset_foreground_color(&mut self) -> &mut Self {
        self.style.foreground = None;
        self
    }

    pub fn set_background_color(&mut self, color: Color) -> &mut Self {
        self.style.background = Some(color);
        self
    }

    pub fn reset_background_color(&mut self) -> &mut Self {
        self.style.background = None;
        self
    }

    pub fn set_bold(&mut self, bold: bool) -> &mut Self {
        self.style.bold = bold;
        self
    }

    pub fn set_italic(&mut self, italic: bool) -> &mut Self {
        self.style.italic = italic;
        self
    }

    /// Register a target. Already registered and non-text targets are ignored.
    pub fn add_target(&mut self, target: T) -> &mut Self {
        if !target.is_text_bearing() {
            trace!("ignoring target that cannot hold text");
            return self;
        }

        let id = target.id();
        if self.targets.iter().any(|t| t.id() == id) {
            return self;
        }

        trace!(%id, "registered target");
        self.targets.push(target);
        self
    }

    /// Forget every target. Content already written to them stays.
    pub fn reset_targets(&mut self) -> &mut Self {
        self.targets.clear();
        self
    }

    /// Highlight `keyword` in every target.
    ///
    /// An empty keyword resets all targets to plain text. Matches are merged
    /// for every target before any target is written, so an invalid offset
    /// from `matcher` leaves all targets untouched.
    pub fn highlight<M: Matcher + ?Sized>(&mut self, keyword: &str, matcher: &M) -> Result<()> {
        self.last_keyword = Some(keyword.to_string());
        self.apply(matcher)
    }

    /// Highlight the last keyword again, e.g. after a style change
    pub fn invalidate<M: Matcher + ?Sized>(&mut self, matcher: &M) -> Result<()> {
        self.apply(matcher)
    }

    fn apply<M: Matcher + ?Sized>(&mut self, matcher: &M) -> Result<()> {
        let keyword = match self.last_keyword.clone() {
            Some(keyword) if !keyword.is_empty() => keyword,
            _ => {
                self.reset();
                return Ok(());
            }
        };

        debug!(%keyword, targets = self.targets.len(), "highlighting targets");
        let keyword_len = keyword.chars().count();

        let updates = self
            .targets
            .iter()
            .map(|target| {
                let content = target.content();
                let indices = matcher.match_indices(content.text(), &keyword);
                trace!(id = %target.id(), matches = indices.len(), "matched target");
                merge_spans(&content, keyword_len, &indices, &self.style)
            })
            .collect::<Result<Vec<AnnotatedText>>>()
            .map_err(|err| {
                warn!(%keyword, "matcher produced unusable matches: {}", err);
                err
            })?;

        for (target, content) in self.targets.iter_mut().zip(updates) {
            target.set_content(content);
        }

        Ok(())
    }

    fn reset(&mut self) {
        debug!(targets = self.targets.len(), "resetting targets to plain text");
        for target in &mut self.targets {
            let plain = target.content().to_plain();
            target.set_content(plain);
        }
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn targets(&self) -> &[T] {
        &self.targets
    }

    pub fn targets_mut(&mut self) -> &mut [T] {
        &mut self.targets
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    pub fn last_keyword(&self) -> Option<&str> {
        self.last_keyword.as_deref()
    }
}

impl<T: Target> Default for Highlighter<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::{CaseInsensitiveMatcher, ExactMatcher};
    use crate::model::{StyleAttribute, TextRange, Typeface};
    use crate::target::TextTarget;

    const RED: Color = Color::rgb(255, 0, 0);
    const YELLOW: Color = Color::rgb(255, 255, 0);

    fn highlighter(texts: &[&str]) -> Highlighter<TextTarget> {
        let mut highlighter = Highlighter::new();
        highlighter
            .set_foreground_color(RED)
            .set_background_color(YELLOW);
        for text in texts {
            highlighter.add_target(TextTarget::new(*text));
        }
        highlighter
    }

    #[test]
    fn test_setters_chain() {
        let mut highlighter: Highlighter<TextTarget> = Highlighter::new();
        highlighter
            .set_foreground_color(RED)
            .set_bold(true)
            .set_italic(true)
            .reset_foreground_color()
            .set_background_color(YELLOW);

        let style = highlighter.style();
        assert_eq!(style.foreground, None);
        assert_eq!(style.background, Some(YELLOW));
        assert_eq!(style.typeface(), Typeface::BoldItalic);
    }

    #[test]
    fn test_reset_color_applies_on_next_highlight() {
        let mut highlighter = highlighter(&[]);
        highlighter.reset_foreground_color();
        highlighter.add_target(TextTarget::new("a cat"));
        highlighter.highlight("cat", &ExactMatcher).unwrap();

        let text = highlighter.targets()[0].annotated();
        for index in 2..5 {
            let style = text.style_at(index);
            assert_eq!(style.foreground, None);
            assert_eq!(style.background, Some(YELLOW));
            assert_eq!(style.typeface, Some(Typeface::Normal));
        }

        highlighter.reset_background_color();
        highlighter.add_target(TextTarget::new("one cat"));
        highlighter.highlight("cat", &ExactMatcher).unwrap();

        let style = highlighter.targets()[1].annotated().style_at(4);
        assert_eq!(style.foreground, None);
        assert_eq!(style.background, None);
        assert_eq!(style.typeface, Some(Typeface::Normal));
    }

    #[test]
    fn test_highlight_every_target() {
        let mut highlighter = highlighter(&["Hello WORLD", "no match here", "world peace"]);
        highlighter.highlight("world", &CaseInsensitiveMatcher).unwrap();

        let targets = highlighter.targets();
        assert_eq!(targets[0].annotated().style_at(6).foreground, Some(RED));
        assert!(!targets[1].annotated().is_annotated());
        assert_eq!(targets[2].annotated().style_at(0).background, Some(YELLOW));
        assert_eq!(highlighter.last_keyword(), Some("world"));
    }

    #[test]
    fn test_empty_keyword_resets_targets() {
        let mut highlighter = highlighter(&["alpha beta"]);
        highlighter.set_bold(true);
        highlighter.highlight("beta", &ExactMatcher).unwrap();
        assert!(highlighter.targets()[0].annotated().is_annotated());

        highlighter.highlight("", &ExactMatcher).unwrap();
        assert_eq!(highlighter.targets()[0].annotated(), &AnnotatedText::new("alpha beta"));
    }

    #[test]
    fn test_reset_discards_foreign_annotations() {
        let content = AnnotatedText::new("foreign")
            .with_annotation(TextRange::new(0, 7), StyleAttribute::Underline);
        let mut highlighter = Highlighter::new();
        highlighter.add_target(TextTarget::with_content(content));

        highlighter.highlight("", &ExactMatcher).unwrap();
        assert!(!highlighter.targets()[0].annotated().is_annotated());
    }

    #[test]
    fn test_invalidate_applies_new_style() {
        let mut highlighter = highlighter(&["a cat"]);
        highlighter.highlight("cat", &ExactMatcher).unwrap();

        highlighter.set_foreground_color(YELLOW).set_italic(true);
        highlighter.invalidate(&ExactMatcher).unwrap();

        let style = highlighter.targets()[0].annotated().style_at(2);
        assert_eq!(style.foreground, Some(YELLOW));
        assert_eq!(style.typeface, Some(Typeface::Italic));
    }

    #[test]
    fn test_invalidate_without_keyword_resets() {
        let content = AnnotatedText::new("text")
            .with_annotation(TextRange::new(0, 4), StyleAttribute::Foreground(RED));
        let mut highlighter = Highlighter::new();
        highlighter.add_target(TextTarget::with_content(content));

        highlighter.invalidate(&ExactMatcher).unwrap();
        assert!(!highlighter.targets()[0].annotated().is_annotated());
        assert_eq!(highlighter.last_keyword(), None);
    }

    #[test]
    fn test_duplicate_target_registered_once() {
        let target = TextTarget::new("same");
        let mut highlighter = Highlighter::new();
        highlighter.add_target(target.clone());
        highlighter.add_target(target);
        assert_eq!(highlighter.target_count(), 1);
    }

    #[test]
    fn test_reset_targets_keeps_applied_content() {
        let mut highlighter = highlighter(&["cat"]);
        highlighter.highlight("cat", &ExactMatcher).unwrap();
        highlighter.reset_targets();
        assert_eq!(highlighter.target_count(), 0);

        // Nothing left to reset
        highlighter.highlight("", &ExactMatcher).unwrap();
        assert_eq!(highlighter.target_count(), 0);
    }
}
