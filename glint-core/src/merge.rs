//! Span merging
//!
//! Builds the annotated text for one target from its current content, the
//! match offsets of a keyword and the highlighter style.

use crate::error::{HighlightError, Result};
use crate::model::{AnnotatedText, AttributeKind, Style, TextRange};

/// Lay `style` over every match of a `keyword_len`-char keyword in `origin`.
///
/// Foreground, background and foreign annotations already on `origin` are
/// kept. Typeface annotations are dropped and recomputed from `style`, since
/// a range can only carry one typeface. With an empty text or an empty style
/// the result is the plain text.
///
/// The result is normalized, so merging the same keyword and style again
/// yields an equal value.
pub fn merge_spans(
    origin: &AnnotatedText,
    keyword_len: usize,
    indices: &[usize],
    style: &Style,
) -> Result<AnnotatedText> {
    let text_len = origin.char_len();
    for &offset in indices {
        let fits = offset
            .checked_add(keyword_len)
            .is_some_and(|end| end <= text_len);
        if !fits {
            return Err(HighlightError::InvalidMatchOffset {
                offset,
                keyword_len,
                text_len,
            });
        }
    }

    if origin.is_empty() || style.is_empty() {
        return Ok(origin.to_plain());
    }

    let mut merged = AnnotatedText::new(origin.text());
    for annotation in origin.annotations() {
        if annotation.attribute.kind() != AttributeKind::Typeface {
            merged.annotate(annotation.range, annotation.attribute);
        }
    }

    let attributes = style.attributes();
    for &offset in indices {
        let range = TextRange::at(offset, keyword_len);
        for &attribute in &attributes {
            merged.annotate(range, attribute);
        }
    }

    Ok(merged.normalized())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Annotation, Color, StyleAttribute, Typeface};

    const RED: Color = Color::rgb(255, 0, 0);
    const YELLOW: Color = Color::rgb(255, 255, 0);
    const GREEN: Color = Color::rgb(0, 255, 0);

    fn highlight_style() -> Style {
        Style {
            foreground: Some(RED),
            background: Some(YELLOW),
            bold: true,
            italic: false,
        }
    }

    #[test]
    fn test_annotates_each_match() {
        let origin = AnnotatedText::new("a cat, a hat");
        let merged = merge_spans(&origin, 3, &[2, 9], &highlight_style()).unwrap();

        let expected: Vec<Annotation> = [2, 9]
            .into_iter()
            .flat_map(|start| {
                let range = TextRange::at(start, 3);
                [
                    Annotation::new(range, StyleAttribute::Foreground(RED)),
                    Annotation::new(range, StyleAttribute::Background(YELLOW)),
                    Annotation::new(range, StyleAttribute::Typeface(Typeface::Bold)),
                ]
            })
            .collect();
        assert_eq!(merged.annotations(), expected.as_slice());
        assert_eq!(merged.text(), "a cat, a hat");
    }

    #[test]
    fn test_typeface_only_style_still_marks_matches() {
        let style = Style {
            italic: true,
            ..Default::default()
        };
        let merged = merge_spans(&AnnotatedText::new("xyz"), 1, &[1], &style).unwrap();
        assert_eq!(
            merged.annotations(),
            &[Annotation::new(
                TextRange::new(1, 2),
                StyleAttribute::Typeface(Typeface::Italic)
            )]
        );
    }

    #[test]
    fn test_color_only_style_uses_normal_typeface() {
        let style = Style {
            background: Some(YELLOW),
            ..Default::default()
        };
        let merged = merge_spans(&AnnotatedText::new("xyz"), 2, &[0], &style).unwrap();
        assert_eq!(merged.style_at(0).typeface, Some(Typeface::Normal));
        assert_eq!(merged.style_at(1).background, Some(YELLOW));
        assert!(merged.style_at(2).is_plain());
    }

    #[test]
    fn test_empty_style_returns_plain_text() {
        let origin = AnnotatedText::new("abc")
            .with_annotation(TextRange::new(0, 3), StyleAttribute::Foreground(GREEN));
        let merged = merge_spans(&origin, 1, &[0], &Style::default()).unwrap();
        assert_eq!(merged, AnnotatedText::new("abc"));
    }

    #[test]
    fn test_empty_text_is_unchanged() {
        let merged = merge_spans(&AnnotatedText::new(""), 3, &[], &highlight_style()).unwrap();
        assert_eq!(merged, AnnotatedText::new(""));
    }

    #[test]
    fn test_keeps_colors_and_drops_typefaces() {
        let origin = AnnotatedText::new("one two three")
            .with_annotation(TextRange::new(0, 3), StyleAttribute::Foreground(GREEN))
            .with_annotation(TextRange::new(0, 3), StyleAttribute::Typeface(Typeface::Italic))
            .with_annotation(TextRange::new(8, 13), StyleAttribute::Underline);
        let style = Style {
            background: Some(YELLOW),
            ..Default::default()
        };

        let merged = merge_spans(&origin, 3, &[4], &style).unwrap();

        assert_eq!(merged.style_at(0).foreground, Some(GREEN));
        assert_eq!(merged.style_at(0).typeface, None);
        assert!(merged.style_at(10).underline);
        assert_eq!(merged.style_at(5).background, Some(YELLOW));
        assert_eq!(merged.style_at(5).typeface, Some(Typeface::Normal));
    }

    #[test]
    fn test_new_color_wins_without_erasing_other_kinds() {
        let origin = AnnotatedText::new("abcdef")
            .with_annotation(TextRange::new(0, 6), StyleAttribute::Foreground(GREEN))
            .with_annotation(TextRange::new(0, 6), StyleAttribute::Underline);
        let merged = merge_spans(&origin, 2, &[2], &highlight_style()).unwrap();

        assert_eq!(merged.style_at(1).foreground, Some(GREEN));
        assert_eq!(merged.style_at(2).foreground, Some(RED));
        assert!(merged.style_at(2).underline);
        assert_eq!(merged.style_at(4).foreground, Some(GREEN));
    }

    #[test]
    fn test_overlapping_matches_coalesce() {
        let merged = merge_spans(&AnnotatedText::new("aaa"), 2, &[0, 1], &highlight_style()).unwrap();
        let whole = TextRange::new(0, 3);
        assert_eq!(
            merged.annotations(),
            &[
                Annotation::new(whole, StyleAttribute::Foreground(RED)),
                Annotation::new(whole, StyleAttribute::Background(YELLOW)),
                Annotation::new(whole, StyleAttribute::Typeface(Typeface::Bold)),
            ]
        );
    }

    #[test]
    fn test_merge_is_idempotent() {
        let origin = AnnotatedText::new("the cat sat on the mat")
            .with_annotation(TextRange::new(0, 7), StyleAttribute::Foreground(GREEN));
        let style = highlight_style();

        let once = merge_spans(&origin, 3, &[0, 15], &style).unwrap();
        let twice = merge_spans(&once, 3, &[0, 15], &style).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_rejects_out_of_range_offset() {
        let err = merge_spans(&AnnotatedText::new("short"), 3, &[0, 4], &highlight_style())
            .unwrap_err();
        match err {
            HighlightError::InvalidMatchOffset {
                offset,
                keyword_len,
                text_len,
            } => {
                assert_eq!((offset, keyword_len, text_len), (4, 3, 5));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_offsets_even_with_empty_style() {
        assert!(merge_spans(&AnnotatedText::new("ab"), 1, &[2], &Style::default()).is_err());
    }
}
