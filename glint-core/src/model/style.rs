//! Style types for highlighted text
//!
//! The highlighter only ever produces foreground, background and typeface
//! attributes. Underline and strikethrough exist so that attributes coming
//! from elsewhere can be described and carried through a highlight pass.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Packed ARGB color value. Treated as an opaque payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    /// Opaque color from RGB components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub const fn argb(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

/// Weight and slant of highlighted text
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Typeface {
    #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
}

impl Typeface {
    pub fn from_flags(bold: bool, italic: bool) -> Self {
        match (bold, italic) {
            (false, false) => Typeface::Normal,
            (true, false) => Typeface::Bold,
            (false, true) => Typeface::Italic,
            (true, true) => Typeface::BoldItalic,
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(self, Typeface::Bold | Typeface::BoldItalic)
    }

    pub fn is_italic(&self) -> bool {
        matches!(self, Typeface::Italic | Typeface::BoldItalic)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Typeface::Normal => "NORMAL",
            Typeface::Bold => "BOLD",
            Typeface::Italic => "ITALIC",
            Typeface::BoldItalic => "BOLD_ITALIC",
        }
    }
}

/// Category an attribute belongs to. Two attributes of the same kind
/// covering the same char conflict, and the later one wins.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum AttributeKind {
    Foreground,
    Background,
    Typeface,
    Underline,
    Strikethrough,
}

impl AttributeKind {
    pub fn all() -> &'static [AttributeKind] {
        &[
            AttributeKind::Foreground,
            AttributeKind::Background,
            AttributeKind::Typeface,
            AttributeKind::Underline,
            AttributeKind::Strikethrough,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeKind::Foreground => "foreground",
            AttributeKind::Background => "background",
            AttributeKind::Typeface => "typeface",
            AttributeKind::Underline => "underline",
            AttributeKind::Strikethrough => "strikethrough",
        }
    }
}

/// A single visual attribute attached to a range of text
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum StyleAttribute {
    Foreground(Color),
    Background(Color),
    Typeface(Typeface),
    Underline,
    Strikethrough,
}

impl StyleAttribute {
    pub fn kind(&self) -> AttributeKind {
        match self {
            StyleAttribute::Foreground(_) => AttributeKind::Foreground,
            StyleAttribute::Background(_) => AttributeKind::Background,
            StyleAttribute::Typeface(_) => AttributeKind::Typeface,
            StyleAttribute::Underline => AttributeKind::Underline,
            StyleAttribute::Strikethrough => AttributeKind::Strikethrough,
        }
    }
}

/// Highlight style configured on a highlighter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Style {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub bold: bool,
    pub italic: bool,
}

impl Style {
    /// True when the style would add nothing to a match
    pub fn is_empty(&self) -> bool {
        self.foreground.is_none() && self.background.is_none() && !self.bold && !self.italic
    }

    pub fn typeface(&self) -> Typeface {
        Typeface::from_flags(self.bold, self.italic)
    }

    /// Attributes attached to every matched range, in application order
    pub fn attributes(&self) -> Vec<StyleAttribute> {
        let mut attributes = Vec::with_capacity(3);
        if let Some(color) = self.foreground {
            attributes.push(StyleAttribute::Foreground(color));
        }
        if let Some(color) = self.background {
            attributes.push(StyleAttribute::Background(color));
        }
        attributes.push(StyleAttribute::Typeface(self.typeface()));
        attributes
    }
}

/// Effective attributes of a single char after all annotations are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolvedStyle {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub typeface: Option<Typeface>,
    pub underline: bool,
    pub strikethrough: bool,
}

impl ResolvedStyle {
    /// Layer an attribute on top, replacing any value of the same kind
    pub fn apply(&mut self, attribute: StyleAttribute) {
        match attribute {
            StyleAttribute::Foreground(color) => self.foreground = Some(color),
            StyleAttribute::Background(color) => self.background = Some(color),
            StyleAttribute::Typeface(typeface) => self.typeface = Some(typeface),
            StyleAttribute::Underline => self.underline = true,
            StyleAttribute::Strikethrough => self.strikethrough = true,
        }
    }

    /// The effective attribute of the given kind, if any
    pub fn attribute(&self, kind: AttributeKind) -> Option<StyleAttribute> {
        match kind {
            AttributeKind::Foreground => self.foreground.map(StyleAttribute::Foreground),
            AttributeKind::Background => self.background.map(StyleAttribute::Background),
            AttributeKind::Typeface => self.typeface.map(StyleAttribute::Typeface),
            AttributeKind::Underline => self.underline.then_some(StyleAttribute::Underline),
            AttributeKind::Strikethrough => {
                self.strikethrough.then_some(StyleAttribute::Strikethrough)
            }
        }
    }

    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}
