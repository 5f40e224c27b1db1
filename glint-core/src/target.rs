//! Text-bearing targets a highlighter reads from and writes to

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::AnnotatedText;

/// Identity of a target, used to deduplicate registrations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetId(Uuid);

impl TargetId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TargetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Something that displays text the highlighter can decorate
pub trait Target {
    fn id(&self) -> TargetId;

    /// Current content, including any annotations already on it
    fn content(&self) -> AnnotatedText;

    /// Replace the displayed content
    fn set_content(&mut self, content: AnnotatedText);

    /// Elements that cannot show text are skipped on registration
    fn is_text_bearing(&self) -> bool {
        true
    }
}

/// In-memory text target.
///
/// Cloning keeps the id, so a clone counts as the same target.
#[derive(Debug, Clone)]
pub struct TextTarget {
    id: TargetId,
    content: AnnotatedText,
}

impl TextTarget {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_content(AnnotatedText::new(text))
    }

    pub fn with_content(content: AnnotatedText) -> Self {
        Self {
            id: TargetId::new(),
            content,
        }
    }

    /// Replace the text, discarding annotations
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = AnnotatedText::new(text);
    }

    pub fn text(&self) -> &str {
        self.content.text()
    }

    pub fn annotated(&self) -> &AnnotatedText {
        &self.content
    }
}

impl Target for TextTarget {
    fn id(&self) -> TargetId {
        self.id
    }

    fn content(&self) -> AnnotatedText {
        self.content.clone()
    }

    fn set_content(&mut self, content: AnnotatedText) {
        self.content = content;
    }
}

/// Target handle shared between the UI and a highlighter
pub type SharedTarget<T = TextTarget> = Rc<RefCell<T>>;

/// Wrap a fresh [`TextTarget`] in a shared handle
pub fn shared(text: impl Into<String>) -> SharedTarget {
    Rc::new(RefCell::new(TextTarget::new(text)))
}

impl<T: Target> Target for Rc<RefCell<T>> {
    fn id(&self) -> TargetId {
        self.borrow().id()
    }

    fn content(&self) -> AnnotatedText {
        self.borrow().content()
    }

    fn set_content(&mut self, content: AnnotatedText) {
        self.borrow_mut().set_content(content);
    }

    fn is_text_bearing(&self) -> bool {
        self.borrow().is_text_bearing()
    }
}
