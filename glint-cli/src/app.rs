use std::rc::Rc;

use tracing::{debug, warn};

use glint_core::{shared, Color, Highlighter, Matcher, MatcherKind, SharedTarget};

use crate::color::parse_color;
use crate::config::Config;
use crate::quotes::Quote;

const FALLBACK_FOREGROUND: Color = Color::rgb(255, 0, 0);
const FALLBACK_BACKGROUND: Color = Color::rgb(255, 255, 0);

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Help,
}

/// Input field receiving typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Search,
    Foreground,
    Background,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::Search => Field::Foreground,
            Field::Foreground => Field::Background,
            Field::Background => Field::Search,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::Search => Field::Background,
            Field::Foreground => Field::Search,
            Field::Background => Field::Foreground,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Search => "Search",
            Field::Foreground => "Foreground",
            Field::Background => "Background",
        }
    }
}

/// A visible quote. Both texts are registered with the highlighter.
pub struct QuoteRow {
    pub author: SharedTarget,
    pub text: SharedTarget,
}

/// Demo application state
pub struct App {
    pub quotes: Vec<Quote>,
    pub rows: Vec<QuoteRow>,
    pub highlighter: Highlighter<SharedTarget>,
    pub matcher: MatcherKind,
    pub mode: Mode,
    pub focus: Field,
    pub running: bool,

    // Input fields
    pub search: String,
    pub foreground_input: String,
    pub background_input: String,

    pub scroll: usize,

    // Used when a color field is cleared
    default_foreground: Color,
    default_background: Color,

    // Status message
    pub status_message: Option<String>,
}

impl App {
    pub fn new(quotes: Vec<Quote>, config: &Config) -> Self {
        let default_foreground = config.foreground_color().unwrap_or_else(|err| {
            warn!("{:#}", err);
            FALLBACK_FOREGROUND
        });
        let default_background = config.background_color().unwrap_or_else(|err| {
            warn!("{:#}", err);
            FALLBACK_BACKGROUND
        });

        let mut highlighter = Highlighter::new();
        highlighter
            .set_foreground_color(default_foreground)
            .set_background_color(default_background)
            .set_bold(config.bold)
            .set_italic(config.italic);

        let mut app = Self {
            quotes,
            rows: Vec::new(),
            highlighter,
            matcher: config.matcher,
            mode: Mode::Normal,
            focus: Field::Search,
            running: true,

            search: String::new(),
            foreground_input: String::new(),
            background_input: String::new(),

            scroll: 0,

            default_foreground,
            default_background,

            status_message: None,
        };
        app.refresh_rows();
        app
    }

    /// Rebuild the visible rows for the current search and highlight them
    pub fn refresh_rows(&mut self) {
        let keyword = self.search.clone();
        let rows: Vec<QuoteRow> = self
            .quotes
            .iter()
            .filter(|q| {
                keyword.is_empty()
                    || self.matcher.is_highlightable(&q.author, &keyword)
                    || self.matcher.is_highlightable(&q.text, &keyword)
            })
            .map(|q| QuoteRow {
                author: shared(q.author.clone()),
                text: shared(q.text.clone()),
            })
            .collect();

        debug!(%keyword, visible = rows.len(), "filtered quotes");

        self.highlighter.reset_targets();
        for row in &rows {
            self.highlighter
                .add_target(Rc::clone(&row.author))
                .add_target(Rc::clone(&row.text));
        }
        self.rows = rows;
        self.scroll = 0;

        if let Err(e) = self.highlighter.highlight(&keyword, &self.matcher) {
            self.set_status(&format!("Highlight failed: {}", e));
        }
    }

    /// Repaint the current keyword after a style change
    pub fn invalidate(&mut self) {
        if let Err(e) = self.highlighter.invalidate(&self.matcher) {
            self.set_status(&format!("Highlight failed: {}", e));
        }
    }

    pub fn foreground_changed(&mut self) {
        if self.foreground_input.is_empty() {
            self.highlighter.set_foreground_color(self.default_foreground);
        } else {
            match parse_color(&self.foreground_input) {
                Ok(color) => {
                    self.highlighter.set_foreground_color(color);
                }
                Err(_) => {
                    self.highlighter.reset_foreground_color();
                }
            }
        }
        self.invalidate();
    }

    pub fn background_changed(&mut self) {
        if self.background_input.is_empty() {
            self.highlighter.set_background_color(self.default_background);
        } else {
            match parse_color(&self.background_input) {
                Ok(color) => {
                    self.highlighter.set_background_color(color);
                }
                Err(_) => {
                    self.highlighter.reset_background_color();
                }
            }
        }
        self.invalidate();
    }

    pub fn toggle_bold(&mut self) {
        let bold = !self.highlighter.style().bold;
        self.highlighter.set_bold(bold);
        self.invalidate();
    }

    pub fn toggle_italic(&mut self) {
        let italic = !self.highlighter.style().italic;
        self.highlighter.set_italic(italic);
        self.invalidate();
    }

    /// Switch between exact and case-insensitive matching
    pub fn toggle_matcher(&mut self) {
        self.matcher = self.matcher.toggled();
        self.refresh_rows();
        self.set_status(&format!("Matcher: {}", self.matcher.as_str()));
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        self.focused_input().push(c);
        self.field_changed();
    }

    /// Delete the last character of the focused field
    pub fn input_backspace(&mut self) {
        if self.focused_input().pop().is_some() {
            self.field_changed();
        }
    }

    fn focused_input(&mut self) -> &mut String {
        match self.focus {
            Field::Search => &mut self.search,
            Field::Foreground => &mut self.foreground_input,
            Field::Background => &mut self.background_input,
        }
    }

    fn field_changed(&mut self) {
        match self.focus {
            Field::Search => self.refresh_rows(),
            Field::Foreground => self.foreground_changed(),
            Field::Background => self.background_changed(),
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn scroll_down(&mut self) {
        if self.scroll + 1 < self.rows.len() {
            self.scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Set status message
    pub fn set_status(&mut self, msg: &str) {
        self.status_message = Some(msg.to_string());
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
