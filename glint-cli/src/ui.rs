//! Terminal UI rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use glint_core::{AnnotatedText, Color as GlintColor, ResolvedStyle};

use crate::app::{App, Field, Mode};

// Catppuccin Mocha colors
const SURFACE0: Color = Color::Rgb(49, 50, 68);
const SURFACE1: Color = Color::Rgb(69, 71, 90);
const TEXT: Color = Color::Rgb(205, 214, 244);
const SUBTEXT0: Color = Color::Rgb(166, 173, 200);
const GREEN: Color = Color::Rgb(166, 227, 161);
const BLUE: Color = Color::Rgb(137, 180, 250);
const MAUVE: Color = Color::Rgb(203, 166, 247);

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Length(3), // Search field
            Constraint::Length(3), // Style controls
            Constraint::Min(0),    // Quote list
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_title_bar(frame, app, chunks[0]);
    draw_field(frame, app, Field::Search, &app.search, chunks[1]);
    draw_style_controls(frame, app, chunks[2]);
    draw_quotes(frame, app, chunks[3]);
    draw_status_bar(frame, app, chunks[4]);

    if app.mode == Mode::Help {
        draw_help(frame);
    }
}

fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let title_text = format!(
        " Glint - {} of {} quotes [{}]",
        app.rows.len(),
        app.quotes.len(),
        app.matcher.as_str()
    );

    let title_bar = Paragraph::new(title_text).style(Style::default().fg(TEXT).bg(SURFACE0));

    frame.render_widget(title_bar, area);
}

fn draw_field(frame: &mut Frame, app: &App, field: Field, value: &str, area: Rect) {
    let focused = app.focus == field;
    let border_style = if focused {
        Style::default().fg(BLUE)
    } else {
        Style::default().fg(SUBTEXT0)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(field.as_str());

    let text = if focused {
        format!("{}_", value)
    } else {
        value.to_string()
    };

    let input = Paragraph::new(text).style(Style::default().fg(TEXT)).block(block);
    frame.render_widget(input, area);
}

fn draw_style_controls(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // Foreground
            Constraint::Percentage(35), // Background
            Constraint::Percentage(30), // Typeface toggles
        ])
        .split(area);

    draw_field(frame, app, Field::Foreground, &app.foreground_input, chunks[0]);
    draw_field(frame, app, Field::Background, &app.background_input, chunks[1]);

    let style = app.highlighter.style();
    let toggle = |label: &str, on: bool| {
        let marker = if on { "[x]" } else { "[ ]" };
        let color = if on { GREEN } else { SUBTEXT0 };
        Span::styled(format!("{} {}  ", marker, label), Style::default().fg(color))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(SUBTEXT0))
        .title("Typeface");

    let toggles = Paragraph::new(Line::from(vec![
        toggle("Bold", style.bold),
        toggle("Italic", style.italic),
    ]))
    .block(block);

    frame.render_widget(toggles, chunks[2]);
}

fn draw_quotes(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(SUBTEXT0))
        .title(format!("Quotes ({})", app.rows.len()));

    let items: Vec<ListItem> = app
        .rows
        .iter()
        .skip(app.scroll)
        .map(|row| {
            let author = styled_line(row.author.borrow().annotated(), Style::default().fg(MAUVE));
            let quote = styled_line(row.text.borrow().annotated(), Style::default().fg(TEXT));
            ListItem::new(vec![author, quote, Line::from("")])
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

/// Render annotated text as a single line of styled spans
fn styled_line(text: &AnnotatedText, base: Style) -> Line<'static> {
    let spans: Vec<Span> = text
        .runs()
        .into_iter()
        .map(|run| Span::styled(run.text, run_style(&run.style, base)))
        .collect();
    Line::from(spans)
}

fn run_style(resolved: &ResolvedStyle, base: Style) -> Style {
    let mut style = base;
    if let Some(color) = resolved.foreground.and_then(terminal_color) {
        style = style.fg(color);
    }
    if let Some(color) = resolved.background.and_then(terminal_color) {
        style = style.bg(color);
    }
    if let Some(typeface) = resolved.typeface {
        if typeface.is_bold() {
            style = style.add_modifier(Modifier::BOLD);
        }
        if typeface.is_italic() {
            style = style.add_modifier(Modifier::ITALIC);
        }
    }
    if resolved.underline {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if resolved.strikethrough {
        style = style.add_modifier(Modifier::CROSSED_OUT);
    }
    style
}

/// Terminal cells have no alpha, so fully transparent colors are not drawn
fn terminal_color(color: GlintColor) -> Option<Color> {
    (color.alpha() != 0).then(|| Color::Rgb(color.red(), color.green(), color.blue()))
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status = app.status_message.as_deref().unwrap_or("");

    let help_hint = "Tab field | ^B bold | ^T italic | ^R matcher | ^E export | F1 help";

    let status_text = format!(
        " {} | {}",
        app.focus.as_str().to_uppercase(),
        if status.is_empty() { help_hint } else { status },
    );

    let status_bar = Paragraph::new(status_text).style(Style::default().fg(SUBTEXT0).bg(SURFACE0));

    frame.render_widget(status_bar, area);
}

fn draw_help(frame: &mut Frame) {
    let area = centered_rect(60, 17, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BLUE))
        .title("Help (press any key to close)");

    let heading = Style::default().fg(MAUVE).add_modifier(Modifier::BOLD);
    let help_text = vec![
        Line::from(Span::styled("Fields", heading)),
        Line::from("  Tab/S-Tab   Next/prev field"),
        Line::from("  Search      Keyword to highlight"),
        Line::from("  Colors      RRGGBB, AARRGGBB or a name"),
        Line::from("              (empty = default)"),
        Line::from(""),
        Line::from(Span::styled("Style", heading)),
        Line::from("  Ctrl-B      Toggle bold"),
        Line::from("  Ctrl-T      Toggle italic"),
        Line::from("  Ctrl-R      Exact / ignore case"),
        Line::from(""),
        Line::from(Span::styled("Other", heading)),
        Line::from("  Up/Down     Scroll quotes"),
        Line::from("  Ctrl-E      Export highlights as JSON"),
        Line::from("  Esc         Quit"),
    ];

    let paragraph = Paragraph::new(help_text)
        .style(Style::default().bg(SURFACE1))
        .block(block);
    frame.render_widget(paragraph, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
