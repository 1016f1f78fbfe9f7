//! Terminal setup and drawing for the chat window

use std::io::{self, stdout, Stdout};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::app::{ChatApp, Entry};
use crate::assistant::{Response, Tone};

/// Terminal type alias
pub type Terminal = ratatui::Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for the chat window
pub fn init_terminal() -> Result<Terminal> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = ratatui::Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Draw the transcript above a one-line input box
pub fn draw(frame: &mut Frame, app: &ChatApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(frame.area());

    draw_transcript(frame, app, chunks[0]);
    draw_input(frame, app, chunks[1]);
}

fn draw_transcript(frame: &mut Frame, app: &ChatApp, area: Rect) {
    let lines = transcript_lines(app.transcript(), app.name());

    // Newest lines stay in view
    let height = area.height.saturating_sub(2) as usize;
    let visible: Vec<Line> = lines
        .into_iter()
        .rev()
        .take(height)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    let paragraph = Paragraph::new(visible).block(
        Block::default()
            .title(app.name().to_string())
            .borders(Borders::ALL),
    );

    frame.render_widget(paragraph, area);
}

fn draw_input(frame: &mut Frame, app: &ChatApp, area: Rect) {
    let (title, style) = if app.is_closing() {
        ("Goodbye!", Style::default().fg(Color::DarkGray))
    } else {
        ("Say something (Enter to send, Esc to quit)", Style::default())
    };

    let paragraph = Paragraph::new(app.input().to_string())
        .style(style)
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(paragraph, area);

    if !app.is_closing() {
        let offset = app.input().chars().count() as u16;
        let x = (area.x + 1 + offset).min(area.right().saturating_sub(2));
        frame.set_cursor_position((x, area.y + 1));
    }
}

/// Color for a reply's style label
fn label_color(style: &str) -> Color {
    match style {
        "add-label" => Color::Green,
        "marked-label" => Color::Cyan,
        "unmark-label" => Color::Yellow,
        "delete-label" => Color::Magenta,
        "due-label" => Color::Blue,
        "error-label" => Color::Red,
        _ => Color::Gray,
    }
}

fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Message => Style::default(),
        Tone::Task => Style::default().fg(Color::Cyan),
        Tone::Error => Style::default().fg(Color::Red),
    }
}

fn reply_lines(response: &Response, name: &str) -> Vec<Line<'static>> {
    let color = label_color(response.kind.style());
    let header = Line::from(Span::styled(
        format!("{}:", name),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));

    std::iter::once(header)
        .chain(response.fragments.iter().map(|fragment| {
            Line::from(Span::styled(
                format!("  {}", fragment.text),
                tone_style(fragment.tone),
            ))
        }))
        .collect()
}

/// Flattens the conversation into display lines, a blank line between entries
pub fn transcript_lines(transcript: &[Entry], name: &str) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (i, entry) in transcript.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        match entry {
            Entry::User(text) => lines.push(
                Line::from(vec![
                    Span::styled("you: ", Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(text.clone()),
                ])
                .alignment(Alignment::Right),
            ),
            Entry::Reply(response) => lines.extend(reply_lines(response, name)),
        }
    }

    lines
}
