//! Chat window state and key handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::event::{Event, EventHandler};
use super::ui::{self, Terminal};
use crate::assistant::{Assistant, Response};
use crate::storage::DisplayConfig;

/// Ticks the farewell stays on screen after `bye`
const CLOSING_TICKS: u8 = 4;

/// One entry in the conversation
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    User(String),
    Reply(Response),
}

pub struct ChatApp<'a> {
    assistant: &'a mut Assistant,
    display: &'a DisplayConfig,
    transcript: Vec<Entry>,
    input: String,
    closing: Option<u8>,
    should_quit: bool,
}

impl<'a> ChatApp<'a> {
    pub fn new(assistant: &'a mut Assistant, display: &'a DisplayConfig) -> Self {
        let greeting = Assistant::greeting(&display.name);
        Self {
            assistant,
            display,
            transcript: vec![Entry::Reply(greeting)],
            input: String::new(),
            closing: None,
            should_quit: false,
        }
    }

    /// Run the main loop until the user quits or says bye
    pub fn run(&mut self, terminal: &mut Terminal, events: EventHandler) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, &*self))?;

            match events.next()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize => {}
                Event::Tick => self.tick(),
            }
        }

        Ok(())
    }

    pub fn transcript(&self) -> &[Entry] {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn name(&self) -> &str {
        &self.display.name
    }

    pub fn is_closing(&self) -> bool {
        self.closing.is_some()
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.is_closing() {
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
    }

    fn submit(&mut self) {
        let line = std::mem::take(&mut self.input);
        if line.trim().is_empty() {
            return;
        }

        let response = self.assistant.respond(&line);
        if response.exit {
            self.closing = Some(CLOSING_TICKS);
        }

        self.transcript.push(Entry::User(line));
        self.transcript.push(Entry::Reply(response));
    }

    fn tick(&mut self) {
        match self.closing {
            Some(0) => self.should_quit = true,
            Some(left) => self.closing = Some(left - 1),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::CommandKind;
    use crate::domain::TaskList;

    fn press(app: &mut ChatApp, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_line(app: &mut ChatApp, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn starts_with_greeting() {
        let mut assistant = Assistant::new(TaskList::new());
        let display = DisplayConfig::default();
        let app = ChatApp::new(&mut assistant, &display);

        assert_eq!(app.transcript().len(), 1);
        assert_eq!(app.name(), "Flash");
    }

    #[test]
    fn enter_sends_the_line() {
        let mut assistant = Assistant::new(TaskList::new());
        let display = DisplayConfig::default();
        let mut app = ChatApp::new(&mut assistant, &display);

        type_line(&mut app, "todo read book");
        assert_eq!(app.transcript().len(), 3);
        assert!(app.input().is_empty());

        match &app.transcript()[2] {
            Entry::Reply(response) => assert_eq!(response.kind, CommandKind::Add),
            other => panic!("expected a reply, got {:?}", other),
        }
    }

    #[test]
    fn backspace_edits_and_blank_lines_are_ignored() {
        let mut assistant = Assistant::new(TaskList::new());
        let display = DisplayConfig::default();
        let mut app = ChatApp::new(&mut assistant, &display);

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('b'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input(), "a");

        press(&mut app, KeyCode::Backspace);
        type_line(&mut app, "   ");
        assert_eq!(app.transcript().len(), 1);
    }

    #[test]
    fn bye_closes_after_a_few_ticks() {
        let mut assistant = Assistant::new(TaskList::new());
        let display = DisplayConfig::default();
        let mut app = ChatApp::new(&mut assistant, &display);

        type_line(&mut app, "bye");
        assert!(app.is_closing());
        assert!(!app.should_quit);

        // Typing is ignored while closing
        press(&mut app, KeyCode::Char('x'));
        assert!(app.input().is_empty());

        for _ in 0..=CLOSING_TICKS {
            app.tick();
        }
        assert!(app.should_quit);
    }

    #[test]
    fn escape_quits() {
        let mut assistant = Assistant::new(TaskList::new());
        let display = DisplayConfig::default();
        let mut app = ChatApp::new(&mut assistant, &display);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
