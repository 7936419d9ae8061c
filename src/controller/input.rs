//! Key event handling

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::AppController;

impl AppController {
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // Carousel buttons
            KeyCode::Right | KeyCode::Char('l') => {
                self.document.carousel_next.dispatch("click");
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.document.carousel_prev.dispatch("click");
            }
            KeyCode::Char('t') | KeyCode::Char('T') => {
                self.theme.toggle(Instant::now());
            }
            // Stand-in for the OS flipping its appearance
            KeyCode::Char('o') | KeyCode::Char('O') => {
                let is_dark = !self.environment.is_dark();
                self.environment.set(is_dark);
            }
            _ => {}
        }
    }
}
