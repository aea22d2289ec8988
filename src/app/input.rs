// Key event handling: maps key presses to actions.

use crate::action::Action;
use crate::app::App;
use crate::components::Component;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<()> {
        use KeyCode::Char;

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == Char('c') {
            self.action_tx.send(Action::Quit)?;
            return Ok(());
        }

        // Overlays consume all keys
        if self.about.is_visible() {
            self.about.handle_key_event(key)?;
            return Ok(());
        }
        if self.show_help {
            self.action_tx.send(Action::HideHelp)?;
            return Ok(());
        }

        match key.code {
            Char('q') => self.action_tx.send(Action::Quit)?,
            Char('?') => self.action_tx.send(Action::ShowHelp)?,
            Char('a') => self.action_tx.send(Action::ShowAbout)?,
            Char('r') => self.action_tx.send(Action::RefreshSchedule)?,
            _ => {
                self.schedule.handle_key_event(key)?;
            }
        }
        Ok(())
    }
}
