//! Application state and core logic

use crate::backend::OrderApi;
use crate::state::{ActiveField, AppState, BraceColor, LegSide, SizeField};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the order submission endpoint
    backend: Box<dyn OrderApi>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(backend: Box<dyn OrderApi>) -> Self {
        Self {
            state: AppState::default(),
            backend,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event.
    ///
    /// All input is ignored while a submission is in flight; on the success
    /// screen only Enter ("continue") is handled.
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.state.status.fetching {
            return Ok(());
        }

        if self.state.status.success {
            if key.code == KeyCode::Enter {
                self.state.status.acknowledge_success();
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_field(),
            KeyCode::Enter if self.state.active_field == ActiveField::Submit => {
                self.submit_order().await;
            }
            _ => self.handle_field_key(key),
        }
        Ok(())
    }

    /// Route a key to the focused row
    fn handle_field_key(&mut self, key: KeyEvent) {
        match self.state.active_field {
            ActiveField::Color => match key.code {
                KeyCode::Left => self.state.order.set_color(BraceColor::Graphite),
                KeyCode::Right => self.state.order.set_color(BraceColor::Navy),
                KeyCode::Char(' ') => {
                    let next = self.state.order.color.toggle();
                    self.state.order.set_color(next);
                }
                _ => {}
            },
            ActiveField::Leg => match key.code {
                KeyCode::Left => self.state.order.set_leg(LegSide::Left),
                KeyCode::Right => self.state.order.set_leg(LegSide::Right),
                KeyCode::Char(' ') => {
                    let next = self.state.order.leg.toggle();
                    self.state.order.set_leg(next);
                }
                _ => {}
            },
            ActiveField::SizeUpper => self.edit_size(SizeField::Upper, key),
            ActiveField::SizeLower => self.edit_size(SizeField::Lower, key),
            ActiveField::Submit => {}
        }
    }

    /// Edit a size field through the sanitizer, then refresh the range
    /// advisory. The advisory is informational; the value is kept either way.
    fn edit_size(&mut self, field: SizeField, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => self.state.order.input_size_char(field, c),
            KeyCode::Backspace => self.state.order.backspace_size(field),
            _ => return,
        }
        let out_of_range = self.state.order.size_out_of_range(field);
        self.state.status.set_range_advisory(out_of_range);
    }

    /// Submit the order. A no-op while a submission is already in flight or
    /// the success screen is showing. The call runs to completion on this
    /// task; the form data is preserved on failure so the user can retry.
    async fn submit_order(&mut self) {
        if !self.state.status.begin_submit() {
            return;
        }

        tracing::info!(
            color = self.state.order.color.label(),
            leg = self.state.order.leg.label(),
            "submitting order"
        );

        let accepted = match self.backend.submit_order(&self.state.order).await {
            Ok(response) => response.is_success(),
            Err(err) => {
                tracing::warn!("order submission failed: {err}");
                false
            }
        };
        self.state.status.complete_submit(accepted);
    }
}
