//! UI module for rendering the TUI

mod components;
mod form;
mod success;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if app.state.status.success {
        success::draw(frame, area);
    } else {
        form::draw(frame, area, app);
    }
}
