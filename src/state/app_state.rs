//! Application state definitions

use super::order::OrderForm;
use super::status::SubmitStatus;

/// Focused form row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveField {
    #[default]
    Color,
    Leg,
    SizeUpper,
    SizeLower,
    Submit,
}

impl ActiveField {
    pub fn next(&self) -> Self {
        match self {
            Self::Color => Self::Leg,
            Self::Leg => Self::SizeUpper,
            Self::SizeUpper => Self::SizeLower,
            Self::SizeLower => Self::Submit,
            Self::Submit => Self::Color,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Color => Self::Submit,
            Self::Leg => Self::Color,
            Self::SizeUpper => Self::Leg,
            Self::SizeLower => Self::SizeUpper,
            Self::Submit => Self::SizeLower,
        }
    }
}

/// Top-level application state: the order being edited, the submission
/// lifecycle, and which row has focus. Both structs live for the whole
/// session and are only mutated through the App handlers.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub order: OrderForm,
    pub status: SubmitStatus,
    pub active_field: ActiveField,
}

impl AppState {
    pub fn next_field(&mut self) {
        self.active_field = self.active_field.next();
    }

    pub fn prev_field(&mut self) {
        self.active_field = self.active_field.prev();
    }
}
