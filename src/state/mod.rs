//! Application state module

mod app_state;
mod order;
mod status;

pub use app_state::*;
pub use order::*;
pub use status::*;
