//! # tachsplit-tui
//!
//! Interactive single-screen tach splitter using ratatui with Elm
//! architecture.

pub mod copy;
pub mod fields;
pub mod footer;
pub mod header;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod styles;
pub mod summary;

pub use keymap::{map_key, KeyAction};
pub use messages::TuiMessage;
pub use model::{Field, TachApp};
pub use styles::ColorTheme;
