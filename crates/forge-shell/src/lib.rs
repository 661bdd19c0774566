//! The forge widget shell.
//!
//! Widgets are self-contained: each owns its state, its random source and
//! its history, and reacts to one line of input at a time. A [`Host`] holds
//! at most one mounted widget and tears the previous one down on every
//! mount, so switching widgets never leaves two alive.

pub mod config;
pub mod dice;
pub mod error;
pub mod host;
pub mod oracle;
pub mod render;
pub mod theme;

pub use config::ShellConfig;
pub use dice::DiceWidget;
pub use error::{ShellError, ShellResult};
pub use host::{Host, Widget, WidgetKind};
pub use oracle::OracleWidget;
pub use theme::{Theme, ThemeSignal, ThemeWatch};
