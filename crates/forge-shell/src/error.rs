//! Error types for the widget shell.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for shell operations.
pub type ShellResult<T> = Result<T, ShellError>;

/// Errors surfaced to the user by a widget.
#[derive(Debug, Error, Diagnostic)]
pub enum ShellError {
    /// The input did not name a known command.
    #[error("unknown command: {0}")]
    #[diagnostic(code(forge::unknown_command), help("type 'help' for commands"))]
    UnknownCommand(String),

    /// A command was given bad arguments.
    #[error("usage: {0}")]
    #[diagnostic(code(forge::usage))]
    Usage(String),

    /// No widget goes by this name.
    #[error("unknown widget: {0}")]
    #[diagnostic(code(forge::unknown_widget), help("widgets are 'dice' and 'oracle'"))]
    UnknownWidget(String),

    /// The host has nothing mounted.
    #[error("no widget mounted")]
    #[diagnostic(code(forge::nothing_mounted))]
    NothingMounted,

    /// Dice error.
    #[error(transparent)]
    #[diagnostic(
        code(forge::dice),
        help("dice look like d20, and expressions like 3d6")
    )]
    Dice(#[from] forge_dice::DiceError),

    /// Oracle error.
    #[error(transparent)]
    #[diagnostic(code(forge::oracle))]
    Oracle(#[from] forge_oracle::OracleError),
}
