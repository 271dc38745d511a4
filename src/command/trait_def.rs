// Command trait definition

use crate::command::state::HomeState;
use thiserror::Error;

/// Result type for command operations
pub type CommandResult<T> = Result<T, CommandError>;

/// Errors that can occur while driving commands
#[derive(Debug, Error)]
pub enum CommandError {
    /// pressButton with nothing bound to the invoker
    #[error("no command set: bind a command before pressing the button")]
    NoCommandSet,

    /// Undo invoked on a command that never executed
    #[error("undo failed: {0}")]
    UndoFailed(String),
}

/// A reversible action against the device state.
///
/// `execute` must store whatever it needs to restore the receiver to its
/// pre-execute state; `undo` performs that restoration. Both take the
/// central [`HomeState`] as `&mut`, so a command never owns its receiver.
///
/// # Example
/// ```
/// use patternlab::command::{Command, CommandError, CommandResult, HomeState, Power};
///
/// struct TvOn {
///     previous: Option<Power>,
/// }
///
/// impl Command for TvOn {
///     fn execute(&mut self, state: &mut HomeState) -> CommandResult<()> {
///         self.previous = Some(state.tv);
///         state.set_tv(Power::On);
///         Ok(())
///     }
///
///     fn undo(&mut self, state: &mut HomeState) -> CommandResult<()> {
///         let previous = self
///             .previous
///             .ok_or_else(|| CommandError::UndoFailed("never executed".into()))?;
///         state.set_tv(previous);
///         Ok(())
///     }
///
///     fn label(&self) -> String {
///         "TV On".to_string()
///     }
/// }
/// ```
pub trait Command: Send {
    /// Apply the action. Stores the previous receiver state for undo.
    fn execute(&mut self, state: &mut HomeState) -> CommandResult<()>;

    /// Restore the receiver to the state it had just before `execute` ran.
    fn undo(&mut self, state: &mut HomeState) -> CommandResult<()>;

    /// Human-readable name, e.g. for "Undo: Light On" style display.
    fn label(&self) -> String;
}
