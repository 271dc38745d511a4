// RemoteControl - invoker with a pending command slot and undo/redo stacks

use crate::command::state::HomeState;
use crate::command::trait_def::{Command, CommandError, CommandResult};
use std::collections::VecDeque;

/// Default maximum number of commands to keep in history
const DEFAULT_MAX_HISTORY: usize = 100;

/// Invokes commands without knowing their receivers.
///
/// Holds one pending command at a time plus two stacks:
/// - Undo stack: commands that have been executed and can be undone
/// - Redo stack: commands that have been undone and can be re-executed
///
/// Pressing the button:
/// 1. Takes the pending command (error if none is set)
/// 2. Executes it and pushes it onto the undo stack
/// 3. Clears the redo stack (we are on a new timeline)
/// 4. Evicts the oldest history entry past the depth limit
///
/// Undo beyond the history depth is a harmless no-op, never an error.
pub struct RemoteControl {
    /// Command bound for the next button press
    pending: Option<Box<dyn Command>>,

    /// Executed commands, most recent at the back
    undo_stack: VecDeque<Box<dyn Command>>,

    /// Undone commands, most recent at the back
    redo_stack: VecDeque<Box<dyn Command>>,

    /// Maximum number of commands to keep in history
    max_history: usize,
}

impl RemoteControl {
    /// Create a remote with the default history depth
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_HISTORY)
    }

    /// Create a remote with a custom history depth
    pub fn with_capacity(max_history: usize) -> Self {
        Self {
            pending: None,
            undo_stack: VecDeque::with_capacity(max_history),
            redo_stack: VecDeque::with_capacity(max_history),
            max_history,
        }
    }

    /// Bind `command` to the next button press, replacing any previously
    /// bound command. History is not affected.
    pub fn set_command(&mut self, command: Box<dyn Command>) {
        self.pending = Some(command);
    }

    /// Execute the pending command and record it in history.
    ///
    /// The command moves into the history stack, so each press needs a
    /// fresh `set_command`. Returns the executed command's label.
    ///
    /// # Errors
    /// `NoCommandSet` if nothing is bound; whatever the command's own
    /// `execute` raises (in which case nothing is recorded).
    pub fn press_button(&mut self, state: &mut HomeState) -> CommandResult<String> {
        let mut command = self.pending.take().ok_or(CommandError::NoCommandSet)?;

        command.execute(state)?;
        let label = command.label();

        self.undo_stack.push_back(command);
        self.redo_stack.clear();

        if self.undo_stack.len() > self.max_history {
            self.undo_stack.pop_front();
        }

        Ok(label)
    }

    /// Undo the most recently executed command not yet undone.
    ///
    /// Returns the undone command's label, or `Ok(None)` when the history
    /// is empty (repeated undo past the history depth is harmless).
    pub fn press_undo(&mut self, state: &mut HomeState) -> CommandResult<Option<String>> {
        let Some(mut command) = self.undo_stack.pop_back() else {
            return Ok(None);
        };

        command.undo(state)?;
        let label = command.label();
        self.redo_stack.push_back(command);

        Ok(Some(label))
    }

    /// Re-execute the most recently undone command.
    ///
    /// Returns the redone command's label, or `Ok(None)` when there is
    /// nothing to redo.
    pub fn press_redo(&mut self, state: &mut HomeState) -> CommandResult<Option<String>> {
        let Some(mut command) = self.redo_stack.pop_back() else {
            return Ok(None);
        };

        command.execute(state)?;
        let label = command.label();
        self.undo_stack.push_back(command);

        Ok(Some(label))
    }

    /// Check if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Label of the command the next undo would reverse
    pub fn undo_label(&self) -> Option<String> {
        self.undo_stack.back().map(|cmd| cmd.label())
    }

    /// Label of the command the next redo would re-execute
    pub fn redo_label(&self) -> Option<String> {
        self.redo_stack.back().map(|cmd| cmd.label())
    }

    /// Number of commands in the undo stack
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of commands in the redo stack
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    /// Drop the pending command and all history
    pub fn clear(&mut self) {
        self.pending = None;
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for RemoteControl {
    fn default() -> Self {
        Self::new()
    }
}
