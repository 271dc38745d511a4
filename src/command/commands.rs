// Concrete command implementations
//
// Each command pairs one device transition with its undo. execute() stores
// the device's previous power state; undo() restores exactly that value
// rather than blindly applying the inverse transition, so an idempotent
// execute still round-trips.

use crate::command::state::{HomeState, Power};
use crate::command::trait_def::{Command, CommandError, CommandResult};

/// Command to turn the light on
pub struct LightOnCommand {
    previous: Option<Power>,
}

impl LightOnCommand {
    pub fn new() -> Self {
        Self { previous: None }
    }
}

impl Default for LightOnCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for LightOnCommand {
    fn execute(&mut self, state: &mut HomeState) -> CommandResult<()> {
        self.previous = Some(state.light);
        state.set_light(Power::On);
        Ok(())
    }

    fn undo(&mut self, state: &mut HomeState) -> CommandResult<()> {
        let previous = self
            .previous
            .ok_or_else(|| CommandError::UndoFailed("no previous light state stored".into()))?;
        state.set_light(previous);
        Ok(())
    }

    fn label(&self) -> String {
        "Light On".to_string()
    }
}

/// Command to turn the light off
pub struct LightOffCommand {
    previous: Option<Power>,
}

impl LightOffCommand {
    pub fn new() -> Self {
        Self { previous: None }
    }
}

impl Default for LightOffCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for LightOffCommand {
    fn execute(&mut self, state: &mut HomeState) -> CommandResult<()> {
        self.previous = Some(state.light);
        state.set_light(Power::Off);
        Ok(())
    }

    fn undo(&mut self, state: &mut HomeState) -> CommandResult<()> {
        let previous = self
            .previous
            .ok_or_else(|| CommandError::UndoFailed("no previous light state stored".into()))?;
        state.set_light(previous);
        Ok(())
    }

    fn label(&self) -> String {
        "Light Off".to_string()
    }
}

/// Command to turn the TV on
pub struct TvOnCommand {
    previous: Option<Power>,
}

impl TvOnCommand {
    pub fn new() -> Self {
        Self { previous: None }
    }
}

impl Default for TvOnCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for TvOnCommand {
    fn execute(&mut self, state: &mut HomeState) -> CommandResult<()> {
        self.previous = Some(state.tv);
        state.set_tv(Power::On);
        Ok(())
    }

    fn undo(&mut self, state: &mut HomeState) -> CommandResult<()> {
        let previous = self
            .previous
            .ok_or_else(|| CommandError::UndoFailed("no previous TV state stored".into()))?;
        state.set_tv(previous);
        Ok(())
    }

    fn label(&self) -> String {
        "TV On".to_string()
    }
}

/// Command to turn the TV off
pub struct TvOffCommand {
    previous: Option<Power>,
}

impl TvOffCommand {
    pub fn new() -> Self {
        Self { previous: None }
    }
}

impl Default for TvOffCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for TvOffCommand {
    fn execute(&mut self, state: &mut HomeState) -> CommandResult<()> {
        self.previous = Some(state.tv);
        state.set_tv(Power::Off);
        Ok(())
    }

    fn undo(&mut self, state: &mut HomeState) -> CommandResult<()> {
        let previous = self
            .previous
            .ok_or_else(|| CommandError::UndoFailed("no previous TV state stored".into()))?;
        state.set_tv(previous);
        Ok(())
    }

    fn label(&self) -> String {
        "TV Off".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_stores_previous_state() {
        let mut state = HomeState::new();
        let mut cmd = LightOnCommand::new();

        cmd.execute(&mut state).unwrap();
        assert_eq!(state.light, Power::On);

        cmd.undo(&mut state).unwrap();
        assert_eq!(state.light, Power::Off);
    }

    #[test]
    fn test_idempotent_execute_still_round_trips() {
        let mut state = HomeState::new();
        state.set_light(Power::On);

        // Turning on an already-on light, then undoing, must leave it on.
        let mut cmd = LightOnCommand::new();
        cmd.execute(&mut state).unwrap();
        assert_eq!(state.light, Power::On);
        cmd.undo(&mut state).unwrap();
        assert_eq!(state.light, Power::On);
    }

    #[test]
    fn test_undo_before_execute_fails() {
        let mut state = HomeState::new();
        let mut cmd = TvOffCommand::new();

        let result = cmd.undo(&mut state);
        assert!(matches!(result, Err(CommandError::UndoFailed(_))));
        assert_eq!(state.tv, Power::Off);
    }
}
