// Command Pattern - undoable device commands
//
// Decouples the invoker (RemoteControl) from the receivers it drives (the
// devices in HomeState). Every state-changing action is a Command that knows
// how to reverse itself.
//
// Architecture:
// - Command trait: defines execute(), undo(), label()
// - RemoteControl: pending command slot + undo/redo stacks
// - Concrete commands: LightOnCommand, TvOffCommand, etc.
//
// Commands store the pre-execute device state and restore exactly that on
// undo, so execute-then-undo is an identity even when execute was a no-op
// (turning on a light that was already on).

pub mod commands;
pub mod invoker;
pub mod state;
pub mod trait_def;

pub use commands::{LightOffCommand, LightOnCommand, TvOffCommand, TvOnCommand};
pub use invoker::RemoteControl;
pub use state::{HomeState, Power};
pub use trait_def::{Command, CommandError, CommandResult};
