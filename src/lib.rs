// Pattern Lab - library exports for tests and benchmarks
//
// Four standalone, composable mechanisms, one module each:
// - feed:     publish/subscribe registry broadcasting price updates
// - beverage: transparent decorator chain over a base drink
// - command:  undoable command stack driving binary devices
// - factory:  construction dispatch from a runtime kind key
//
// The modules are independent; nothing flows between them. All of them are
// specified for single-threaded synchronous use and carry no internal
// locking.

pub mod beverage;
pub mod command;
pub mod factory;
pub mod feed;

// Re-export commonly used types for convenience
pub use beverage::{Beverage, BeverageError, SimpleCoffee};
pub use command::{Command, CommandError, HomeState, Power, RemoteControl};
pub use factory::{Burger, BurgerKitchen, FactoryError};
pub use feed::{PriceFeed, Subscriber};
