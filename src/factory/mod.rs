// Factory Pattern - construction dispatch over a runtime key
//
// A BurgerKitchen maps a kind string to a plain constructor function and
// builds products through it. Unrecognized kinds come back as a typed
// UnknownVariant error instead of a thrown exception, and there is no
// singleton state anywhere: a kitchen is an ordinary value.

pub mod burgers;
pub mod registry;

pub use burgers::{BasicBurger, Burger, PremiumBurger, StandardBurger};
pub use registry::{BurgerCtor, BurgerKitchen};

use thiserror::Error;

/// Factory-related errors
#[derive(Debug, Error)]
pub enum FactoryError {
    #[error("unknown burger kind: {0}")]
    UnknownVariant(String),
}

pub type FactoryResult<T> = Result<T, FactoryError>;
