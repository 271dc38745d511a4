// Decorator Pattern - beverages layered with add-ons
//
// A base drink and its add-ons all implement the same Beverage trait. Each
// add-on owns the drink it wraps and contributes a description fragment and
// a cost delta by delegating inward, so a chain of any depth still looks
// like a single Beverage to the caller.
//
// Chains are built strictly inward-to-outward with move semantics, which is
// also what rules out cycles.

pub mod drinks;
pub mod order;
pub mod trait_def;

pub use drinks::{Milk, SimpleCoffee, Sugar, WhippedCream};
pub use order::order;
pub use trait_def::Beverage;

use thiserror::Error;

/// Errors raised while composing an order into a beverage chain
#[derive(Debug, Error)]
pub enum BeverageError {
    #[error("invalid composition: {0}")]
    InvalidComposition(String),

    #[error("unknown base beverage: {0}")]
    UnknownBase(String),

    #[error("unknown add-on: {0}")]
    UnknownAddOn(String),
}

pub type BeverageResult<T> = Result<T, BeverageError>;
