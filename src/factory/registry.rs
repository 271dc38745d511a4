// BurgerKitchen - kind string -> constructor function registry

use crate::factory::burgers::{self, Burger};
use crate::factory::{FactoryError, FactoryResult};

/// Constructor function for one burger variant
pub type BurgerCtor = fn() -> Box<dyn Burger>;

/// Dispatches construction over a runtime kind key.
///
/// Variants live in an insertion-ordered list so `kinds()` is
/// deterministic. Kind matching is case-insensitive; re-registering a kind
/// replaces its constructor in place.
pub struct BurgerKitchen {
    variants: Vec<(String, BurgerCtor)>,
}

impl BurgerKitchen {
    /// An empty kitchen with no variants registered.
    pub fn new() -> Self {
        Self {
            variants: Vec::new(),
        }
    }

    /// Register a variant. A later registration for the same kind replaces
    /// the earlier constructor but keeps its position in `kinds()`.
    pub fn register(&mut self, kind: impl Into<String>, ctor: BurgerCtor) {
        let kind = kind.into().to_ascii_lowercase();
        if let Some(entry) = self.variants.iter_mut().find(|(k, _)| *k == kind) {
            entry.1 = ctor;
        } else {
            self.variants.push((kind, ctor));
        }
    }

    /// Build the requested kind.
    ///
    /// # Errors
    /// `UnknownVariant` if no constructor is registered for `kind`;
    /// nothing is constructed in that case.
    pub fn create(&self, kind: &str) -> FactoryResult<Box<dyn Burger>> {
        let lowered = kind.to_ascii_lowercase();
        self.variants
            .iter()
            .find(|(k, _)| *k == lowered)
            .map(|(_, ctor)| ctor())
            .ok_or_else(|| FactoryError::UnknownVariant(kind.to_string()))
    }

    /// Registered kinds in registration order.
    pub fn kinds(&self) -> Vec<&str> {
        self.variants.iter().map(|(k, _)| k.as_str()).collect()
    }
}

impl Default for BurgerKitchen {
    /// A kitchen with the built-in Basic/Standard/Premium variants.
    fn default() -> Self {
        let mut kitchen = Self::new();
        kitchen.register("basic", burgers::basic);
        kitchen.register("standard", burgers::standard);
        kitchen.register("premium", burgers::premium);
        kitchen
    }
}
