// Beverage trait definition

/// A drink that can describe itself and price itself.
///
/// Both base drinks and add-on decorators implement this trait. Description
/// and cost are recomputed by delegation on every call, never cached, so
/// they always reflect the current shape of the chain.
///
/// # Example
/// ```
/// use patternlab::beverage::{Beverage, Milk, SimpleCoffee};
///
/// let drink = Milk::new(Box::new(SimpleCoffee));
/// assert_eq!(drink.description(), "Simple Coffee, Milk");
/// assert_eq!(drink.cost(), 6.5);
/// ```
pub trait Beverage {
    /// Human-readable contents, base first, add-ons in wrapping order.
    fn description(&self) -> String;

    /// Total price of the drink including every add-on.
    fn cost(&self) -> f64;
}

impl std::fmt::Debug for dyn Beverage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Beverage")
    }
}
