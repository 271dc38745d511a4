// Order strings -> decorator chains

use crate::beverage::drinks::{Milk, SimpleCoffee, Sugar, WhippedCream};
use crate::beverage::trait_def::Beverage;
use crate::beverage::{BeverageError, BeverageResult};

/// Build a beverage from an order: one base name followed by any number of
/// add-on names, e.g. `["coffee", "milk", "sugar"]`. Matching is
/// case-insensitive.
///
/// # Errors
/// - `InvalidComposition` if the order is empty or starts with an add-on
///   (an add-on has nothing to wrap).
/// - `UnknownBase` / `UnknownAddOn` for unrecognized names.
pub fn order(parts: &[&str]) -> BeverageResult<Box<dyn Beverage>> {
    let mut parts = parts.iter();
    let base = parts
        .next()
        .ok_or_else(|| BeverageError::InvalidComposition("empty order".into()))?;

    let mut drink = brew_base(base)?;
    for part in parts {
        drink = wrap(drink, part)?;
    }
    Ok(drink)
}

fn brew_base(name: &str) -> BeverageResult<Box<dyn Beverage>> {
    match name.to_ascii_lowercase().as_str() {
        "coffee" | "simple coffee" => Ok(Box::new(SimpleCoffee)),
        lowered if is_add_on(lowered) => Err(BeverageError::InvalidComposition(format!(
            "order starts with add-on '{name}', nothing for it to wrap"
        ))),
        _ => Err(BeverageError::UnknownBase(name.to_string())),
    }
}

fn wrap(inner: Box<dyn Beverage>, name: &str) -> BeverageResult<Box<dyn Beverage>> {
    match name.to_ascii_lowercase().as_str() {
        "milk" => Ok(Box::new(Milk::new(inner))),
        "sugar" => Ok(Box::new(Sugar::new(inner))),
        "whipped cream" | "whip" => Ok(Box::new(WhippedCream::new(inner))),
        _ => Err(BeverageError::UnknownAddOn(name.to_string())),
    }
}

fn is_add_on(lowered: &str) -> bool {
    matches!(lowered, "milk" | "sugar" | "whipped cream" | "whip")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_builds_chain_in_listed_order() {
        let drink = order(&["coffee", "milk", "sugar"]).unwrap();
        assert_eq!(drink.description(), "Simple Coffee, Milk, Sugar");
        assert_eq!(drink.cost(), 7.0);
    }

    #[test]
    fn test_order_is_case_insensitive() {
        let drink = order(&["Coffee", "MILK", "Whip"]).unwrap();
        assert_eq!(drink.description(), "Simple Coffee, Milk, Whipped Cream");
        assert_eq!(drink.cost(), 8.5);
    }

    #[test]
    fn test_empty_order_is_invalid_composition() {
        let err = order(&[]).unwrap_err();
        assert!(matches!(err, BeverageError::InvalidComposition(_)));
    }

    #[test]
    fn test_add_on_first_is_invalid_composition() {
        let err = order(&["milk", "coffee"]).unwrap_err();
        assert!(matches!(err, BeverageError::InvalidComposition(_)));
    }

    #[test]
    fn test_unknown_names() {
        assert!(matches!(
            order(&["tea"]).unwrap_err(),
            BeverageError::UnknownBase(name) if name == "tea"
        ));
        assert!(matches!(
            order(&["coffee", "caramel"]).unwrap_err(),
            BeverageError::UnknownAddOn(name) if name == "caramel"
        ));
    }
}
