// Burger products and their constructor functions

/// A product the kitchen can prepare.
pub trait Burger {
    /// Returns the preparation line; the demo prints it.
    fn prepare(&self) -> String;
}

impl std::fmt::Debug for dyn Burger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Burger")
    }
}

pub struct BasicBurger;

impl Burger for BasicBurger {
    fn prepare(&self) -> String {
        "Preparing Basic Burger with bun and patty.".to_string()
    }
}

pub struct StandardBurger;

impl Burger for StandardBurger {
    fn prepare(&self) -> String {
        "Preparing Standard Burger with bun, patty, cheese, and lettuce.".to_string()
    }
}

pub struct PremiumBurger;

impl Burger for PremiumBurger {
    fn prepare(&self) -> String {
        "Preparing Premium Burger with gourmet bun, double patty, and special sauce.".to_string()
    }
}

// Constructor functions registered by BurgerKitchen::default(). Free
// functions, no factory object state.

pub fn basic() -> Box<dyn Burger> {
    Box::new(BasicBurger)
}

pub fn standard() -> Box<dyn Burger> {
    Box::new(StandardBurger)
}

pub fn premium() -> Box<dyn Burger> {
    Box::new(PremiumBurger)
}
