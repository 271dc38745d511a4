// Concrete drinks: one base beverage and the add-on decorators

use crate::beverage::trait_def::Beverage;

/// Base drink: plain coffee, nothing wrapped.
pub struct SimpleCoffee;

impl Beverage for SimpleCoffee {
    fn description(&self) -> String {
        "Simple Coffee".to_string()
    }

    fn cost(&self) -> f64 {
        5.0
    }
}

/// Milk add-on: +1.5
pub struct Milk {
    inner: Box<dyn Beverage>,
}

impl Milk {
    pub fn new(inner: Box<dyn Beverage>) -> Self {
        Self { inner }
    }
}

impl Beverage for Milk {
    fn description(&self) -> String {
        format!("{}, Milk", self.inner.description())
    }

    fn cost(&self) -> f64 {
        self.inner.cost() + 1.5
    }
}

/// Sugar add-on: +0.5
pub struct Sugar {
    inner: Box<dyn Beverage>,
}

impl Sugar {
    pub fn new(inner: Box<dyn Beverage>) -> Self {
        Self { inner }
    }
}

impl Beverage for Sugar {
    fn description(&self) -> String {
        format!("{}, Sugar", self.inner.description())
    }

    fn cost(&self) -> f64 {
        self.inner.cost() + 0.5
    }
}

/// Whipped cream add-on: +2.0
pub struct WhippedCream {
    inner: Box<dyn Beverage>,
}

impl WhippedCream {
    pub fn new(inner: Box<dyn Beverage>) -> Self {
        Self { inner }
    }
}

impl Beverage for WhippedCream {
    fn description(&self) -> String {
        format!("{}, Whipped Cream", self.inner.description())
    }

    fn cost(&self) -> f64 {
        self.inner.cost() + 2.0
    }
}
