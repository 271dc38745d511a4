// Demo subscribers - print received updates to the console

use crate::feed::registry::Subscriber;

/// Per-user mobile client
pub struct MobileApp {
    owner: String,
}

impl MobileApp {
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
        }
    }
}

impl Subscriber for MobileApp {
    fn on_price(&self, symbol: &str, price: f64) {
        println!("[MobileApp - {}] {} updated price: ${}", self.owner, symbol, price);
    }
}

/// Desktop terminal display
pub struct DesktopApp;

impl Subscriber for DesktopApp {
    fn on_price(&self, symbol: &str, price: f64) {
        println!("[DesktopApp] Displaying {} price: ${}", symbol, price);
    }
}

/// Newswire that headlines every tick
pub struct NewsAgency;

impl Subscriber for NewsAgency {
    fn on_price(&self, symbol: &str, price: f64) {
        println!("[NewsAgency] Breaking news: {} hits ${}", symbol, price);
    }
}
