// Observer Pattern - broadcast price updates to registered subscribers
//
// A PriceFeed holds weak references to its subscribers and delivers every
// published (symbol, price) update to them in registration order. The feed
// never owns a subscriber: dropping the last Arc to one is enough to stop
// its deliveries, no explicit unsubscribe required.

pub mod registry;
pub mod subscribers;

pub use registry::{PriceFeed, Subscriber};
pub use subscribers::{DesktopApp, MobileApp, NewsAgency};
