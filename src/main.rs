use patternlab::beverage::{self, Beverage, SimpleCoffee};
use patternlab::command::{
    HomeState, LightOffCommand, LightOnCommand, RemoteControl, TvOffCommand, TvOnCommand,
};
use patternlab::factory::BurgerKitchen;
use patternlab::feed::{DesktopApp, MobileApp, NewsAgency, PriceFeed, Subscriber};
use std::error::Error;
use std::sync::Arc;

fn main() {
    println!("=== Pattern Lab ===");
    println!("Observer, Decorator, Command, Factory\n");

    if let Err(e) = run_demos() {
        eprintln!("ERROR: {}", e);
        return;
    }

    println!("\n=== Done ===");
}

fn run_demos() -> Result<(), Box<dyn Error>> {
    stock_feed_demo();
    coffee_demo()?;
    remote_control_demo()?;
    burger_demo()?;
    Ok(())
}

fn stock_feed_demo() {
    println!("--- Observer: stock feed ---");

    let mut market = PriceFeed::new();
    let alice: Arc<dyn Subscriber> = Arc::new(MobileApp::new("Alice"));
    let bob: Arc<dyn Subscriber> = Arc::new(MobileApp::new("Bob"));
    let desktop: Arc<dyn Subscriber> = Arc::new(DesktopApp);
    let reuters: Arc<dyn Subscriber> = Arc::new(NewsAgency);

    market.subscribe(&alice);
    market.subscribe(&bob);
    market.subscribe(&desktop);
    market.subscribe(&reuters);

    println!("[StockMarket] AAPL new price: $150.5");
    market.publish("AAPL", 150.5);

    println!("\n[StockMarket] Bob unsubscribed from updates.");
    market.unsubscribe(&bob);

    println!("\n[StockMarket] TSLA new price: $720.25");
    market.publish("TSLA", 720.25);
}

fn coffee_demo() -> Result<(), Box<dyn Error>> {
    println!("\n--- Decorator: coffee orders ---");

    let plain = SimpleCoffee;
    println!("{} ${}", plain.description(), plain.cost());

    let drink = beverage::order(&["coffee", "milk", "sugar"])?;
    println!("{} ${}", drink.description(), drink.cost());

    // An add-on with nothing to wrap is rejected, not built.
    if let Err(e) = beverage::order(&["milk"]) {
        println!("Rejected order: {}", e);
    }

    Ok(())
}

fn remote_control_demo() -> Result<(), Box<dyn Error>> {
    println!("\n--- Command: remote control ---");

    let mut state = HomeState::new();
    let mut remote = RemoteControl::new();

    remote.set_command(Box::new(LightOnCommand::new()));
    remote.press_button(&mut state)?;

    remote.set_command(Box::new(TvOnCommand::new()));
    remote.press_button(&mut state)?;

    remote.set_command(Box::new(TvOffCommand::new()));
    remote.press_button(&mut state)?;

    if let Some(label) = remote.press_undo(&mut state)? {
        println!("Undid: {}", label);
    }

    remote.set_command(Box::new(LightOffCommand::new()));
    remote.press_button(&mut state)?;

    if let Some(label) = remote.press_undo(&mut state)? {
        println!("Undid: {}", label);
    }

    Ok(())
}

fn burger_demo() -> Result<(), Box<dyn Error>> {
    println!("\n--- Factory: burger kitchen ---");

    let kitchen = BurgerKitchen::default();
    for kind in ["Basic", "Standard", "Premium"] {
        println!("{}", kitchen.create(kind)?.prepare());
    }

    if let Err(e) = kitchen.create("Vegan") {
        println!("Rejected order: {}", e);
    }

    Ok(())
}
