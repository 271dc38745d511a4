use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use patternlab::beverage::{self, Beverage};
use patternlab::command::{Command, CommandResult, HomeState, RemoteControl};
use patternlab::feed::{PriceFeed, Subscriber};
use std::sync::Arc;

/// Subscriber that does no work beyond consuming the update
struct Sink;

impl Subscriber for Sink {
    fn on_price(&self, symbol: &str, price: f64) {
        black_box((symbol, price));
    }
}

/// Benchmark broadcast fan-out over growing subscriber counts
fn bench_feed_publish(c: &mut Criterion) {
    let mut group = c.benchmark_group("feed_publish");

    for num_subscribers in [1, 8, 64, 256] {
        let mut feed = PriceFeed::new();
        // Keep the Arcs alive for the duration of the benchmark
        let subscribers: Vec<Arc<dyn Subscriber>> =
            (0..num_subscribers).map(|_| Arc::new(Sink) as _).collect();
        for subscriber in &subscribers {
            feed.subscribe(subscriber);
        }

        group.bench_with_input(
            BenchmarkId::from_parameter(num_subscribers),
            &num_subscribers,
            |b, _| {
                b.iter(|| black_box(feed.publish("AAPL", 150.5)));
            },
        );
    }
    group.finish();
}

/// Benchmark recomputed description/cost over growing chain depth
fn bench_decorator_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("decorator_chain");

    for depth in [1usize, 8, 64] {
        let mut parts = vec!["coffee"];
        for i in 0..depth {
            parts.push(["milk", "sugar", "whip"][i % 3]);
        }
        let drink = beverage::order(&parts).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, _| {
            b.iter(|| {
                black_box(drink.cost());
                black_box(drink.description());
            });
        });
    }
    group.finish();
}

/// Command that touches nothing, to measure pure invoker overhead
struct Nop;

impl Command for Nop {
    fn execute(&mut self, _state: &mut HomeState) -> CommandResult<()> {
        Ok(())
    }

    fn undo(&mut self, _state: &mut HomeState) -> CommandResult<()> {
        Ok(())
    }

    fn label(&self) -> String {
        "Nop".to_string()
    }
}

/// Benchmark press/undo/redo churn through the history stacks
fn bench_command_churn(c: &mut Criterion) {
    c.bench_function("command_press_undo_redo", |b| {
        let mut remote = RemoteControl::new();
        let mut state = HomeState::new();

        b.iter(|| {
            remote.set_command(Box::new(Nop));
            remote.press_button(&mut state).unwrap();
            remote.press_undo(&mut state).unwrap();
            remote.press_redo(&mut state).unwrap();
            remote.press_undo(&mut state).unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_feed_publish,
    bench_decorator_chain,
    bench_command_churn
);
criterion_main!(benches);
