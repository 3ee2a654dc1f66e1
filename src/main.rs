use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tokio::time::{sleep, Duration};

use latency_timers::config::TimerConfig;
use latency_timers::{time_scope, AccumulateTimer, ScopedTimer, TimeUnit};

struct Demo {
    config: TimerConfig,
}

impl Demo {
    fn new(config: TimerConfig) -> Self {
        Self { config }
    }

    /// Parses comma separated integers, bailing out on the first bad field.
    fn parse_records(&self, input: &str) -> Option<Vec<i64>> {
        let _timer = self.config.scoped("parse");

        let mut records = Vec::new();
        for field in input.split(',') {
            match field.trim().parse() {
                Ok(value) => records.push(value),
                Err(_) => {
                    warn!(field, "rejecting input with malformed field");
                    return None;
                }
            }
        }
        Some(records)
    }

    async fn simulated_query(&self, latency: Duration) -> usize {
        sleep(latency).await;
        latency.as_millis() as usize
    }

    async fn run_queries(&self) -> anyhow::Result<()> {
        let mut timer = AccumulateTimer::with_unit("db-call", TimeUnit::Milliseconds);

        let mut rows = 0;
        for latency in [Duration::from_millis(10), Duration::from_millis(5)] {
            timer.start();
            rows += self.simulated_query(latency).await;
            timer.end();
        }

        info!(rows, total = ?timer.total(), "queries finished");
        Ok(())
    }

    fn run_misuse(&self) {
        let mut timer = self.config.accumulate("misuse");
        timer.end();
        timer.start();
        timer.start();
        // dropped while running: auto-ended
    }

    async fn run(&self) -> anyhow::Result<()> {
        let _total = ScopedTimer::with_unit("demo", TimeUnit::Milliseconds);

        let good = self.parse_records("1, 2, 3, 5, 8");
        info!(?good, "parsed well-formed input");
        let bad = self.parse_records("13, oops, 21");
        info!(?bad, "parsed malformed input");

        self.run_queries().await?;

        let sum = time_scope!("sum", TimeUnit::Nanoseconds, {
            (1..=1_000u64).sum::<u64>()
        });
        info!(sum, "summed range");

        self.run_misuse();
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => TimerConfig::load_from_file(&path)?,
        None => TimerConfig::default(),
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting {} v{} (default unit: {})",
        latency_timers::NAME, latency_timers::VERSION, config.default_unit);

    Demo::new(config).run().await?;

    info!("Demo complete");
    Ok(())
}
