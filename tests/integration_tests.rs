//! Integration tests for the latency timers
//!
//! These tests drive both timers through the public API the way
//! instrumented application code would.

use latency_timers::*;
use latency_timers::config::TimerConfig;

use std::thread;
use std::time::Duration;

fn reported_value(line: &str) -> f64 {
    let (_, rest) = line.split_once(": ").unwrap();
    rest.split(' ').next().unwrap().parse().unwrap()
}

fn checked_step(input: &str, out: SharedBuffer) -> anyhow::Result<u32> {
    let _timer = ScopedTimer::with_sink("checked-step", TimeUnit::Microseconds, out);
    let value: u32 = input.parse()?;
    Ok(value * 2)
}

#[test]
fn test_accumulated_db_calls() {
    let out = SharedBuffer::new();
    {
        let mut timer = AccumulateTimer::with_sink("db-call", TimeUnit::Milliseconds, out.clone());

        timer.start();
        thread::sleep(Duration::from_millis(10));
        timer.end();

        timer.start();
        thread::sleep(Duration::from_millis(5));
        timer.end();
    }

    let lines = out.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("[TIME] db-call                       : "));
    assert!(lines[0].ends_with(" ms"));
    let total = reported_value(&lines[0]);
    assert!(total >= 15.0, "reported {} ms", total);
}

#[test]
fn test_scoped_timer_on_error_propagation() {
    let out = SharedBuffer::new();

    assert_eq!(checked_step("21", out.clone()).unwrap(), 42);
    assert!(checked_step("not a number", out.clone()).is_err());

    let lines = out.lines();
    assert_eq!(lines.len(), 2);
    for line in &lines {
        assert!(line.starts_with("[TIME] checked-step "));
        assert!(line.ends_with(" us"));
    }
}

#[test]
fn test_timers_are_independent() {
    let scoped_out = SharedBuffer::new();
    let accumulate_out = SharedBuffer::new();

    {
        let _outer = ScopedTimer::with_sink("outer", TimeUnit::Nanoseconds, scoped_out.clone());
        let mut inner = AccumulateTimer::with_sink("inner", TimeUnit::Nanoseconds, accumulate_out.clone());
        for _ in 0..5 {
            inner.measure(|| thread::sleep(Duration::from_micros(200)));
        }
    }

    assert_eq!(scoped_out.lines().len(), 1);
    assert_eq!(accumulate_out.lines().len(), 1);

    let outer = reported_value(&scoped_out.lines()[0]);
    let inner = reported_value(&accumulate_out.lines()[0]);
    assert!(inner >= 1_000_000.0);
    assert!(outer >= inner);
}

#[test]
fn test_borrowed_sink_outlives_timer() {
    let mut log: Vec<u8> = Vec::new();
    {
        let mut timer = AccumulateTimer::with_sink("borrowed", TimeUnit::Seconds, &mut log);
        timer.measure(|| ());
    }

    let text = String::from_utf8(log).unwrap();
    assert!(text.starts_with("[TIME] borrowed "));
    assert!(text.ends_with(" s\n"));
}

#[test]
fn test_config_driven_units() {
    let config = TimerConfig::from_toml_str("default_unit = \"ns\"\n").unwrap();
    let out = SharedBuffer::new();
    {
        let _timer = ScopedTimer::with_sink("configured", config.default_unit, out.clone());
    }

    let line = &out.lines()[0];
    assert!(line.ends_with(" ns"));
    assert!(!line.contains('.'));
}

#[test]
fn test_time_scope_macro_reexport() {
    let out = SharedBuffer::new();
    let value = time_scope!("reexported", TimeUnit::Milliseconds, out.clone(), {
        "ok"
    });

    assert_eq!(value, "ok");
    assert_eq!(out.lines().len(), 1);
}

#[tokio::test]
async fn test_accumulate_across_await_points() {
    let out = SharedBuffer::new();
    {
        let mut timer = AccumulateTimer::with_sink("async-io", TimeUnit::Milliseconds, out.clone());
        for _ in 0..3 {
            timer.start();
            tokio::time::sleep(Duration::from_millis(2)).await;
            timer.end();
        }
        assert!(timer.total() >= Duration::from_millis(6));
    }

    let lines = out.lines();
    assert_eq!(lines.len(), 1);
    assert!(reported_value(&lines[0]) >= 6.0);
}

#[tokio::test]
async fn test_timer_per_task() {
    let out = SharedBuffer::new();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let out = out.clone();
            tokio::spawn(async move {
                let mut timer = AccumulateTimer::with_sink(format!("task-{}", i), TimeUnit::Microseconds, out);
                timer.start();
                tokio::time::sleep(Duration::from_millis(1)).await;
                timer.end();
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }

    let lines = out.lines();
    assert_eq!(lines.len(), 4);
    for i in 0..4 {
        let prefix = format!("[TIME] task-{} ", i);
        assert!(lines.iter().any(|line| line.starts_with(&prefix)));
    }
}
