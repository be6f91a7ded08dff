use rolling_counter::{Config, ManualClock, MinuteHourCounter, SharedMinuteHourCounter};

#[test]
fn bandwidth_style_usage_over_an_afternoon() {
    let clock = ManualClock::new(1_700_000_000);
    let mut counter = MinuteHourCounter::with_clock(clock.clone());

    // A burst of transfers a few seconds apart.
    for _ in 0..10 {
        counter.add(1_500).unwrap();
        clock.advance(3);
    }
    assert_eq!(counter.minute_count().unwrap(), 15_000);
    assert_eq!(counter.hour_count().unwrap(), 15_000);

    // A minute later the burst is out of the minute window but not the hour.
    clock.advance(60);
    assert_eq!(counter.minute_count().unwrap(), 0);
    assert_eq!(counter.hour_count().unwrap(), 15_000);

    // Trickle traffic afterwards shows up in both.
    counter.add(100).unwrap();
    assert_eq!(counter.minute_count().unwrap(), 100);
    assert_eq!(counter.hour_count().unwrap(), 15_100);

    // Over an hour of silence and everything is gone.
    clock.advance(3_700);
    assert_eq!(counter.minute_count().unwrap(), 0);
    assert_eq!(counter.hour_count().unwrap(), 0);
}

#[test]
fn long_idle_gap_costs_nothing_and_reports_zero() {
    let clock = ManualClock::new(1_000);
    let mut counter = MinuteHourCounter::with_clock(clock.clone());
    counter.add(42).unwrap();

    // Jump years ahead; the catch-up takes the clear fast path rather than
    // rotating one bucket at a time.
    clock.advance(100_000_000);
    assert_eq!(counter.minute_count().unwrap(), 0);
    assert_eq!(counter.hour_count().unwrap(), 0);

    counter.add(1).unwrap();
    assert_eq!(counter.minute_count().unwrap(), 1);
}

#[test]
fn custom_window_shapes() {
    // Ten six-second buckets for the "minute" window, six ten-minute
    // buckets for the "hour" window.
    let cfg = Config {
        minute_buckets: 10,
        minute_bucket_secs: 6,
        hour_buckets: 6,
        hour_bucket_secs: 600,
    };
    let clock = ManualClock::new(0);
    let mut counter = MinuteHourCounter::with_config(cfg, clock.clone()).unwrap();

    counter.add(5).unwrap();
    clock.set(59);
    assert_eq!(counter.minute_count().unwrap(), 5);
    clock.set(60);
    assert_eq!(counter.minute_count().unwrap(), 0);
    assert_eq!(counter.hour_count().unwrap(), 5);
    clock.set(3_600);
    assert_eq!(counter.hour_count().unwrap(), 0);
}

#[test]
fn shared_handle_across_threads() {
    let clock = ManualClock::new(50_000);
    let counter = SharedMinuteHourCounter::with_clock(clock.clone());

    let writers: Vec<_> = (0..4)
        .map(|_| {
            let counter = counter.clone();
            std::thread::spawn(move || {
                for _ in 0..250 {
                    counter.add(2).unwrap();
                }
            })
        })
        .collect();
    for writer in writers {
        writer.join().unwrap();
    }

    assert_eq!(counter.minute_count().unwrap(), 2_000);
    assert_eq!(counter.hour_count().unwrap(), 2_000);

    clock.advance(61);
    assert_eq!(counter.minute_count().unwrap(), 0);
    assert_eq!(counter.hour_count().unwrap(), 2_000);
}
