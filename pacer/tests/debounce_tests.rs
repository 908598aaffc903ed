// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer::{debounce, Debounce, ManualTimerService};
use pacer_test_utils::{ms, Recorder, TimelineRecorder};
use std::sync::Arc;
use std::time::Duration;

#[test]
fn test_debounce_fires_once_after_last_call() {
    // Arrange
    let service = ManualTimerService::new();
    let timeline = TimelineRecorder::new(&service);
    let debounced = debounce(timeline.sink(), ms(500), service.clone());

    // Act: calls at t=0, 100, 200
    debounced.call(0);
    service.advance(ms(100));
    debounced.call(100);
    service.advance(ms(100));
    debounced.call(200);
    service.run_until_idle();

    // Assert
    assert_eq!(timeline.entries(), vec![(ms(700), 200)]);
}

#[test]
fn test_debounce_nothing_before_quiet_period() {
    // Arrange
    let service = ManualTimerService::new();
    let recorder = Recorder::new();
    let debounced = Debounce::new(recorder.sink(), ms(500), service.clone());

    // Act
    debounced.call("a");
    service.advance(ms(499));

    // Assert
    assert!(recorder.is_empty());
    assert!(debounced.is_pending());

    service.advance(ms(1));
    assert_eq!(recorder.values(), vec!["a"]);
    assert!(!debounced.is_pending());
}

#[test]
fn test_debounce_never_fires_under_constant_calls() {
    // Arrange
    let service = ManualTimerService::new();
    let recorder = Recorder::new();
    let debounced = Debounce::new(recorder.sink(), ms(100), service.clone());

    // Act
    for i in 0..1000 {
        debounced.call(i);
        service.advance(ms(99));
    }

    // Assert
    assert!(recorder.is_empty());
    assert_eq!(service.pending_count(), 1);
}

#[test]
fn test_debounce_separate_bursts_fire_separately() {
    // Arrange
    let service = ManualTimerService::new();
    let timeline = TimelineRecorder::new(&service);
    let debounced = Debounce::new(timeline.sink(), ms(100), service.clone());

    // Act
    debounced.call(1);
    debounced.call(2);
    service.advance(ms(150));
    debounced.call(3);
    service.advance(ms(50));
    debounced.call(4);
    service.run_until_idle();

    // Assert
    assert_eq!(timeline.entries(), vec![(ms(100), 2), (ms(300), 4)]);
}

#[test]
fn test_debounce_forwards_all_arguments_unchanged() {
    // Arrange
    #[derive(Debug, Clone, PartialEq)]
    struct Query {
        text: String,
        page: u32,
    }

    let service = ManualTimerService::new();
    let recorder = Recorder::new();
    let debounced = Debounce::new(recorder.sink(), ms(10), service.clone());

    // Act
    debounced.call((
        Query {
            text: "ru".into(),
            page: 1,
        },
        true,
    ));
    debounced.call((
        Query {
            text: "rust".into(),
            page: 2,
        },
        false,
    ));
    service.run_until_idle();

    // Assert
    assert_eq!(
        recorder.values(),
        vec![(
            Query {
                text: "rust".into(),
                page: 2
            },
            false
        )]
    );
}

#[test]
fn test_debounce_zero_delay_still_defers() {
    // Arrange
    let service = ManualTimerService::new();
    let recorder = Recorder::new();
    let debounced = Debounce::new(recorder.sink(), ms(0), service.clone());

    // Act
    debounced.call(1);
    debounced.call(2);

    // Assert
    assert!(recorder.is_empty());
    service.run_pending();
    assert_eq!(recorder.values(), vec![2]);
}

#[test]
fn test_debounce_keeps_at_most_one_pending_timer() {
    // Arrange
    let service = ManualTimerService::new();
    let debounced = Debounce::new(|_: u8| {}, ms(100), service.clone());

    // Act
    for i in 0..50 {
        debounced.call(i);
    }

    // Assert
    assert_eq!(service.pending_count(), 1);
}

#[test]
fn test_debounce_cancel_drops_pending_call() {
    // Arrange
    let service = ManualTimerService::new();
    let recorder = Recorder::new();
    let debounced = Debounce::new(recorder.sink(), ms(100), service.clone());
    debounced.call(1);

    // Act
    let cancelled = debounced.cancel();
    let cancelled_again = debounced.cancel();
    service.run_until_idle();

    // Assert
    assert!(cancelled);
    assert!(!cancelled_again);
    assert!(recorder.is_empty());
}

#[test]
fn test_debounce_flush_runs_pending_call_now() {
    // Arrange
    let service = ManualTimerService::new();
    let timeline = TimelineRecorder::new(&service);
    let debounced = Debounce::new(timeline.sink(), ms(100), service.clone());
    debounced.call(1);
    service.advance(ms(30));

    // Act
    let flushed = debounced.flush();
    let flushed_again = debounced.flush();
    service.run_until_idle();

    // Assert
    assert!(flushed);
    assert!(!flushed_again);
    assert_eq!(timeline.entries(), vec![(ms(30), 1)]);
}

#[test]
fn test_debounce_flush_from_inside_action_is_ignored() {
    // Arrange
    type Shared = Arc<parking_lot::Mutex<Option<Arc<Debounce<u32, ManualTimerService>>>>>;

    let (done_tx, done_rx) = std::sync::mpsc::channel();
    let worker = std::thread::spawn(move || {
        let service = ManualTimerService::new();
        let timeline = TimelineRecorder::new(&service);
        let flushes = Recorder::new();
        let slot: Shared = Arc::new(parking_lot::Mutex::new(None));
        let mut sink = timeline.sink();
        let mut record_flush = flushes.sink();
        let inner_slot = slot.clone();
        let debounced = Arc::new(Debounce::new(
            move |x: u32| {
                sink(x);
                if let Some(me) = inner_slot.lock().clone() {
                    me.call(x + 1);
                    record_flush(me.flush());
                }
            },
            ms(10),
            service.clone(),
        ));
        *slot.lock() = Some(debounced.clone());

        // Act
        debounced.call(0);
        service.advance(ms(10));
        slot.lock().take();
        service.advance(ms(10));

        let _ = done_tx.send((timeline.entries(), flushes.values()));
    });

    // Assert
    let (entries, flushes) = done_rx
        .recv_timeout(Duration::from_secs(3))
        .expect("flush from inside the action must not block");
    worker.join().unwrap();
    assert_eq!(flushes, vec![false]);
    assert_eq!(entries, vec![(ms(10), 0), (ms(20), 1)]);
}

#[test]
fn test_debounce_flush_waits_for_running_action_on_other_thread() {
    // Arrange
    let service = ManualTimerService::new();
    let (started_tx, started_rx) = std::sync::mpsc::channel();
    let (release_tx, release_rx) = std::sync::mpsc::channel::<()>();
    let recorder = Recorder::new();
    let mut sink = recorder.sink();
    let debounced = Arc::new(Debounce::new(
        move |x: u32| {
            if x == 0 {
                let _ = started_tx.send(());
                let _ = release_rx.recv_timeout(Duration::from_secs(3));
            }
            sink(x);
        },
        ms(10),
        service.clone(),
    ));
    debounced.call(0);
    let driver = std::thread::spawn(move || service.advance(ms(10)));
    started_rx.recv_timeout(Duration::from_secs(3)).unwrap();

    // Act
    debounced.call(1);
    let flusher = {
        let debounced = debounced.clone();
        std::thread::spawn(move || debounced.flush())
    };
    release_tx.send(()).unwrap();

    // Assert
    assert!(flusher.join().unwrap());
    assert_eq!(driver.join().unwrap(), 1);
    assert_eq!(recorder.values(), vec![0, 1]);
}

#[test]
fn test_debounce_fallible_reports_errors_to_handler() {
    // Arrange
    #[derive(Debug, Clone, PartialEq, thiserror::Error)]
    #[error("write failed for {0}")]
    struct WriteError(String);

    let service = ManualTimerService::new();
    let errors = Recorder::new();
    let debounced = Debounce::fallible(
        |doc: String| {
            if doc.is_empty() {
                Err(WriteError(doc))
            } else {
                Ok(())
            }
        },
        ms(100),
        service.clone(),
        errors.sink(),
    );

    // Act
    debounced.call("draft".to_string());
    debounced.call(String::new());
    service.run_until_idle();

    // Assert
    assert_eq!(errors.values(), vec![WriteError(String::new())]);
}

#[test]
fn test_debounce_logged_swallows_nothing_else() {
    // Arrange
    #[derive(Debug, thiserror::Error)]
    #[error("attempt {0} failed")]
    struct AttemptError(u32);

    let service = ManualTimerService::new();
    let attempts = Recorder::new();
    let mut record = attempts.sink();
    let debounced = Debounce::logged(
        move |n: u32| {
            record(n);
            Err::<(), _>(AttemptError(n))
        },
        ms(100),
        service.clone(),
    );

    // Act
    debounced.call(1);
    service.run_until_idle();
    debounced.call(2);
    service.run_until_idle();

    // Assert
    assert_eq!(attempts.values(), vec![1, 2]);
}

#[test]
fn test_debounce_timer_outlives_wrapper() {
    // Arrange
    let service = ManualTimerService::new();
    let recorder = Recorder::new();
    let debounced = Debounce::new(recorder.sink(), ms(100), service.clone());

    // Act
    debounced.call(7);
    drop(debounced);
    service.run_until_idle();

    // Assert
    assert_eq!(recorder.values(), vec![7]);
}
