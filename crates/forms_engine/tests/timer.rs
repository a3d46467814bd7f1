use std::time::Duration;

use forms_core::{ControllerConfig, FormKind, TimerToken};
use forms_engine::{FormController, Page, TimerEvent, TimerScheduler, TokioTimerScheduler};
use tokio::runtime::Handle;
use tokio::time::{timeout, Instant};

const DASHBOARD: &str = include_str!("fixtures/dashboard.html");

#[tokio::test(start_paused = true)]
async fn timer_fires_after_delay_and_not_before() {
    let (mut scheduler, mut events) = TokioTimerScheduler::new(Handle::current());
    let start = Instant::now();
    scheduler.schedule(TimerToken(1), Duration::from_millis(2000));

    let early = timeout(Duration::from_millis(1999), events.recv()).await;
    assert!(early.is_err(), "timer fired before its delay");

    let event = events.recv().await.expect("timer event");
    assert_eq!(
        event,
        TimerEvent::Elapsed {
            token: TimerToken(1)
        }
    );
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(2000), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(2010), "{elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn cancelled_timer_never_fires() {
    let (mut scheduler, mut events) = TokioTimerScheduler::new(Handle::current());
    scheduler.schedule(TimerToken(1), Duration::from_millis(2000));
    scheduler.cancel(TimerToken(1));
    assert_eq!(scheduler.pending_count(), 0);

    let outcome = timeout(Duration::from_secs(10), events.recv()).await;
    assert!(outcome.is_err());
}

#[tokio::test(start_paused = true)]
async fn fired_timers_are_pruned() {
    let (mut scheduler, mut events) = TokioTimerScheduler::new(Handle::current());
    scheduler.schedule(TimerToken(1), Duration::from_millis(10));
    events.recv().await.expect("first timer");
    assert_eq!(scheduler.pending_count(), 0);

    scheduler.schedule(TimerToken(2), Duration::from_millis(10));
    assert_eq!(scheduler.pending_count(), 1);
    events.recv().await.expect("second timer");
}

#[tokio::test(start_paused = true)]
async fn download_button_reenables_after_two_seconds() {
    let page = Page::parse(DASHBOARD).unwrap();
    let (scheduler, mut events) = TokioTimerScheduler::new(Handle::current());
    let mut ctrl = FormController::new(page, ControllerConfig::default(), scheduler);

    let start = Instant::now();
    ctrl.activate(FormKind::Download);
    assert!(ctrl.page().form(FormKind::Download).unwrap().button.disabled);

    let event = events.recv().await.expect("timer event");
    assert!(start.elapsed() >= Duration::from_millis(2000));
    ctrl.handle_timer(event);
    assert!(!ctrl.page().form(FormKind::Download).unwrap().button.disabled);
}
