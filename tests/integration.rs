// SPDX-License-Identifier: MPL-2.0
use std::time::Duration;
use tempfile::tempdir;
use toast_queue::config::{self, ToastConfig, MAX_TOASTS};
use toast_queue::notifications::{Dismissal, Toast, ToastKind, ToastManager, ToastState};

fn ms(value: u64) -> Option<Duration> {
    Some(Duration::from_millis(value))
}

fn messages(manager: &ToastManager) -> Vec<String> {
    manager
        .snapshot()
        .iter()
        .map(|toast| toast.message().to_string())
        .collect()
}

/// Lets the timer tasks and the expiry pump run after time moved.
async fn settle() {
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn two_toasts_show_newest_first_then_both_expire() {
    let manager = ToastManager::new(&ToastConfig::default()).expect("runtime");
    manager.show(ToastKind::Info, "A", ms(1000));
    manager.show(ToastKind::Info, "B", ms(1000));
    assert_eq!(messages(&manager), vec!["B", "A"]);

    tokio::time::sleep(Duration::from_millis(999)).await;
    settle().await;
    assert_eq!(manager.len(), 2);

    tokio::time::sleep(Duration::from_millis(2)).await;
    settle().await;
    assert!(manager.is_empty());
}

#[tokio::test(start_paused = true)]
async fn six_sticky_toasts_keep_five_most_recent() {
    let manager = ToastManager::new(&ToastConfig::default()).expect("runtime");
    for i in 0..6 {
        manager.show(ToastKind::Info, format!("m{i}"), Some(Duration::ZERO));
    }
    assert_eq!(messages(&manager), vec!["m5", "m4", "m3", "m2", "m1"]);

    tokio::time::sleep(Duration::from_secs(600)).await;
    settle().await;
    assert_eq!(manager.len(), MAX_TOASTS);

    let history = manager.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].toast.message(), "m0");
    assert_eq!(history[0].reason, Dismissal::Evicted);
}

#[tokio::test(start_paused = true)]
async fn evicted_toast_timer_never_fires() {
    let manager = ToastManager::new(&ToastConfig::default()).expect("runtime");
    let oldest = manager.info("short", ms(100));
    for i in 0..MAX_TOASTS {
        manager.info(format!("long-{i}"), ms(10_000));
    }
    assert!(manager.get(oldest).is_none());

    tokio::time::sleep(Duration::from_millis(500)).await;
    settle().await;

    assert_eq!(manager.len(), MAX_TOASTS);
    let reasons: Vec<_> = manager.history().iter().map(|r| r.reason).collect();
    assert_eq!(reasons, vec![Dismissal::Evicted]);
}

#[tokio::test(start_paused = true)]
async fn hover_freezes_countdown_and_resume_finishes_it() {
    let manager = ToastManager::new(&ToastConfig::default()).expect("runtime");
    let id = manager.success("saved", ms(1000));

    tokio::time::sleep(Duration::from_millis(300)).await;
    assert!(manager.pause(id));

    tokio::time::sleep(Duration::from_secs(5)).await;
    settle().await;
    let toast = manager.get(id).expect("paused toast is kept");
    assert_eq!(toast.state(), ToastState::Paused);
    assert_eq!(toast.remaining_duration(), Duration::from_millis(700));

    assert!(manager.resume(id));
    tokio::time::sleep(Duration::from_millis(690)).await;
    settle().await;
    assert!(manager.get(id).is_some());

    tokio::time::sleep(Duration::from_millis(20)).await;
    settle().await;
    assert!(manager.get(id).is_none());
    assert_eq!(
        manager.history().last().map(|record| record.reason),
        Some(Dismissal::Expired)
    );
}

#[tokio::test(start_paused = true)]
async fn rapid_pause_resume_keeps_single_expiry() {
    let manager = ToastManager::new(&ToastConfig::default()).expect("runtime");
    let id = manager.info("flicker", ms(400));

    for _ in 0..50 {
        manager.pause(id);
        manager.resume(id);
    }

    tokio::time::sleep(Duration::from_millis(401)).await;
    settle().await;
    assert!(manager.is_empty());
    assert_eq!(manager.history().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn hide_racing_expiry_is_harmless() {
    let manager = ToastManager::new(&ToastConfig::default()).expect("runtime");
    let id = manager.error("boom", ms(50));

    tokio::time::sleep(Duration::from_millis(50)).await;
    settle().await;

    assert!(!manager.hide(id));
    assert!(!manager.hide(id));
    assert!(!manager.pause(id));
    assert!(!manager.resume(id));
    assert_eq!(manager.history().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn concurrent_callers_respect_capacity() {
    let manager = ToastManager::new(&ToastConfig::default()).expect("runtime");
    let mut tasks = Vec::new();
    for worker in 0..8 {
        let manager = manager.clone();
        tasks.push(tokio::spawn(async move {
            for i in 0..10 {
                let id = manager.warning(format!("w{worker}-{i}"), ms(200));
                manager.pause(id);
                manager.resume(id);
                assert!(manager.len() <= MAX_TOASTS);
            }
        }));
    }
    for task in tasks {
        task.await.expect("worker finished");
    }
    assert_eq!(manager.len(), MAX_TOASTS);

    tokio::time::sleep(Duration::from_millis(250)).await;
    settle().await;
    assert!(manager.is_empty());
}

#[tokio::test(start_paused = true)]
async fn live_view_tracks_expiry() {
    let manager = ToastManager::new(&ToastConfig::default()).expect("runtime");
    let mut view = manager.subscribe();

    let id = manager.info("watch me", ms(100));
    view.changed().await.expect("manager alive");
    let ids: Vec<_> = view.borrow_and_update().iter().map(Toast::id).collect();
    assert_eq!(ids, vec![id]);

    view.changed().await.expect("manager alive");
    assert!(view.borrow_and_update().is_empty());
}

#[tokio::test(start_paused = true)]
async fn config_from_file_sets_capacity_and_default_duration() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("toasts.toml");
    let written = ToastConfig {
        max_toasts: Some(2),
        default_duration_ms: Some(100),
        history_capacity: Some(3),
    };
    config::save_to_path(&written, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let manager = ToastManager::new(&loaded).expect("runtime");
    for i in 0..3 {
        manager.show(ToastKind::Info, format!("t{i}"), None);
    }
    assert_eq!(messages(&manager), vec!["t2", "t1"]);

    tokio::time::sleep(Duration::from_millis(101)).await;
    settle().await;
    assert!(manager.is_empty());
    assert_eq!(manager.history().len(), 3);

    dir.close().expect("Failed to close temporary directory");
}
