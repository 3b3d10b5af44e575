use super::*;
use std::thread;

#[test]
fn test_search_limits_depth_only() {
    let limits = SearchLimits::depth(3);
    assert_eq!(limits.depth, 3);
    assert!(limits.move_time.is_none());
    assert!(limits.max_nodes.is_none());
    limits.start();
    assert!(!limits.exhausted(1_000_000));
}

#[test]
fn test_search_limits_with_time() {
    let limits = SearchLimits::depth_and_time(2, Duration::from_millis(100));
    assert_eq!(limits.depth, 2);
    assert_eq!(limits.move_time, Some(Duration::from_millis(100)));
}

#[test]
fn test_node_budget_stops_search() {
    let limits = SearchLimits::depth(3).with_max_nodes(Some(50));
    limits.start();
    assert!(!limits.exhausted(49));
    assert!(limits.exhausted(50));
    // Another counter (e.g. another root branch) still has budget left
    assert!(!limits.exhausted(0));
    assert!(!limits.time_control.is_stopped());
}

#[test]
fn test_time_control_expiry() {
    let tc = TimeControl::new(Some(Duration::from_millis(10)));
    tc.start();
    assert!(!tc.is_stopped());

    thread::sleep(Duration::from_millis(20));
    tc.check_time();
    assert!(tc.is_stopped());
    assert_eq!(tc.remaining(), Some(Duration::ZERO));
}

#[test]
fn test_time_control_no_limit() {
    let tc = TimeControl::new(None);
    tc.start();
    thread::sleep(Duration::from_millis(10));
    tc.check_time();
    assert!(!tc.is_stopped());
    assert!(tc.remaining().is_none());
}

#[test]
fn test_restart_clears_stop_flag() {
    let tc = TimeControl::new(None);
    tc.start();
    tc.stop();
    assert!(tc.is_stopped());
    tc.start();
    assert!(!tc.is_stopped());
}

#[test]
fn test_clones_share_stop_flag() {
    let tc = TimeControl::new(None);
    let worker = tc.clone();
    tc.start();
    worker.stop();
    assert!(tc.is_stopped());
}
