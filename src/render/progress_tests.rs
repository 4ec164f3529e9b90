//! Tests for chart progress reporting.

use super::*;

#[test]
fn quiet_mode_hides_the_bar() {
    let progress = ChartProgress::new_with_visibility(10, true, true);
    assert!(progress.progress_bar.is_hidden());
}

#[test]
fn non_tty_hides_the_bar() {
    let progress = ChartProgress::new_with_visibility(10, false, false);
    assert!(progress.progress_bar.is_hidden());
}

#[test]
fn inc_advances_the_position() {
    let progress = ChartProgress::new_with_visibility(3, true, true);
    progress.inc();
    progress.inc();

    assert_eq!(progress.counter.load(std::sync::atomic::Ordering::Relaxed), 2);
    progress.finish();
}

#[test]
fn clones_share_one_counter() {
    let progress = ChartProgress::new_with_visibility(4, true, true);
    let clone = progress.clone();
    progress.inc();
    clone.inc();

    assert_eq!(progress.counter.load(std::sync::atomic::Ordering::Relaxed), 2);
}
