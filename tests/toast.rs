use std::time::{Duration, Instant};

use insider_term::state::toast::{Notifier, Severity};

#[test]
fn ids_are_strictly_increasing() {
    let mut notifier = Notifier::new();
    let a = notifier.notify("first", Severity::Info);
    let b = notifier.notify("second", Severity::Success);
    let c = notifier.notify("third", Severity::Error);
    assert!(a < b && b < c);
}

#[test]
fn dismiss_is_idempotent() {
    let mut notifier = Notifier::new();
    let id = notifier.notify("hello", Severity::Info);
    notifier.dismiss(id);
    assert!(notifier.is_empty());
    // Dismissing again, or after the timer would have fired, is a no-op.
    notifier.dismiss(id);
    assert!(notifier.is_empty());
}

#[test]
fn sweep_after_dismiss_leaves_no_duplicates() {
    let mut notifier = Notifier::with_ttl(Duration::from_millis(0));
    let id = notifier.notify("ephemeral", Severity::Info);
    notifier.dismiss(id);
    notifier.sweep(Instant::now());
    assert!(notifier.is_empty());
}

#[test]
fn sweep_expires_old_entries_only() {
    let mut notifier = Notifier::with_ttl(Duration::from_millis(50));
    notifier.notify("old", Severity::Info);
    let now = Instant::now();
    notifier.sweep(now + Duration::from_millis(100));
    assert!(notifier.is_empty());

    notifier.notify("fresh", Severity::Info);
    notifier.sweep(Instant::now());
    assert_eq!(notifier.toasts().len(), 1);
}

#[test]
fn display_order_is_insertion_order() {
    let mut notifier = Notifier::new();
    notifier.notify("a", Severity::Info);
    notifier.notify("b", Severity::Info);
    let messages: Vec<&str> = notifier.toasts().iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, vec!["a", "b"]);
}
