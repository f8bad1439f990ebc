use super::*;

#[test]
fn notifications_coexist_in_creation_order() {
    let mut center = NotificationCenter::new(Duration::from_secs(3));
    let now = Instant::now();
    let first = center.push_at("Preview updated!", Severity::Info, now);
    let second = center.push_at("UI generated successfully!", Severity::Success, now);

    assert!(first < second);
    let messages: Vec<_> = center.active().iter().map(|n| n.message.as_str()).collect();
    assert_eq!(messages, ["Preview updated!", "UI generated successfully!"]);
}

#[test]
fn expire_removes_only_elapsed_notifications() {
    let mut center = NotificationCenter::new(Duration::from_secs(3));
    let start = Instant::now();
    center.push_at("old", Severity::Warning, start);
    center.push_at("new", Severity::Info, start + Duration::from_secs(2));

    assert_eq!(center.expire(start + Duration::from_millis(2999)), 0);
    assert_eq!(center.expire(start + Duration::from_secs(3)), 1);
    assert_eq!(center.active()[0].message, "new");
    assert_eq!(center.expire(start + Duration::from_secs(5)), 1);
    assert!(center.is_empty());
    assert_eq!(center.expire(start + Duration::from_secs(60)), 0);
}

#[test]
fn dismiss_removes_exactly_once() {
    let mut center = NotificationCenter::new(Duration::from_secs(3));
    let id = center.push("Failed to copy!", Severity::Danger);
    assert!(center.dismiss(id));
    assert!(!center.dismiss(id));
    assert!(center.is_empty());
}

#[test]
fn next_expiry_tracks_oldest_notification() {
    let mut center = NotificationCenter::new(Duration::from_secs(3));
    let start = Instant::now();
    assert_eq!(center.next_expiry(start), None);
    center.push_at("a", Severity::Info, start);
    center.push_at("b", Severity::Info, start + Duration::from_secs(1));
    assert_eq!(
        center.next_expiry(start + Duration::from_secs(2)),
        Some(Duration::from_secs(1))
    );
}
