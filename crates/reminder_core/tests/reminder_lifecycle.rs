use chrono::{DateTime, Duration, TimeZone, Utc};
use reminder_core::{
    classify, DueLabel, DueTone, RecurringFrequency, ReminderDraft, ReminderStore,
    ReminderValidationError,
};
use std::collections::HashSet;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 14, 30, 0).unwrap()
}

fn draft(title: &str, due_date: DateTime<Utc>) -> ReminderDraft {
    ReminderDraft {
        title: title.to_string(),
        due_date: Some(due_date),
        ..ReminderDraft::default()
    }
}

#[test]
fn create_with_blank_title_is_rejected_without_mutation() {
    let (store, _) = ReminderStore::new()
        .create(draft("existing", now()), now())
        .unwrap();

    let err = store.create(draft("   \t", now()), now()).unwrap_err();
    assert_eq!(err, ReminderValidationError::EmptyTitle);
    assert_eq!(store.len(), 1);
}

#[test]
fn create_without_due_date_is_rejected_without_mutation() {
    let store = ReminderStore::new();
    let missing = ReminderDraft {
        title: "No date".to_string(),
        ..ReminderDraft::default()
    };

    let err = store.create(missing, now()).unwrap_err();
    assert_eq!(err, ReminderValidationError::MissingDueDate);
    assert!(store.is_empty());
}

#[test]
fn created_ids_are_pairwise_distinct() {
    let mut store = ReminderStore::new();
    for index in 0..200 {
        let (next, _) = store
            .create(draft(&format!("task {index}"), now()), now())
            .unwrap();
        store = next;
    }

    let ids = store
        .reminders()
        .iter()
        .map(|reminder| reminder.id)
        .collect::<HashSet<_>>();
    assert_eq!(ids.len(), 200);
}

#[test]
fn recurring_reminder_never_becomes_completed() {
    let recurring = ReminderDraft {
        is_recurring: true,
        recurring_frequency: RecurringFrequency::Monthly,
        ..draft("pay bills", now())
    };
    let (mut store, created) = ReminderStore::new().create(recurring, now()).unwrap();

    for step in 0..5 {
        store = store.toggle_complete(created.id, now() + Duration::hours(step));
        let reminder = store.get(created.id).unwrap();
        assert!(!reminder.completed);
        assert_eq!(reminder.completed_at, None);
        assert_eq!(
            reminder.last_completed_at,
            Some(now() + Duration::hours(step))
        );
    }
}

#[test]
fn non_recurring_toggle_is_an_involution() {
    let (store, created) = ReminderStore::new()
        .create(draft("call dentist", now()), now())
        .unwrap();

    let once = store.toggle_complete(created.id, now());
    let reminder = once.get(created.id).unwrap();
    assert!(reminder.completed);
    assert_eq!(reminder.completed_at, Some(now()));

    let twice = once.toggle_complete(created.id, now() + Duration::minutes(1));
    let reminder = twice.get(created.id).unwrap();
    assert!(!reminder.completed);
    assert_eq!(reminder.completed_at, None);
}

#[test]
fn soon_reminder_turns_overdue_in_days_after_moving_back() {
    let (store, created) = ReminderStore::new()
        .create(draft("water plants", now() + Duration::hours(1)), now())
        .unwrap();
    assert_eq!(classify(created.due_date, now()).tone, DueTone::Soon);

    let moved = store.snooze(created.id, -2);
    let reminder = moved.get(created.id).unwrap();
    let status = classify(reminder.due_date, now() + Duration::hours(1));

    assert_eq!(status.tone, DueTone::Overdue);
    assert_eq!(status.label, DueLabel::OverdueDays(2));
    assert_eq!(status.label.to_string(), "Trễ 2 ngày");
}

#[test]
fn daily_recurring_toggle_moves_to_day_after_tomorrow() {
    let tomorrow_nine = Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap();
    let daily = ReminderDraft {
        is_recurring: true,
        recurring_frequency: RecurringFrequency::Daily,
        ..draft("vitamins", tomorrow_nine)
    };
    let (store, created) = ReminderStore::new().create(daily, now()).unwrap();

    let store = store.toggle_complete(created.id, now());
    let reminder = store.get(created.id).unwrap();

    assert_eq!(
        reminder.due_date,
        Utc.with_ymd_and_hms(2026, 10, 20, 9, 0, 0).unwrap()
    );
    assert_eq!(reminder.last_completed_at, Some(now()));
    assert!(!reminder.completed);
}

#[test]
fn snooze_three_days_keeps_time_of_day() {
    let due = Utc.with_ymd_and_hms(2026, 10, 30, 17, 45, 0).unwrap();
    let (store, created) = ReminderStore::new()
        .create(draft("renew passport", due), now())
        .unwrap();

    let store = store.snooze(created.id, 3);
    assert_eq!(
        store.get(created.id).unwrap().due_date,
        Utc.with_ymd_and_hms(2026, 11, 2, 17, 45, 0).unwrap()
    );
}
