use chrono::{TimeZone, Utc};
use reminder_core::{
    Category, Priority, RecurringFrequency, Reminder, ReminderDraft, ReminderValidationError,
};
use uuid::Uuid;

#[test]
fn reminder_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let now = Utc.with_ymd_and_hms(2026, 2, 13, 10, 0, 0).unwrap();
    let reminder = ReminderDraft {
        title: "Stand-up".to_string(),
        due_date: Some(now),
        category: Category::Work,
        priority: Priority::High,
        is_recurring: true,
        recurring_frequency: RecurringFrequency::Weekly,
        ..ReminderDraft::default()
    }
    .into_reminder(id, now)
    .unwrap();

    let json = serde_json::to_value(&reminder).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["dueDate"], "2026-02-13T10:00:00Z");
    assert_eq!(json["category"], "Work");
    assert_eq!(json["priority"], "High");
    assert_eq!(json["isRecurring"], true);
    assert_eq!(json["recurringFrequency"], "weekly");
    assert_eq!(json["lastCompletedAt"], serde_json::Value::Null);

    let decoded: Reminder = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, reminder);
}

#[test]
fn deserialize_rejects_recurrence_mismatch() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "broken",
        "description": "",
        "dueDate": "2026-02-13T10:00:00Z",
        "category": "Health",
        "priority": "Low",
        "completed": false,
        "completedAt": null,
        "createdAt": "2026-02-13T09:00:00Z",
        "isRecurring": false,
        "recurringFrequency": "daily",
        "lastCompletedAt": null
    });

    let err = serde_json::from_value::<Reminder>(value).unwrap_err();
    assert!(
        err.to_string().contains("does not match recurring_frequency"),
        "unexpected error: {err}"
    );
}

#[test]
fn recurring_draft_keeps_frequency_and_starts_unacknowledged() {
    let now = Utc.with_ymd_and_hms(2026, 2, 13, 10, 0, 0).unwrap();
    let reminder = ReminderDraft {
        title: "Rent".to_string(),
        due_date: Some(now),
        is_recurring: true,
        recurring_frequency: RecurringFrequency::Monthly,
        ..ReminderDraft::default()
    }
    .into_reminder(Uuid::new_v4(), now)
    .unwrap();

    assert_eq!(reminder.recurring_frequency, RecurringFrequency::Monthly);
    assert_eq!(RecurringFrequency::Monthly.label(), Some("Monthly"));
    assert!(!reminder.completed);
    assert_eq!(reminder.last_completed_at, None);
}

#[test]
fn validation_errors_have_readable_messages() {
    assert_eq!(
        ReminderValidationError::EmptyTitle.to_string(),
        "reminder title must not be blank"
    );
    assert_eq!(
        ReminderValidationError::MissingDueDate.to_string(),
        "reminder due date is required"
    );
}
