//! Starter reminders shown on first launch.

use crate::model::reminder::{Category, Priority, RecurringFrequency, Reminder};
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Returns the three demo reminders relative to `now`.
///
/// Two recurring habits (daily, weekly) and one one-off personal task, in
/// that order.
pub fn demo_reminders(now: DateTime<Utc>) -> Vec<Reminder> {
    vec![
        demo(
            now,
            "Morning workout",
            "20-minute cardio session and stretching routine.",
            Duration::hours(8),
            Category::Health,
            Priority::High,
            RecurringFrequency::Daily,
        ),
        demo(
            now,
            "Stand-up meeting",
            "Share progress with the product squad.",
            Duration::hours(24),
            Category::Work,
            Priority::Medium,
            RecurringFrequency::Weekly,
        ),
        demo(
            now,
            "Call mom",
            "Catch up and plan the weekend dinner.",
            Duration::hours(48),
            Category::Personal,
            Priority::Low,
            RecurringFrequency::None,
        ),
    ]
}

fn demo(
    now: DateTime<Utc>,
    title: &str,
    description: &str,
    due_in: Duration,
    category: Category,
    priority: Priority,
    recurring_frequency: RecurringFrequency,
) -> Reminder {
    Reminder {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: description.to_string(),
        due_date: now + due_in,
        category,
        priority,
        completed: false,
        completed_at: None,
        created_at: now,
        is_recurring: recurring_frequency != RecurringFrequency::None,
        recurring_frequency,
        last_completed_at: None,
    }
}

#[cfg(test)]
mod tests {
    use super::demo_reminders;
    use chrono::{TimeZone, Utc};

    #[test]
    fn demo_reminders_satisfy_recurrence_invariant() {
        let now = Utc.with_ymd_and_hms(2026, 1, 10, 6, 0, 0).unwrap();
        let reminders = demo_reminders(now);

        assert_eq!(reminders.len(), 3);
        assert!(reminders.iter().all(|reminder| reminder.validate().is_ok()));
        assert_eq!(reminders.iter().filter(|r| r.is_recurring).count(), 2);
        assert!(reminders.iter().all(|reminder| reminder.due_date > now));
    }
}
