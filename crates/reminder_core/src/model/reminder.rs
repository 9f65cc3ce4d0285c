//! Reminder entity, enumerations and creation input.
//!
//! # Responsibility
//! - Define the canonical reminder record owned by the store.
//! - Provide stable wire names for category, priority and frequency values.
//! - Validate creation drafts before they become reminders.
//!
//! # Invariants
//! - `id` is stable and never reused for another reminder.
//! - Recurring reminders never carry `completed = true` or `completed_at`.
//! - `recurring_frequency` is `None` exactly when `is_recurring` is false.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every reminder.
pub type ReminderId = Uuid;

/// UTC instant used for due, creation and completion times.
pub type Timestamp = DateTime<Utc>;

/// Wire value meaning "no constraint" for filter parsing.
pub const FILTER_ALL: &str = "all";

/// Fixed reminder category set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Personal,
    Work,
    Health,
    Study,
}

impl Category {
    /// All categories in form display order.
    pub const ALL: [Category; 4] = [Self::Personal, Self::Work, Self::Health, Self::Study];

    /// Stable string id used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Work => "Work",
            Self::Health => "Health",
            Self::Study => "Study",
        }
    }

    /// Parses one category from its wire value.
    pub fn parse(value: &str) -> Result<Self, ParseValueError> {
        let normalized = value.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| ParseValueError::new("category", normalized))
    }
}

/// Reminder priority.
///
/// Sorting uses `rank()`, so `High` sorts before `Medium` before `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// All priorities in form display order.
    pub const ALL: [Priority; 3] = [Self::Low, Self::Medium, Self::High];

    /// Stable string id used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Sort rank; lower ranks come first.
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }

    /// Parses one priority from its wire value.
    pub fn parse(value: &str) -> Result<Self, ParseValueError> {
        let normalized = value.trim();
        Self::ALL
            .into_iter()
            .find(|priority| priority.as_str() == normalized)
            .ok_or_else(|| ParseValueError::new("priority", normalized))
    }
}

/// Recurrence interval unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurringFrequency {
    /// Not recurring.
    None,
    Daily,
    Weekly,
    Monthly,
}

impl RecurringFrequency {
    /// Stable string id used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Short human label shown next to recurring reminders.
    ///
    /// Returns `None` for non-recurring reminders.
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Daily => Some("Daily"),
            Self::Weekly => Some("Weekly"),
            Self::Monthly => Some("Monthly"),
        }
    }

    /// Parses one frequency from its wire value (case-insensitive).
    pub fn parse(value: &str) -> Result<Self, ParseValueError> {
        let normalized = value.trim();
        match normalized.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(ParseValueError::new("recurring_frequency", normalized)),
        }
    }
}

/// Boundary value that could not be parsed into a typed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseValueError {
    /// Field name the value was meant for.
    pub field: &'static str,
    /// Offending value after trimming.
    pub value: String,
}

impl ParseValueError {
    pub(crate) fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

impl Display for ParseValueError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unsupported {} value: `{}`", self.field, self.value)
    }
}

impl Error for ParseValueError {}

/// Validation errors raised when a draft cannot become a reminder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReminderValidationError {
    /// Title is empty after trim.
    EmptyTitle,
    /// Due timestamp was not provided.
    MissingDueDate,
    /// Due timestamp text could not be parsed.
    InvalidDueDate(String),
    /// Recurring draft without a recurrence interval.
    MissingFrequency,
    /// Persisted shape breaks the recurrence invariant.
    InconsistentRecurrence {
        is_recurring: bool,
        frequency: RecurringFrequency,
    },
}

impl Display for ReminderValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "reminder title must not be blank"),
            Self::MissingDueDate => write!(f, "reminder due date is required"),
            Self::InvalidDueDate(value) => write!(f, "invalid reminder due date: `{value}`"),
            Self::MissingFrequency => {
                write!(f, "recurring reminder requires daily|weekly|monthly frequency")
            }
            Self::InconsistentRecurrence {
                is_recurring,
                frequency,
            } => write!(
                f,
                "is_recurring ({is_recurring}) does not match recurring_frequency ({})",
                frequency.as_str()
            ),
        }
    }
}

impl Error for ReminderValidationError {}

/// Canonical reminder record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawReminder")]
pub struct Reminder {
    pub id: ReminderId,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub category: Category,
    pub priority: Priority,
    /// Meaningful only when `is_recurring == false`.
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub is_recurring: bool,
    pub recurring_frequency: RecurringFrequency,
    /// Last acknowledgment time of a recurring reminder.
    pub last_completed_at: Option<DateTime<Utc>>,
}

impl Reminder {
    /// Returns whether this reminder reached its terminal completed state.
    ///
    /// Recurring reminders are never terminally completed.
    pub fn is_done(&self) -> bool {
        self.completed && !self.is_recurring
    }

    /// Checks the recurrence invariant.
    pub fn validate(&self) -> Result<(), ReminderValidationError> {
        check_recurrence(self.is_recurring, self.recurring_frequency)
    }
}

fn check_recurrence(
    is_recurring: bool,
    frequency: RecurringFrequency,
) -> Result<(), ReminderValidationError> {
    if is_recurring == (frequency == RecurringFrequency::None) {
        return Err(ReminderValidationError::InconsistentRecurrence {
            is_recurring,
            frequency,
        });
    }
    Ok(())
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawReminder {
    id: ReminderId,
    title: String,
    #[serde(default)]
    description: String,
    due_date: DateTime<Utc>,
    category: Category,
    priority: Priority,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    completed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    is_recurring: bool,
    recurring_frequency: RecurringFrequency,
    #[serde(default)]
    last_completed_at: Option<DateTime<Utc>>,
}

impl TryFrom<RawReminder> for Reminder {
    type Error = ReminderValidationError;

    fn try_from(raw: RawReminder) -> Result<Self, Self::Error> {
        let reminder = Self {
            id: raw.id,
            title: raw.title,
            description: raw.description,
            due_date: raw.due_date,
            category: raw.category,
            priority: raw.priority,
            completed: raw.completed,
            completed_at: raw.completed_at,
            created_at: raw.created_at,
            is_recurring: raw.is_recurring,
            recurring_frequency: raw.recurring_frequency,
            last_completed_at: raw.last_completed_at,
        };
        reminder.validate()?;
        Ok(reminder)
    }
}

/// Unvalidated creation input coming from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderDraft {
    pub title: String,
    pub description: String,
    pub due_date: Option<DateTime<Utc>>,
    pub category: Category,
    pub priority: Priority,
    pub is_recurring: bool,
    /// Ignored unless `is_recurring` is set.
    pub recurring_frequency: RecurringFrequency,
}

impl Default for ReminderDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            due_date: None,
            category: Category::Personal,
            priority: Priority::Medium,
            is_recurring: false,
            recurring_frequency: RecurringFrequency::Weekly,
        }
    }
}

impl ReminderDraft {
    /// Builds a reminder with the given identity and creation time.
    ///
    /// # Contract
    /// - Title and description are trimmed.
    /// - Frequency is forced to `None` when the draft is not recurring.
    ///
    /// # Errors
    /// - `EmptyTitle` when the trimmed title is empty.
    /// - `MissingDueDate` when no due date is set.
    /// - `MissingFrequency` when recurring with frequency `None`.
    pub fn into_reminder(
        self,
        id: ReminderId,
        now: DateTime<Utc>,
    ) -> Result<Reminder, ReminderValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ReminderValidationError::EmptyTitle);
        }
        let due_date = self
            .due_date
            .ok_or(ReminderValidationError::MissingDueDate)?;
        let recurring_frequency = if self.is_recurring {
            if self.recurring_frequency == RecurringFrequency::None {
                return Err(ReminderValidationError::MissingFrequency);
            }
            self.recurring_frequency
        } else {
            RecurringFrequency::None
        };

        Ok(Reminder {
            id,
            title: title.to_string(),
            description: self.description.trim().to_string(),
            due_date,
            category: self.category,
            priority: self.priority,
            completed: false,
            completed_at: None,
            created_at: now,
            is_recurring: self.is_recurring,
            recurring_frequency,
            last_completed_at: None,
        })
    }
}

const LOCAL_INPUT_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parses a due timestamp from form input.
///
/// Accepts RFC 3339 or `datetime-local` shaped values (treated as UTC).
/// Returns `Ok(None)` for blank input so callers can report a missing date.
pub fn parse_due_date(value: &str) -> Result<Option<DateTime<Utc>>, ReminderValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(Some(parsed.with_timezone(&Utc)));
    }
    LOCAL_INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|naive| Some(naive.and_utc()))
        .ok_or_else(|| ReminderValidationError::InvalidDueDate(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{
        parse_due_date, Category, Priority, RecurringFrequency, ReminderDraft,
        ReminderValidationError,
    };
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    #[test]
    fn parse_accepts_wire_names() {
        assert_eq!(Category::parse(" Work ").unwrap(), Category::Work);
        assert_eq!(Priority::parse("High").unwrap(), Priority::High);
        assert_eq!(
            RecurringFrequency::parse("MONTHLY").unwrap(),
            RecurringFrequency::Monthly
        );
    }

    #[test]
    fn parse_rejects_unknown_values() {
        let err = Category::parse("Chores").unwrap_err();
        assert_eq!(err.field, "category");
        assert_eq!(err.value, "Chores");
        assert!(Priority::parse("urgent").is_err());
    }

    #[test]
    fn priority_rank_orders_high_first() {
        assert!(Priority::High.rank() < Priority::Medium.rank());
        assert!(Priority::Medium.rank() < Priority::Low.rank());
    }

    #[test]
    fn draft_defaults_match_empty_form() {
        let draft = ReminderDraft::default();
        assert_eq!(draft.category, Category::Personal);
        assert_eq!(draft.priority, Priority::Medium);
        assert!(!draft.is_recurring);
        assert_eq!(draft.recurring_frequency, RecurringFrequency::Weekly);
        assert_eq!(draft.due_date, None);
    }

    #[test]
    fn non_recurring_draft_forces_frequency_none() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap();
        let draft = ReminderDraft {
            title: "  Pay rent ".to_string(),
            description: " landlord ".to_string(),
            due_date: Some(now),
            ..ReminderDraft::default()
        };

        let reminder = draft.into_reminder(Uuid::new_v4(), now).unwrap();
        assert_eq!(reminder.title, "Pay rent");
        assert_eq!(reminder.description, "landlord");
        assert_eq!(reminder.recurring_frequency, RecurringFrequency::None);
        assert!(reminder.validate().is_ok());
    }

    #[test]
    fn recurring_draft_without_frequency_is_rejected() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap();
        let draft = ReminderDraft {
            title: "Stretch".to_string(),
            due_date: Some(now),
            is_recurring: true,
            recurring_frequency: RecurringFrequency::None,
            ..ReminderDraft::default()
        };

        let err = draft.into_reminder(Uuid::new_v4(), now).unwrap_err();
        assert_eq!(err, ReminderValidationError::MissingFrequency);
    }

    #[test]
    fn parse_due_date_supports_rfc3339_and_local_input() {
        let expected = Utc.with_ymd_and_hms(2026, 5, 4, 9, 30, 0).unwrap();
        assert_eq!(
            parse_due_date("2026-05-04T09:30:00Z").unwrap(),
            Some(expected)
        );
        assert_eq!(parse_due_date("2026-05-04T09:30").unwrap(), Some(expected));
        assert_eq!(parse_due_date("   ").unwrap(), None);
        assert!(matches!(
            parse_due_date("tomorrow"),
            Err(ReminderValidationError::InvalidDueDate(_))
        ));
    }
}
