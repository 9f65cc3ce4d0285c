//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the reminder entry points to Dart via FRB.
//! - Convert plain strings to typed core values at the boundary.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - One process-wide reminder service backs every call.
//! - Malformed or unknown reminder ids are no-ops.

use log::warn;
use reminder_core::{
    classify, core_version as core_version_inner, init_logging as init_logging_inner,
    parse_category_filter, parse_due_date, parse_priority_filter, ping as ping_inner, Category,
    Priority, RecurringFrequency, Reminder, ReminderDraft, ReminderFilter, ReminderId,
    ReminderService, SortKey, StatusFilter, SystemClock, Timestamp, DEFAULT_SNOOZE_DAYS,
};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use uuid::Uuid;

static REMINDER_SERVICE: OnceLock<Mutex<ReminderService>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Returns empty string on success and an error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One reminder row, with due status evaluated at call time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderItem {
    pub id: String,
    pub title: String,
    pub description: String,
    /// RFC 3339 UTC timestamp.
    pub due_date: String,
    pub category: String,
    pub priority: String,
    pub completed: bool,
    pub completed_at: Option<String>,
    pub created_at: String,
    pub is_recurring: bool,
    pub recurring_frequency: String,
    pub last_completed_at: Option<String>,
    /// `overdue|soon|scheduled`.
    pub due_tone: String,
    pub due_label: String,
}

/// Envelope for create/complete/snooze calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderActionResponse {
    pub ok: bool,
    pub reminder_id: Option<String>,
    pub message: String,
}

impl ReminderActionResponse {
    fn success(message: impl Into<String>, reminder_id: Option<String>) -> Self {
        Self {
            ok: true,
            reminder_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            reminder_id: None,
            message: message.into(),
        }
    }
}

/// List envelope for filtered reminder views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderListResponse {
    pub items: Vec<ReminderItem>,
    /// Empty on success, parse error otherwise.
    pub message: String,
}

/// Dashboard counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderStatsResponse {
    pub total: u32,
    pub completed: u32,
    pub overdue: u32,
    pub recurring: u32,
}

/// Creates a reminder from form input.
///
/// Input semantics:
/// - `due_date`: RFC 3339 or `YYYY-MM-DDTHH:MM` (UTC); blank means missing.
/// - `category`, `priority`: display names (`Work`, `High`).
/// - `recurring_frequency`: `daily|weekly|monthly`, ignored unless recurring.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Validation failures return `ok=false` and leave the store untouched.
#[flutter_rust_bridge::frb(sync)]
pub fn reminder_create(
    title: String,
    description: String,
    due_date: String,
    category: String,
    priority: String,
    is_recurring: bool,
    recurring_frequency: String,
) -> ReminderActionResponse {
    let draft = match build_draft(
        title,
        description,
        &due_date,
        &category,
        &priority,
        is_recurring,
        &recurring_frequency,
    ) {
        Ok(draft) => draft,
        Err(message) => return ReminderActionResponse::failure(message),
    };

    match lock_service().create_reminder(draft) {
        Ok(reminder) => {
            ReminderActionResponse::success("Reminder created.", Some(reminder.id.to_string()))
        }
        Err(err) => ReminderActionResponse::failure(format!("reminder_create failed: {err}")),
    }
}

/// Completes a one-off reminder, or acknowledges a recurring one.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Unknown or malformed ids succeed as no-ops.
#[flutter_rust_bridge::frb(sync)]
pub fn reminder_toggle_complete(reminder_id: String) -> ReminderActionResponse {
    let Some(id) = parse_reminder_id(&reminder_id) else {
        return ReminderActionResponse::success("No matching reminder.", None);
    };
    lock_service().toggle_complete(id);
    ReminderActionResponse::success("Reminder updated.", Some(id.to_string()))
}

/// Pushes a reminder's due date by `days` (default one day).
///
/// # FFI contract
/// - Sync call, never panics.
/// - Unknown or malformed ids succeed as no-ops.
#[flutter_rust_bridge::frb(sync)]
pub fn reminder_snooze(reminder_id: String, days: Option<u32>) -> ReminderActionResponse {
    let Some(id) = parse_reminder_id(&reminder_id) else {
        return ReminderActionResponse::success("No matching reminder.", None);
    };
    let days = days.map_or(DEFAULT_SNOOZE_DAYS, i64::from);
    lock_service().snooze(id, days);
    ReminderActionResponse::success(
        format!("Reminder snoozed by {days} day(s)."),
        Some(id.to_string()),
    )
}

/// Returns the filtered and sorted reminder list.
///
/// Filter values use `all` for "no constraint"; `status` is
/// `all|active|completed`, `sort` is `dueDate|priority|createdAt`.
#[flutter_rust_bridge::frb(sync)]
pub fn reminder_list(
    search: String,
    category: String,
    priority: String,
    status: String,
    sort: String,
) -> ReminderListResponse {
    let filter = match build_filter(search, &category, &priority, &status, &sort) {
        Ok(filter) => filter,
        Err(message) => {
            return ReminderListResponse {
                items: Vec::new(),
                message,
            }
        }
    };

    let service = lock_service();
    let now = service.now();
    let items = service
        .filtered_view(&filter)
        .iter()
        .map(|reminder| to_reminder_item(reminder, now))
        .collect();
    ReminderListResponse {
        items,
        message: String::new(),
    }
}

/// Returns dashboard counters over every reminder.
#[flutter_rust_bridge::frb(sync)]
pub fn reminder_stats() -> ReminderStatsResponse {
    let stats = lock_service().statistics();
    ReminderStatsResponse {
        total: saturating_u32(stats.total),
        completed: saturating_u32(stats.completed),
        overdue: saturating_u32(stats.overdue),
        recurring: saturating_u32(stats.recurring),
    }
}

/// Returns the earliest-due reminder that is not completed.
#[flutter_rust_bridge::frb(sync)]
pub fn reminder_next() -> Option<ReminderItem> {
    let service = lock_service();
    let now = service.now();
    service
        .next_reminder()
        .map(|reminder| to_reminder_item(&reminder, now))
}

fn lock_service() -> MutexGuard<'static, ReminderService> {
    REMINDER_SERVICE
        .get_or_init(|| Mutex::new(ReminderService::with_demo_data(SystemClock)))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

fn build_draft(
    title: String,
    description: String,
    due_date: &str,
    category: &str,
    priority: &str,
    is_recurring: bool,
    recurring_frequency: &str,
) -> Result<ReminderDraft, String> {
    fn to_message(err: impl std::fmt::Display) -> String {
        format!("reminder_create failed: {err}")
    }

    let due_date = parse_due_date(due_date).map_err(to_message)?;
    let category = Category::parse(category).map_err(to_message)?;
    let priority = Priority::parse(priority).map_err(to_message)?;
    let recurring_frequency = if is_recurring {
        RecurringFrequency::parse(recurring_frequency).map_err(to_message)?
    } else {
        RecurringFrequency::None
    };

    Ok(ReminderDraft {
        title,
        description,
        due_date,
        category,
        priority,
        is_recurring,
        recurring_frequency,
    })
}

fn build_filter(
    search: String,
    category: &str,
    priority: &str,
    status: &str,
    sort: &str,
) -> Result<ReminderFilter, String> {
    let to_message = |err: reminder_core::ParseValueError| format!("reminder_list failed: {err}");
    Ok(ReminderFilter {
        search,
        category: parse_category_filter(category).map_err(to_message)?,
        priority: parse_priority_filter(priority).map_err(to_message)?,
        status: StatusFilter::parse(status).map_err(to_message)?,
        sort: SortKey::parse(sort).map_err(to_message)?,
    })
}

fn parse_reminder_id(value: &str) -> Option<ReminderId> {
    match Uuid::parse_str(value.trim()) {
        Ok(id) => Some(id),
        Err(_) => {
            warn!("event=reminder_id_parse module=ffi status=skipped reason=malformed_id");
            None
        }
    }
}

fn to_reminder_item(reminder: &Reminder, now: Timestamp) -> ReminderItem {
    let status = classify(reminder.due_date, now);
    ReminderItem {
        id: reminder.id.to_string(),
        title: reminder.title.clone(),
        description: reminder.description.clone(),
        due_date: reminder.due_date.to_rfc3339(),
        category: reminder.category.as_str().to_string(),
        priority: reminder.priority.as_str().to_string(),
        completed: reminder.completed,
        completed_at: reminder.completed_at.map(|at| at.to_rfc3339()),
        created_at: reminder.created_at.to_rfc3339(),
        is_recurring: reminder.is_recurring,
        recurring_frequency: reminder.recurring_frequency.as_str().to_string(),
        last_completed_at: reminder.last_completed_at.map(|at| at.to_rfc3339()),
        due_tone: status.tone.as_str().to_string(),
        due_label: status.label.to_string(),
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
