//! Filter + sort pipeline for the reminder list.
//!
//! # Invariants
//! - Predicates (category, priority, status, search) are ANDed.
//! - Sorting is stable; equal keys keep collection order.
//! - Recurring reminders always pass `Active` and never pass `Completed`.

use crate::model::reminder::{Category, ParseValueError, Priority, Reminder, FILTER_ALL};

/// Completion-state constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    /// Excludes terminally completed reminders.
    Active,
    /// Only terminally completed reminders.
    Completed,
}

impl StatusFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => FILTER_ALL,
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Result<Self, ParseValueError> {
        match value.trim() {
            FILTER_ALL => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            other => Err(ParseValueError::new("status", other)),
        }
    }

    fn matches(self, reminder: &Reminder) -> bool {
        match self {
            Self::All => true,
            Self::Active => !reminder.is_done(),
            Self::Completed => reminder.is_done(),
        }
    }
}

/// List ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Earliest due first.
    #[default]
    DueDate,
    /// High, then Medium, then Low.
    Priority,
    /// Newest first.
    CreatedAt,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DueDate => "dueDate",
            Self::Priority => "priority",
            Self::CreatedAt => "createdAt",
        }
    }

    pub fn parse(value: &str) -> Result<Self, ParseValueError> {
        match value.trim() {
            "dueDate" => Ok(Self::DueDate),
            "priority" => Ok(Self::Priority),
            "createdAt" => Ok(Self::CreatedAt),
            other => Err(ParseValueError::new("sort", other)),
        }
    }
}

/// Active list criteria. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderFilter {
    /// Case-insensitive substring over title or description.
    pub search: String,
    pub category: Option<Category>,
    pub priority: Option<Priority>,
    pub status: StatusFilter,
    pub sort: SortKey,
}

impl ReminderFilter {
    /// Returns whether one reminder passes every predicate.
    pub fn matches(&self, reminder: &Reminder) -> bool {
        if self
            .category
            .is_some_and(|category| reminder.category != category)
        {
            return false;
        }
        if self
            .priority
            .is_some_and(|priority| reminder.priority != priority)
        {
            return false;
        }
        if !self.status.matches(reminder) {
            return false;
        }
        if self.search.trim().is_empty() {
            return true;
        }

        let query = self.search.to_lowercase();
        reminder.title.to_lowercase().contains(&query)
            || reminder.description.to_lowercase().contains(&query)
    }
}

/// Parses an optional category filter, where `all` means no constraint.
pub fn parse_category_filter(value: &str) -> Result<Option<Category>, ParseValueError> {
    match value.trim() {
        FILTER_ALL => Ok(None),
        other => Category::parse(other).map(Some),
    }
}

/// Parses an optional priority filter, where `all` means no constraint.
pub fn parse_priority_filter(value: &str) -> Result<Option<Priority>, ParseValueError> {
    match value.trim() {
        FILTER_ALL => Ok(None),
        other => Priority::parse(other).map(Some),
    }
}

/// Applies `filter` and returns matching reminders in display order.
pub fn filter_reminders(reminders: &[Reminder], filter: &ReminderFilter) -> Vec<Reminder> {
    let mut matched = reminders
        .iter()
        .filter(|reminder| filter.matches(reminder))
        .cloned()
        .collect::<Vec<_>>();
    sort_reminders(&mut matched, filter.sort);
    matched
}

/// Stable in-place sort by `key`.
pub fn sort_reminders(reminders: &mut [Reminder], key: SortKey) {
    match key {
        SortKey::DueDate => reminders.sort_by_key(|reminder| reminder.due_date),
        SortKey::Priority => reminders.sort_by_key(|reminder| reminder.priority.rank()),
        SortKey::CreatedAt => reminders.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }
}
