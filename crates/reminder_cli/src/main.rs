//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `reminder_core` linkage outside the FFI runtime.
//! - Print the seeded dashboard: next reminder, counters and the list.
//!
//! Logging is enabled only when `REMINDER_LOG_DIR` is set; the level comes
//! from `REMINDER_LOG_LEVEL` or the build default.

use reminder_core::{
    classify, default_log_level, init_logging, ReminderFilter, ReminderService, SystemClock,
};

fn main() {
    if let Ok(log_dir) = std::env::var("REMINDER_LOG_DIR") {
        let level = std::env::var("REMINDER_LOG_LEVEL")
            .unwrap_or_else(|_| default_log_level().as_str().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("reminder_core ping={}", reminder_core::ping());
    println!("reminder_core version={}", reminder_core::core_version());

    let service = ReminderService::with_demo_data(SystemClock);
    let now = service.now();

    match service.next_reminder() {
        Some(next) => println!("next: {} @ {}", next.title, next.due_date.to_rfc3339()),
        None => println!("next: none"),
    }

    let stats = service.statistics();
    println!(
        "stats: total={} completed={} overdue={} recurring={}",
        stats.total, stats.completed, stats.overdue, stats.recurring
    );

    for reminder in service.filtered_view(&ReminderFilter::default()) {
        let status = classify(reminder.due_date, now);
        let repeat = reminder.recurring_frequency.label().unwrap_or("Once");
        println!(
            "- [{}] {} ({}, {}, {}) {}",
            status.tone.as_str(),
            reminder.title,
            reminder.category.as_str(),
            reminder.priority.as_str(),
            repeat,
            status.label
        );
    }
}
