//! Dashboard Aggregator: read-only views composed from both repositories.
//! Every time-dependent query takes `now` explicitly so the views are
//! reproducible in tests and in back-dated reports.

use crate::models::{Equipment, Status, Task};
use crate::repo::task;
use crate::store::RecordStore;
use chrono::{Duration, NaiveDate};

/// The `n` equipment records with the most imminent DAC targets, ascending.
/// Records whose DAC does not parse sort last; ties keep insertion order.
pub fn upcoming_dac(store: &RecordStore, n: usize) -> Vec<&Equipment> {
    let mut rows: Vec<&Equipment> = store.equipment.iter().collect();
    rows.sort_by_key(|e| e.dac_date().unwrap_or(NaiveDate::MAX));
    rows.truncate(n);
    rows
}

pub fn ongoing_tasks(store: &RecordStore) -> Vec<&Task> {
    task::filter_by_status(store, Status::Ongoing)
}

/// Punch-list items are treated as urgent work.
pub fn urgent_tasks(store: &RecordStore) -> Vec<&Task> {
    task::filter_by_work_type_contains(store, "Punch List", false)
}

/// Tasks due within the next seven days, inclusive on both ends.
pub fn this_week_tasks(store: &RecordStore, now: NaiveDate) -> Vec<&Task> {
    task::filter_by_due_range(store, now, now + Duration::days(7))
}

/// Overdue and not completed.
pub fn backlog_tasks(store: &RecordStore, now: NaiveDate) -> Vec<&Task> {
    store
        .tasks
        .iter()
        .filter(|t| !t.status.is_completed())
        .filter(|t| t.due().map(|d| d < now).unwrap_or(false))
        .collect()
}

/// Tasks opened within the last seven days.
pub fn recent_tasks(store: &RecordStore, now: NaiveDate) -> Vec<&Task> {
    task::filter_by_created_since(store, now - Duration::days(7))
}
