//! Task Repository: registration, status updates and queries over the Task
//! table. Date filters parse on the fly and silently drop rows whose stored
//! date does not parse; lookup misses and persistence failures propagate.

use crate::errors::{AppError, AppResult};
use crate::models::{Status, Task, WorkType};
use crate::session::Session;
use crate::store::RecordStore;
use chrono::NaiveDate;

/// Next task ID, assigned as `count + 1`. Tasks are never deleted, so the
/// sequence is strictly increasing. Only valid under a single writer: two
/// concurrent sessions would both read the same count.
pub fn next_id(store: &RecordStore) -> u32 {
    store.tasks.len() as u32 + 1
}

/// Register a new task against a tag. Title, dates and initial status are
/// all derived here; returns the assigned ID.
pub fn add(
    store: &mut RecordStore,
    session: &Session,
    tag_no: &str,
    work_type: WorkType,
    mer_no: &str,
    description: &str,
    created: NaiveDate,
) -> AppResult<u32> {
    session.require_admin("task add")?;

    let id = next_id(store);
    let task = Task::new(id, tag_no, work_type, mer_no, description, created);
    store.tasks.push(task);
    store.save()?;
    store.log(
        "task_add",
        &format!("#{id}"),
        &format!("{tag_no} / {}", work_type.wt_as_str()),
    )?;
    Ok(id)
}

/// Set the status of an existing task. Status is the only field a task ever
/// changes after registration.
pub fn update_status(
    store: &mut RecordStore,
    session: &Session,
    id: u32,
    new_status: Status,
) -> AppResult<()> {
    session.require_admin("task status")?;

    let task = store
        .tasks
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(AppError::TaskNotFound(id))?;
    task.status = new_status;

    store.save()?;
    store.log(
        "task_status",
        &format!("#{id}"),
        &format!("status set to {}", new_status.st_as_str()),
    )?;
    Ok(())
}

pub fn list_all(store: &RecordStore) -> &[Task] {
    &store.tasks
}

pub fn find_by_id(store: &RecordStore, id: u32) -> AppResult<&Task> {
    store
        .tasks
        .iter()
        .find(|t| t.id == id)
        .ok_or(AppError::TaskNotFound(id))
}

pub fn filter_by_status(store: &RecordStore, status: Status) -> Vec<&Task> {
    store.tasks.iter().filter(|t| t.status == status).collect()
}

/// Substring match on Work Type. Rows with an empty Work Type are skipped.
pub fn filter_by_work_type_contains<'a>(
    store: &'a RecordStore,
    needle: &str,
    case_sensitive: bool,
) -> Vec<&'a Task> {
    let needle_lc = needle.to_lowercase();
    store
        .tasks
        .iter()
        .filter(|t| {
            if t.work_type.trim().is_empty() {
                return false;
            }
            if case_sensitive {
                t.work_type.contains(needle)
            } else {
                t.work_type.to_lowercase().contains(&needle_lc)
            }
        })
        .collect()
}

/// Inclusive range match on Due Date. Rows with an unparseable due date are
/// skipped, never an error.
pub fn filter_by_due_range(store: &RecordStore, start: NaiveDate, end: NaiveDate) -> Vec<&Task> {
    store
        .tasks
        .iter()
        .filter(|t| t.due().map(|d| d >= start && d <= end).unwrap_or(false))
        .collect()
}

/// Rows created on or after the cutoff; unparseable created dates skipped.
pub fn filter_by_created_since(store: &RecordStore, cutoff: NaiveDate) -> Vec<&Task> {
    store
        .tasks
        .iter()
        .filter(|t| t.created().map(|d| d >= cutoff).unwrap_or(false))
        .collect()
}

/// Any-field search: a row matches when the string representation of any of
/// its fields contains `text`, case-insensitively. `work_type` narrows the
/// result to an exact Work Type match when given.
pub fn search<'a>(
    store: &'a RecordStore,
    text: &str,
    work_type: Option<&str>,
) -> Vec<&'a Task> {
    let text_lc = text.to_lowercase();
    store
        .tasks
        .iter()
        .filter(|t| {
            text_lc.is_empty()
                || t.row()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&text_lc))
        })
        .filter(|t| work_type.map(|wt| t.work_type == wt).unwrap_or(true))
        .collect()
}
