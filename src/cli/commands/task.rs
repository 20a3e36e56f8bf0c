use crate::cli::parser::TaskAction;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export;
use crate::models::{Status, Task, WorkType};
use crate::repo::{equipment as equipment_repo, task as repo};
use crate::session::Session;
use crate::store::RecordStore;
use crate::ui::messages;
use crate::utils::{date, table::Table};
use std::path::Path;

pub fn handle(action: &TaskAction, cfg: &Config, session: &Session) -> AppResult<()> {
    let mut store = RecordStore::open(cfg)?;

    match action {
        TaskAction::List {
            status,
            work_type_contains,
            export: export_path,
            format,
        } => {
            let mut tasks: Vec<&Task> = match status {
                Some(s) => {
                    let status = Status::st_from_str(s)
                        .ok_or_else(|| AppError::InvalidStatus(s.clone()))?;
                    repo::filter_by_status(&store, status)
                }
                None => repo::list_all(&store).iter().collect(),
            };

            if let Some(needle) = work_type_contains {
                let by_wt = repo::filter_by_work_type_contains(&store, needle, cfg.match_case);
                tasks.retain(|t| by_wt.iter().any(|w| w.id == t.id));
            }

            print_tasks(&tasks);

            if let Some(path) = export_path {
                export::export_tasks(Path::new(path), format, &tasks)?;
            }
        }

        TaskAction::Add {
            tag,
            work_type,
            mer,
            description,
        } => {
            let wt = WorkType::wt_from_str(work_type)
                .ok_or_else(|| AppError::InvalidWorkType(work_type.clone()))?;

            // Tags are an unenforced by-value reference; a typo should be
            // visible but must not block registration.
            if equipment_repo::find_by_tag(&store, tag).is_empty() {
                messages::warning(format!("Tag '{tag}' has no equipment record"));
            }

            let id = repo::add(&mut store, session, tag, wt, mer, description, date::today())?;
            messages::success(format!("Task #{id} registered"));
        }

        TaskAction::Status { id, status } => {
            let new_status =
                Status::st_from_str(status).ok_or_else(|| AppError::InvalidStatus(status.clone()))?;
            repo::update_status(&mut store, session, *id, new_status)?;
            messages::success(format!("Task #{id} updated to '{}'", new_status.st_as_str()));
        }

        TaskAction::Show { id } => {
            let task = repo::find_by_id(&store, *id)?;
            println!("📄 {} - {}", task.tag_no, task.title);
            println!("Status:      {}", task.status.st_as_str());
            println!("Work Type:   {}", task.work_type);
            println!("MER No:      {}", task.mer_no);
            println!("Description: {}", task.description);
            println!(
                "Dates:       Created {} | Due {}",
                task.created_date, task.due_date
            );
        }
    }
    Ok(())
}

pub fn print_tasks(tasks: &[&Task]) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }
    let mut table = Table::new(Task::COLUMNS.to_vec());
    for task in tasks {
        table.add_row(task.row().to_vec());
    }
    print!("{}", table.render());
}
