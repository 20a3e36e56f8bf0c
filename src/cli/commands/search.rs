use crate::cli::commands::task::print_tasks;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::repo::task as repo;
use crate::store::RecordStore;

/// The "All" sentinel disables the Work Type filter.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Search { text, work_type } = cmd {
        let store = RecordStore::open(cfg)?;

        let wt_filter = if work_type.eq_ignore_ascii_case("all") {
            None
        } else {
            Some(work_type.as_str())
        };

        let results = repo::search(&store, text, wt_filter);
        println!("🔍 Search Results ({})\n", results.len());
        print_tasks(&results);
    }
    Ok(())
}
