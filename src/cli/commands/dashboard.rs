use crate::cli::parser::Commands;
use crate::config::Config;
use crate::dashboard;
use crate::errors::{AppError, AppResult};
use crate::models::Task;
use crate::store::RecordStore;
use crate::ui::messages::header;
use crate::utils::date;
use ansi_term::Colour;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard { now } = cmd {
        let now = match now {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let store = RecordStore::open(cfg)?;

        println!("📊 Project Dashboard | Date: {}\n", date::format_date(now));

        header("1. Sub System Status (Imminent DAC)");
        for eq in dashboard::upcoming_dac(&store, 5) {
            println!(
                "📅 {} | Sub-System: {} (Tag: {})",
                Colour::Blue.paint(eq.dac.as_str()),
                eq.sub_system,
                eq.tag_no
            );
        }
        println!();

        header("2. Ongoing Tasks");
        print_tasks(&dashboard::ongoing_tasks(&store), "▶️", "No ongoing tasks.");
        println!();

        header("3. Urgent Work");
        print_tasks(&dashboard::urgent_tasks(&store), "🚨", "No urgent work.");
        println!();

        header("4. This Week Tasks");
        let this_week = dashboard::this_week_tasks(&store, now);
        if this_week.is_empty() {
            println!("No tasks due this week.");
        } else {
            for t in this_week {
                println!(
                    "⏳ {} | {} ({})",
                    Colour::Yellow.paint(t.due_date.as_str()),
                    t.title,
                    t.tag_no
                );
            }
        }
        println!();

        header("5. Backlog Issues");
        let backlog = dashboard::backlog_tasks(&store, now);
        if backlog.is_empty() {
            println!("{}", Colour::Green.paint("No backlog items!"));
        } else {
            for t in backlog {
                println!(
                    "⚠️  Overdue: {} ({}) | due {}",
                    t.title,
                    t.tag_no,
                    Colour::Red.paint(t.due_date.as_str())
                );
            }
        }
        println!();

        header("6. Open Issues (New)");
        print_tasks(
            &dashboard::recent_tasks(&store, now),
            "🆕",
            "No new issues this week.",
        );
    }
    Ok(())
}

fn print_tasks(tasks: &[&Task], icon: &str, empty_msg: &str) {
    if tasks.is_empty() {
        println!("{empty_msg}");
    } else {
        for t in tasks {
            println!("{icon} {} ({})", t.title, t.tag_no);
        }
    }
}
