use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::log;
use ansi_term::Colour;

/// Color keyed on the operation, same convention across all outputs.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "equipment_add" | "task_add" => Colour::Green,
        "task_status" => Colour::Yellow,
        "equipment_import" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let entries = log::read_all(&cfg.oplog_path())?;
        if entries.is_empty() {
            println!("Operation log is empty.");
            return Ok(());
        }
        for e in entries {
            let op_target = if e.target.is_empty() {
                e.operation.clone()
            } else {
                format!("{} ({})", e.operation, e.target)
            };
            println!(
                "{}  {}  {}",
                e.date,
                color_for_operation(&e.operation).paint(op_target),
                e.message
            );
        }
    }
    Ok(())
}
