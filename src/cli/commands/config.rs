use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print, check } = cmd {
        if *print {
            println!("📄 Current configuration:\n");
            println!(
                "{}",
                serde_yaml::to_string(cfg).unwrap_or_else(|_| "<unprintable>".to_string())
            );
        }

        if *check {
            let findings = cfg.check();
            if findings.is_empty() {
                messages::success("Configuration OK");
            } else {
                for f in &findings {
                    messages::warning(f);
                }
            }
        }
    }
    Ok(())
}
