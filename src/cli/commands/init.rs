use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::RecordStore;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the data directory with the two seed CSV tables
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.data_dir.clone(), cli.test)?;

    // Seeds both tables if their CSV files are missing; a second run finds
    // the files and leaves them alone.
    let store = RecordStore::open(&cfg)?;
    store.log("init", &cfg.data_dir, "data directory initialized")?;

    println!("⚙️  Initializing commtrack…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗂️  Data dir    : {}", &cfg.data_dir);
    println!(
        "   Equipment: {} records | Tasks: {} records",
        store.equipment.len(),
        store.tasks.len()
    );
    Ok(())
}
