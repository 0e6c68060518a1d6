use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db;
use crate::db::initialize::init_db;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    // A --db override wins over whatever the config file says.
    let mut cfg = Config::load();
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    let conn = db::open(&cfg.database)?;
    init_db(&conn)?;

    messages::success(format!("Database initialized at {}", cfg.database));
    Ok(())
}
