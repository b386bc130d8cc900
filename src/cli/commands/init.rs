use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::cmlog_quiet;
use crate::db::migrate::applied_versions;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped with --test)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing CheckMate…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    let versions = applied_versions(&conn)?;
    println!(
        "✅ Database initialized at {} (schema {})",
        &db_path,
        versions.last().map(String::as_str).unwrap_or("none")
    );

    cmlog_quiet(
        &conn,
        "init",
        "database",
        &format!("Database initialized at {}", &db_path),
    );

    println!("🎉 CheckMate initialization completed!");
    Ok(())
}
