use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};
use std::path::Path;
use std::process::Command;

/// `$EDITOR`, then `$VISUAL`, then the platform default.
fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn open_in(editor: &str, path: &Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    else {
        return Ok(());
    };

    if *print_config {
        info(format!("Configuration ({})", Config::config_file().display()));
        println!("{}", cfg.to_yaml()?);
    }

    if *edit_config {
        let path = Config::config_file();
        let fallback = default_editor();
        let chosen = editor.clone().unwrap_or_else(|| fallback.clone());

        if open_in(&chosen, &path) {
            success(format!("Configuration saved with '{}'.", chosen));
        } else if chosen != fallback {
            warning(format!("Editor '{}' failed, trying '{}'.", chosen, fallback));
            if open_in(&fallback, &path) {
                success(format!("Configuration saved with '{}'.", fallback));
            } else {
                error(format!("Could not open the configuration with '{}'.", fallback));
            }
        } else {
            error(format!("Could not open the configuration with '{}'.", chosen));
        }
    }

    Ok(())
}
