use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration ({}):\n", Config::config_file().display());
            println!("{}", cfg.to_yaml()?);
        }

        if *edit_config {
            let path = Config::config_file();
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "{} not found, run `rpclogger init` first",
                    path.display()
                )));
            }
            edit(&path, editor.as_deref())?;
        }
    }

    Ok(())
}

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

/// Open the requested editor, falling back to the platform default.
///
/// The fallback is only tried when an explicit editor was requested and
/// differs from it.
fn edit(path: &Path, requested: Option<&str>) -> AppResult<()> {
    let fallback = default_editor();
    let editor = requested.unwrap_or(fallback.as_str());

    if run_editor(editor, path) {
        success(format!("Configuration file edited using '{editor}'"));
        return Ok(());
    }

    if editor != fallback {
        warning(format!(
            "Editor '{editor}' not available, falling back to '{fallback}'"
        ));
        if run_editor(&fallback, path) {
            success(format!(
                "Configuration file edited using fallback '{fallback}'"
            ));
            return Ok(());
        }
    }

    Err(AppError::Config(format!(
        "failed to edit {} with '{fallback}'",
        path.display()
    )))
}

fn run_editor(editor: &str, path: &Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}
