use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::request::MonthRequest;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::source::open_source;
use crate::utils::path::expand_tilde;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        month,
        format,
        dir,
        force,
    } = &cli.command
    {
        let request = MonthRequest::from_args(month.year.as_deref(), month.month.as_deref())?;
        let source = open_source(cfg, cli.source_file.as_deref())?;

        let report = Core::build_month_report(source.as_ref(), request)?;

        let out_dir = expand_tilde(dir.as_deref().unwrap_or(&cfg.export_dir));
        ExportLogic::export(&report, *format, &out_dir, *force)?;
    }
    Ok(())
}
