use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::duration::format_work_hours;
use crate::core::logic::{Core, MonthReport};
use crate::core::request::MonthRequest;
use crate::errors::AppResult;
use crate::source::open_source;
use crate::ui::messages::{dim_missing, header, info, warning};
use crate::utils::colors::colorize_marker;
use crate::utils::date::{format_date, format_date_weekday};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_time;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { month } = &cli.command {
        // validate before touching the log
        let request = MonthRequest::from_args(month.year.as_deref(), month.month.as_deref())?;
        let source = open_source(cfg, cli.source_file.as_deref())?;

        info(format!(
            "Fetching logs for {} from {}…",
            request.label(),
            source.name()
        ));

        let report = Core::build_month_report(source.as_ref(), request)?;

        if report.is_empty() {
            warning("No startup/shutdown events found for the specified month.");
            return Ok(());
        }

        header(format!("Daily Summary {}", request.label()));
        print!("{}", render_report(&report, cfg.show_weekday));
        println!();
        info(format!(
            "Found {} days with events for {} ({} with activity)",
            report.days.len(),
            request.label(),
            report.active_days()
        ));
    }
    Ok(())
}

/// Date | First Startup | Last Shutdown | Work Hours (lunch-adjusted)
pub fn render_report(report: &MonthReport, show_weekday: bool) -> String {
    let mut table = Table::new(vec![
        Column::new("Date", 10),
        Column::new("First Startup", 8),
        Column::new("Last Shutdown", 8),
        Column::new("Work Hours", 8),
    ]);

    for day in &report.days {
        let date = if show_weekday {
            format_date_weekday(&day.date)
        } else {
            format_date(&day.date)
        };

        table.add_row(vec![
            date,
            format_time(day.first_startup),
            format_time(day.last_shutdown),
            format_work_hours(day.work_duration),
        ]);
    }

    table.render_with(|col, cell| match col {
        1 => colorize_marker(cell, true),
        2 => colorize_marker(cell, false),
        3 => dim_missing(cell),
        _ => cell.to_string(),
    })
}
