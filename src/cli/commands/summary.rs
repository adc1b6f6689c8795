use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::shift::{format_hours, format_minutes};
use crate::core::logic::{Core, MonthReport};
use crate::db::initialize::open_store;
use crate::errors::AppResult;
use crate::models::summary::{DailyChartPoint, MonthlySummary, WorkStats};
use crate::ui::messages::header;
use crate::utils::colors::{GREY, RESET, colorize_balance};
use crate::utils::date::{month_label, month_or_current};
use crate::utils::formatting::{bar, bold, percent};
use serde::Serialize;

const BAR_WIDTH: usize = 40;

#[derive(Serialize)]
struct SummaryJson<'a> {
    year: i32,
    month: u32,
    schedule: &'a str,
    summary: &'a MonthlySummary,
    stats: &'a WorkStats,
    chart: &'a [DailyChartPoint],
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { month, chart, json } = cmd {
        let store = open_store(cfg)?;
        let (year, m) = month_or_current(month.as_deref())?;
        let report = Core::build_month_report(store.records(), year, m, store.profile());

        if *json {
            let out = SummaryJson {
                year: report.year,
                month: report.month,
                schedule: report.profile.id,
                summary: &report.summary,
                stats: &report.stats,
                chart: &report.chart,
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
            return Ok(());
        }

        print_summary(&report);

        if *chart {
            println!();
            print_chart(&report.chart);
        }
    }

    Ok(())
}

fn print_summary(report: &MonthReport) {
    let s = &report.summary;
    let st = &report.stats;

    header(format!(
        "{} - {}",
        month_label(report.year, report.month),
        report.profile.display_name
    ));

    println!("{:<22}{}", "Worked:", format_hours(s.total_worked_minutes));
    println!(
        "{:<22}{} ({} business days)",
        "Expected:",
        format_hours(s.expected_minutes),
        s.business_days_in_month
    );
    println!("{:<22}{}", "Days recorded:", s.days_recorded);
    println!("{:<22}{}", "Completion:", percent(s.percent_complete));
    println!(
        "{:<22}{}",
        "Overtime:",
        colorize_balance(s.total_overtime_minutes, &format_minutes(s.total_overtime_minutes))
    );
    println!(
        "{:<22}{}",
        "Deficit:",
        colorize_balance(-s.total_deficit_minutes, &format_minutes(-s.total_deficit_minutes))
    );
    println!(
        "{:<22}{}",
        "Balance:",
        bold(&colorize_balance(
            s.net_balance_minutes,
            &format_minutes(s.net_balance_minutes)
        ))
    );

    println!();
    println!("{}", bold("Statistics"));
    println!("{:<22}{}", "Mean day:", format_hours(st.mean_minutes.round() as i64));
    println!("{:<22}{}", "Longest day:", format_hours(st.max_minutes));
    println!("{:<22}{}", "Shortest day:", format_hours(st.min_minutes));
    println!("{:<22}{}", "Days above target:", st.days_above_target);
    println!("{:<22}{}", "Days below target:", st.days_below_target);
    println!("{:<22}{:.1}", "Consistency:", st.consistency_score);
}

/// One line per calendar day; the scale is the longest day or the target.
fn print_chart(points: &[DailyChartPoint]) {
    let max = points
        .iter()
        .map(|p| p.worked_minutes.max(p.target_minutes))
        .max()
        .unwrap_or(0);

    for p in points {
        let label = format!("{:>2}", p.day);
        let label = if p.is_business_day {
            label
        } else {
            format!("{GREY}{label}{RESET}")
        };

        if !p.has_record {
            println!("{} │", label);
            continue;
        }

        let balance = p.overtime_minutes - p.deficit_minutes;
        println!(
            "{} │{} {} {}",
            label,
            colorize_balance(balance, &bar(p.worked_minutes, max, BAR_WIDTH)),
            format_hours(p.worked_minutes),
            colorize_balance(balance, &format_minutes(balance))
        );
    }
}
