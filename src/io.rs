use crate::calendar::MonthCalendar;
use crate::config::EmployeeConfig;
use crate::model::{Schedule, Shift};
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::{Path, PathBuf};

/// Import d'une équipe depuis CSV: header `name,cycle_index,day_in_cycle,shift[,resting]`
pub fn import_team_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<EmployeeConfig>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        if name.is_empty() {
            bail!("invalid team row (empty name)");
        }
        let cycle_index: usize = rec
            .get(1)
            .context("missing cycle_index")?
            .trim()
            .parse()
            .with_context(|| format!("invalid cycle_index for {name}"))?;
        let day_in_cycle: u32 = rec
            .get(2)
            .context("missing day_in_cycle")?
            .trim()
            .parse()
            .with_context(|| format!("invalid day_in_cycle for {name}"))?;
        let shift = parse_shift(rec.get(3).context("missing shift")?.trim())
            .with_context(|| format!("invalid shift for {name}"))?;
        let mut employee = EmployeeConfig::new(name, cycle_index, day_in_cycle, shift);
        if let Some(flag) = rec.get(4) {
            let flag = flag.trim();
            if !flag.is_empty() {
                employee.resting = Some(
                    parse_bool(flag).with_context(|| format!("invalid resting value for {name}"))?,
                );
            }
        }
        out.push(employee);
    }
    Ok(out)
}

fn parse_bool(s: &str) -> anyhow::Result<bool> {
    match s.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" | "si" | "sí" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        _ => bail!("expected boolean"),
    }
}

fn parse_shift(s: &str) -> anyhow::Result<Shift> {
    match s.to_lowercase().as_str() {
        "morning" | "m" | "mañana" | "manana" => Ok(Shift::Morning),
        "afternoon" | "a" | "t" | "tarde" => Ok(Shift::Afternoon),
        _ => bail!("expected morning/afternoon, got {s:?}"),
    }
}

/// Export JSON du planning (jolie mise en forme)
pub fn export_schedule_json<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(schedule)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV du planning général: header `Date,Weekday` puis
/// `{nom}_Status,{nom}_Shift,{nom}_Cycle` par employé.
pub fn export_general_csv<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let locale = schedule.locale;
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;

    let mut header = vec!["Date".to_string(), "Weekday".to_string()];
    for name in &schedule.employees {
        header.push(format!("{name}_Status"));
        header.push(format!("{name}_Shift"));
        header.push(format!("{name}_Cycle"));
    }
    w.write_record(&header)?;

    for day in &schedule.general {
        let mut row = vec![day.date.format("%Y-%m-%d").to_string(), day.weekday.clone()];
        for name in &schedule.employees {
            let entry = day
                .get(name)
                .with_context(|| format!("{name} missing on {}", day.date))?;
            row.push(locale.status_label(entry.status).to_string());
            row.push(entry.shift.map_or("-", |s| locale.shift_label(s)).to_string());
            row.push(entry.cycle_label.clone());
        }
        w.write_record(&row)?;
    }
    w.flush()?;
    Ok(())
}

/// Export CSV du planning d'un employé: header
/// `date,weekday,status,shift,cycle,day_in_cycle`
pub fn export_individual_csv<P: AsRef<Path>>(
    path: P,
    schedule: &Schedule,
    name: &str,
) -> anyhow::Result<()> {
    let locale = schedule.locale;
    let records = schedule
        .individual_for(name)
        .with_context(|| format!("unknown employee: {name}"))?;

    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["date", "weekday", "status", "shift", "cycle", "day_in_cycle"])?;
    for r in records {
        let date = r.date.format("%Y-%m-%d").to_string();
        let day = r.day_in_cycle.to_string();
        w.write_record([
            date.as_str(),
            r.weekday.as_str(),
            locale.status_label(r.status),
            r.shift.map_or("-", |s| locale.shift_label(s)),
            r.cycle_label.as_str(),
            day.as_str(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Écrit `general_schedule.csv` et un `{nom}_schedule.csv` par employé.
pub fn export_schedule_csv<P: AsRef<Path>>(dir: P, schedule: &Schedule) -> anyhow::Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).with_context(|| format!("creating output directory {}", dir.display()))?;

    let mut written = Vec::with_capacity(schedule.employees.len() + 1);
    let general = dir.join("general_schedule.csv");
    export_general_csv(&general, schedule)?;
    written.push(general);

    for name in &schedule.employees {
        let path = dir.join(format!("{}_schedule.csv", name.to_lowercase()));
        export_individual_csv(&path, schedule, name)?;
        written.push(path);
    }
    Ok(written)
}

/// Export CSV d'une grille mensuelle: une ligne d'en-têtes puis une ligne par
/// semaine ; chaque case contient le jour puis une ligne par employé.
pub fn export_calendar_csv<P: AsRef<Path>>(path: P, calendar: &MonthCalendar) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    w.write_record([calendar.title.as_str()])?;
    w.write_record(calendar.header)?;
    for week in &calendar.weeks {
        let row: Vec<String> = week
            .iter()
            .map(|cell| match cell {
                Some(cell) => {
                    let mut text = cell.day.to_string();
                    for line in &cell.lines {
                        text.push('\n');
                        text.push_str(line);
                    }
                    text
                }
                None => String::new(),
            })
            .collect();
        w.write_record(&row)?;
    }
    w.flush()?;
    Ok(())
}
