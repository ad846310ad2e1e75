//! Regroupement du planning général en grilles mensuelles (lundi en premier),
//! consommées par les exports calendrier.

use crate::locale::Locale;
use crate::model::{EmployeeDay, Schedule, Shift, Status};
use crate::scheduler::SchedError;
use chrono::{Datelike, NaiveDate};

/// Années acceptées lors d'une sélection par mois.
pub const YEAR_MIN: i32 = 2020;
pub const YEAR_MAX: i32 = 2030;

/// Catégorie d'une ligne de case, pour le code couleur des rendus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Morning,
    Afternoon,
    Rest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarCell {
    pub day: u32,
    /// Vide si la date n'a pas été générée.
    pub lines: Vec<String>,
    pub kinds: Vec<CellKind>,
}

#[derive(Debug, Clone)]
pub struct MonthCalendar {
    pub year: i32,
    pub month: u32,
    pub title: String,
    pub header: [&'static str; 7],
    /// Semaines de 7 cases ; `None` hors du mois.
    pub weeks: Vec<Vec<Option<CalendarCell>>>,
}

/// Premier jour et nombre de jours du mois demandé.
pub fn month_range(year: i32, month: u32) -> Result<(NaiveDate, u32), SchedError> {
    if !(1..=12).contains(&month) {
        return Err(SchedError::InvalidArgument(format!(
            "month must be between 1 and 12, got {month}"
        )));
    }
    if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
        return Err(SchedError::InvalidArgument(format!(
            "year must be between {YEAR_MIN} and {YEAR_MAX}, got {year}"
        )));
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| SchedError::InvalidArgument(format!("invalid month {year}-{month}")))?;
    Ok((first, days_in_month(first)))
}

fn days_in_month(first: NaiveDate) -> u32 {
    let (y, m) = next_month(first.year(), first.month());
    NaiveDate::from_ymd_opt(y, m, 1)
        .map(|next| next.signed_duration_since(first).num_days() as u32)
        .unwrap_or(31)
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Grilles mensuelles couvrant tout le planning. Avec `employee`, seules les
/// lignes de cet employé sont conservées (calendrier individuel).
pub fn month_calendars(
    schedule: &Schedule,
    employee: Option<&str>,
) -> Result<Vec<MonthCalendar>, SchedError> {
    if let Some(name) = employee {
        if !schedule.employees.iter().any(|e| e == name) {
            return Err(SchedError::InvalidArgument(format!("unknown employee: {name}")));
        }
    }
    let Some(end) = schedule.end_date() else {
        return Ok(Vec::new());
    };

    let locale = schedule.locale;
    let mut out = Vec::new();
    let (mut year, mut month) = (schedule.start_date.year(), schedule.start_date.month());

    while (year, month) <= (end.year(), end.month()) {
        let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
            break;
        };
        let lead = first.weekday().num_days_from_monday() as usize;
        let mut cells: Vec<Option<CalendarCell>> = vec![None; lead];

        for day in 1..=days_in_month(first) {
            let date = first.with_day(day).unwrap_or(first);
            let offset = date.signed_duration_since(schedule.start_date).num_days();
            let roster = usize::try_from(offset)
                .ok()
                .and_then(|i| schedule.general.get(i));

            let mut cell = CalendarCell {
                day,
                lines: Vec::new(),
                kinds: Vec::new(),
            };
            if let Some(roster) = roster {
                for entry in roster
                    .entries
                    .iter()
                    .filter(|e| employee.map_or(true, |n| e.name == n))
                {
                    let (line, kind) = describe(entry, locale);
                    cell.lines.push(line);
                    cell.kinds.push(kind);
                }
            }
            cells.push(Some(cell));
        }
        while cells.len() % 7 != 0 {
            cells.push(None);
        }

        out.push(MonthCalendar {
            year,
            month,
            title: format!("{} {year}", locale.month_name(month).unwrap_or("?")),
            header: locale.short_weekdays(),
            weeks: cells.chunks(7).map(<[_]>::to_vec).collect(),
        });

        (year, month) = next_month(year, month);
    }

    Ok(out)
}

fn describe(entry: &EmployeeDay, locale: Locale) -> (String, CellKind) {
    match (entry.status, entry.shift) {
        (Status::Working, Some(shift)) => (
            format!("{}: {}", entry.name, locale.shift_label(shift)),
            match shift {
                Shift::Morning => CellKind::Morning,
                Shift::Afternoon => CellKind::Afternoon,
            },
        ),
        _ => (
            format!("{}: {}", entry.name, locale.rest_short()),
            CellKind::Rest,
        ),
    }
}
