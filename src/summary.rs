use crate::locale::Locale;
use crate::model::{RosterDay, Schedule, Status};

/// Permet de customiser le rendu d'une journée (console, message, etc.).
pub trait DayRenderer {
    fn render(&self, day: &RosterDay, locale: Locale) -> String;
}

/// Une ligne par jour : ceux qui travaillent d'abord, puis ceux au repos.
///
/// `2025-08-01 (Viernes): Ludy (Mañana) | Isaac (Tarde) | Genesis (Descanso)`
#[derive(Debug, Default, Clone, Copy)]
pub struct TextSummary;

impl DayRenderer for TextSummary {
    fn render(&self, day: &RosterDay, locale: Locale) -> String {
        let working = day.entries.iter().filter_map(|e| match (e.status, e.shift) {
            (Status::Working, Some(shift)) => {
                Some(format!("{} ({})", e.name, locale.shift_label(shift)))
            }
            _ => None,
        });
        let resting = day
            .entries
            .iter()
            .filter(|e| e.status == Status::Resting)
            .map(|e| format!("{} ({})", e.name, locale.status_label(Status::Resting)));

        let parts: Vec<String> = working.chain(resting).collect();
        format!(
            "{} ({}): {}",
            day.date.format("%Y-%m-%d"),
            day.weekday,
            parts.join(" | ")
        )
    }
}

/// Rend les `days` premières journées du planning.
pub fn preview(schedule: &Schedule, days: usize, renderer: &dyn DayRenderer) -> Vec<String> {
    schedule
        .general
        .iter()
        .take(days)
        .map(|day| renderer.render(day, schedule.locale))
        .collect()
}
