use super::{staffing, util, SchedError, ScheduleCoordinator};
use crate::model::{EmployeeDay, IndividualRecord, RosterDay, Schedule};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Plafond de pré-allocation : `num_days` vient de l'appelant.
const CAPACITY_HINT: u32 = 366;

pub(super) fn generate(
    coordinator: &mut ScheduleCoordinator,
    num_days: u32,
) -> Result<Schedule, SchedError> {
    if num_days == 0 {
        return Err(SchedError::InvalidArgument(
            "number of days must be positive".into(),
        ));
    }

    let start = coordinator.cursor;
    let capacity = num_days.min(CAPACITY_HINT) as usize;
    let mut general = Vec::with_capacity(capacity);
    let mut individual: BTreeMap<String, Vec<IndividualRecord>> = coordinator
        .employees
        .iter()
        .map(|(name, _)| (name.clone(), Vec::with_capacity(capacity)))
        .collect();

    for _ in 0..num_days {
        let day = snapshot(coordinator, coordinator.cursor);
        staffing::check_staffing(&day, coordinator.required_working)?;

        for entry in &day.entries {
            if let Some(records) = individual.get_mut(&entry.name) {
                records.push(IndividualRecord {
                    date: day.date,
                    weekday: day.weekday.clone(),
                    status: entry.status,
                    shift: entry.shift,
                    cycle_label: entry.cycle_label.clone(),
                    day_in_cycle: entry.day_in_cycle,
                });
            }
        }
        general.push(day);

        // tous ensemble, sinon le planning se désynchronise des dates
        let next = util::next_day(coordinator.cursor)?;
        for (_, state) in coordinator.employees.iter_mut() {
            state.advance_one_day();
        }
        coordinator.cursor = next;
    }

    #[cfg(feature = "logging")]
    tracing::debug!(start = %start, days = num_days, "schedule generated");

    Ok(Schedule {
        start_date: start,
        locale: coordinator.locale,
        employees: coordinator
            .employees
            .iter()
            .map(|(name, _)| name.clone())
            .collect(),
        general,
        individual,
    })
}

fn snapshot(coordinator: &ScheduleCoordinator, date: NaiveDate) -> RosterDay {
    let entries = coordinator
        .employees
        .iter()
        .map(|(name, state)| {
            let (status, shift) = state.current_status();
            EmployeeDay {
                name: name.clone(),
                status,
                shift,
                cycle_label: state.cycle_label(),
                day_in_cycle: state.day_in_cycle(),
                cycle_index: state.cycle_index(),
            }
        })
        .collect();

    RosterDay {
        date,
        weekday: coordinator.locale.weekday_name(date.weekday()).to_string(),
        entries,
    }
}
