use super::SchedError;
use crate::model::RosterDay;

/// Vérifie qu'exactement `required` employés travaillent ce jour-là.
pub fn check_staffing(day: &RosterDay, required: usize) -> Result<(), SchedError> {
    let working = day.working_count();
    if working != required {
        #[cfg(feature = "logging")]
        tracing::warn!(date = %day.date, working, required, "staffing invariant violated");

        return Err(SchedError::Inconsistent {
            date: day.date,
            working,
            required,
        });
    }
    Ok(())
}
