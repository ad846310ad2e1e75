use super::SchedError;
use chrono::NaiveDate;

pub(super) fn days_between(start: NaiveDate, current: NaiveDate) -> i64 {
    current.signed_duration_since(start).num_days()
}

pub(super) fn next_day(date: NaiveDate) -> Result<NaiveDate, SchedError> {
    date.succ_opt()
        .ok_or_else(|| SchedError::InvalidArgument(format!("date overflow after {date}")))
}
