mod generation;
mod staffing;
mod state;
mod types;
mod util;

pub use state::RotationState;
pub use staffing::check_staffing;
pub use types::SchedError;

use crate::config::TeamConfig;
use crate::locale::Locale;
use crate::model::Schedule;
use chrono::NaiveDate;

/// Coordinateur : possède les états de rotation d'une équipe, ancrés sur une
/// date de référence commune, et les fait avancer ensemble jour après jour.
#[derive(Debug, Clone)]
pub struct ScheduleCoordinator {
    reference_date: NaiveDate,
    start_date: NaiveDate,
    /// Date que représentent actuellement les états.
    cursor: NaiveDate,
    required_working: usize,
    locale: Locale,
    employees: Vec<(String, RotationState)>,
}

impl ScheduleCoordinator {
    /// Construit les états à la date de référence puis les projette jusqu'à
    /// `start_date`. Les dates antérieures à la référence sont refusées.
    pub fn new(team: &TeamConfig, start_date: NaiveDate) -> Result<Self, SchedError> {
        team.validate()?;
        let mut employees = team.build_states()?;
        let steps = util::days_between(team.reference_date, start_date);
        if steps < 0 {
            return Err(SchedError::Configuration(format!(
                "start date {start_date} is before reference date {}",
                team.reference_date
            )));
        }
        for _ in 0..steps {
            for (_, state) in employees.iter_mut() {
                state.advance_one_day();
            }
        }

        #[cfg(feature = "logging")]
        tracing::debug!(
            reference = %team.reference_date,
            start = %start_date,
            steps,
            employees = employees.len(),
            "team projected to start date"
        );

        Ok(Self {
            reference_date: team.reference_date,
            start_date,
            cursor: start_date,
            required_working: team.required_working(),
            locale: team.locale,
            employees,
        })
    }

    /// Génère `num_days` journées consécutives à partir de la date courante
    /// (`start_date` au premier appel), en validant l'effectif chaque jour.
    pub fn generate(&mut self, num_days: u32) -> Result<Schedule, SchedError> {
        generation::generate(self, num_days)
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Prochaine date que `generate` produira.
    pub fn current_date(&self) -> NaiveDate {
        self.cursor
    }

    pub fn required_working(&self) -> usize {
        self.required_working
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn employee_names(&self) -> impl Iterator<Item = &str> {
        self.employees.iter().map(|(name, _)| name.as_str())
    }

    pub fn state(&self, name: &str) -> Option<&RotationState> {
        self.employees
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s)
    }
}

/// Raccourci : construit un coordinateur et génère une seule fois.
pub fn generate(
    team: &TeamConfig,
    start_date: NaiveDate,
    num_days: u32,
) -> Result<Schedule, SchedError> {
    ScheduleCoordinator::new(team, start_date)?.generate(num_days)
}
