#![forbid(unsafe_code)]
//! Roulement — calcul de plannings d'équipe en rotation travail/repos.
//!
//! - Une machine à états par employé (bloc du cycle, jour, turn, repos).
//! - Avance synchronisée de toute l'équipe, contrôle d'effectif quotidien.
//! - Exports CSV/JSON et grilles mensuelles en dehors du cœur de calcul.
//! - Dates calendaires sans fuseau horaire.

pub mod calendar;
pub mod config;
pub mod io;
pub mod locale;
pub mod model;
pub mod scheduler;
pub mod storage;
pub mod summary;

pub use calendar::{month_calendars, month_range, CalendarCell, CellKind, MonthCalendar};
pub use config::{export_team_json, load_team_from_file, EmployeeConfig, TeamConfig};
pub use locale::Locale;
pub use model::{
    EmployeeDay, IndividualRecord, RosterDay, RotationBlock, RotationCycle, RotationPosition,
    Schedule, Shift, Status,
};
pub use scheduler::{generate, RotationState, SchedError, ScheduleCoordinator};
pub use storage::{JsonStorage, Storage};
pub use summary::{preview, DayRenderer, TextSummary};
