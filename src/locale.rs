use crate::model::{Shift, Status};
use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Langue des libellés produits (jours, mois, statuts, turns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    pub fn weekday_name(self, day: Weekday) -> &'static str {
        let idx = day.num_days_from_monday() as usize;
        match self {
            Locale::Es => [
                "Lunes",
                "Martes",
                "Miércoles",
                "Jueves",
                "Viernes",
                "Sábado",
                "Domingo",
            ][idx],
            Locale::En => [
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday",
            ][idx],
        }
    }

    /// En-têtes de colonnes du calendrier, lundi en premier.
    pub fn short_weekdays(self) -> [&'static str; 7] {
        match self {
            Locale::Es => ["Lun", "Mar", "Mié", "Jue", "Vie", "Sáb", "Dom"],
            Locale::En => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        }
    }

    /// `month` entre 1 et 12 ; `None` sinon.
    pub fn month_name(self, month: u32) -> Option<&'static str> {
        let names = match self {
            Locale::Es => [
                "Enero",
                "Febrero",
                "Marzo",
                "Abril",
                "Mayo",
                "Junio",
                "Julio",
                "Agosto",
                "Septiembre",
                "Octubre",
                "Noviembre",
                "Diciembre",
            ],
            Locale::En => [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ],
        };
        month
            .checked_sub(1)
            .and_then(|i| names.get(i as usize))
            .copied()
    }

    pub fn shift_label(self, shift: Shift) -> &'static str {
        match (self, shift) {
            (Locale::Es, Shift::Morning) => "Mañana",
            (Locale::Es, Shift::Afternoon) => "Tarde",
            (Locale::En, Shift::Morning) => "Morning",
            (Locale::En, Shift::Afternoon) => "Afternoon",
        }
    }

    pub fn status_label(self, status: Status) -> &'static str {
        match (self, status) {
            (Locale::Es, Status::Working) => "Trabajando",
            (Locale::Es, Status::Resting) => "Descanso",
            (Locale::En, Status::Working) => "Working",
            (Locale::En, Status::Resting) => "Resting",
        }
    }

    /// Forme abrégée du repos utilisée dans les cases du calendrier.
    pub fn rest_short(self) -> &'static str {
        match self {
            Locale::Es => "Desc",
            Locale::En => "Rest",
        }
    }
}
