use chrono::NaiveDate;
use thiserror::Error;

/// Erreurs du calcul de roulement. Jamais rattrapées par la lib : c'est
/// l'appelant qui décide de la présentation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedError {
    /// Cycle, équipe ou date de départ invalides.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// Argument d'appel refusé avant tout calcul.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Effectif au travail incorrect : les positions de départ sont
    /// incompatibles avec le cycle.
    #[error("inconsistent schedule on {date}: {working} employee(s) working, expected {required}")]
    Inconsistent {
        date: NaiveDate,
        working: usize,
        required: usize,
    },
}

impl SchedError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, SchedError::Configuration(_))
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, SchedError::InvalidArgument(_))
    }

    pub fn is_inconsistent(&self) -> bool {
        matches!(self, SchedError::Inconsistent { .. })
    }
}
