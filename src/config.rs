use crate::locale::Locale;
use crate::model::{RotationCycle, RotationPosition, Shift};
use crate::scheduler::{RotationState, SchedError};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Date à laquelle les positions de l'équipe de référence sont connues.
pub const REFERENCE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2025, 8, 1) {
    Some(date) => date,
    None => panic!("invalid reference date"),
};

/// Position de départ d'un employé à la date de référence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeConfig {
    pub name: String,
    pub cycle_index: usize,
    pub day_in_cycle: u32,
    pub shift: Shift,
    /// Déduit de la position si absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resting: Option<bool>,
}

impl EmployeeConfig {
    pub fn new<N: Into<String>>(name: N, cycle_index: usize, day_in_cycle: u32, shift: Shift) -> Self {
        Self {
            name: name.into(),
            cycle_index,
            day_in_cycle,
            shift,
            resting: None,
        }
    }

    pub fn with_resting(mut self, resting: bool) -> Self {
        self.resting = Some(resting);
        self
    }

    /// Position complète, le repos étant déduit du cycle s'il n'est pas fourni.
    pub fn position(&self, cycle: &RotationCycle) -> Result<RotationPosition, SchedError> {
        let block = cycle.block(self.cycle_index).ok_or_else(|| {
            SchedError::Configuration(format!(
                "{}: cycle index {} out of range",
                self.name, self.cycle_index
            ))
        })?;
        Ok(RotationPosition {
            cycle_index: self.cycle_index,
            day_in_cycle: self.day_in_cycle,
            shift: self.shift,
            resting: self
                .resting
                .unwrap_or(self.day_in_cycle > block.work_days),
        })
    }
}

/// Configuration d'équipe : cycle commun, date de référence et table des
/// positions de départ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamConfig {
    #[serde(default)]
    pub name: Option<String>,
    pub reference_date: NaiveDate,
    pub cycle: RotationCycle,
    /// Par défaut : taille de l'équipe moins un.
    #[serde(default)]
    pub required_working: Option<usize>,
    #[serde(default)]
    pub locale: Locale,
    pub employees: Vec<EmployeeConfig>,
}

impl TeamConfig {
    /// Équipe de référence, positions connues au 1er août 2025.
    pub fn reference() -> Self {
        Self {
            name: Some("reference".into()),
            reference_date: REFERENCE_DATE,
            cycle: RotationCycle::reference(),
            required_working: Some(2),
            locale: Locale::Es,
            employees: vec![
                // dernier jour travaillé du 4-2
                EmployeeConfig::new("Ludy", 3, 4, Shift::Morning).with_resting(false),
                // deuxième jour du 4-1
                EmployeeConfig::new("Isaac", 2, 2, Shift::Afternoon).with_resting(false),
                // dernier jour de repos du 3-2, reprend le lendemain
                EmployeeConfig::new("Genesis", 0, 5, Shift::Afternoon).with_resting(true),
            ],
        }
    }

    pub fn required_working(&self) -> usize {
        self.required_working
            .unwrap_or_else(|| self.employees.len().saturating_sub(1))
    }

    pub fn validate(&self) -> Result<(), SchedError> {
        if self.employees.is_empty() {
            return Err(SchedError::Configuration(
                "team must contain at least one employee".into(),
            ));
        }
        let mut seen = HashSet::new();
        for employee in &self.employees {
            let name = employee.name.trim();
            if name.is_empty() {
                return Err(SchedError::Configuration("employee name cannot be empty".into()));
            }
            // le nom sert de nom de fichier pour les exports
            if name.contains(['/', '\\', '\0']) || name == "." || name == ".." {
                return Err(SchedError::Configuration(format!(
                    "employee name cannot be used as a file name: {name:?}"
                )));
            }
            if !seen.insert(name.to_lowercase()) {
                return Err(SchedError::Configuration(format!(
                    "duplicate employee name: {name}"
                )));
            }
        }
        let required = self.required_working();
        if required > self.employees.len() {
            return Err(SchedError::Configuration(format!(
                "required_working ({required}) exceeds team size ({})",
                self.employees.len()
            )));
        }
        self.build_states().map(|_| ())
    }

    /// États de rotation à la date de référence, dans l'ordre de l'équipe.
    pub(crate) fn build_states(&self) -> Result<Vec<(String, RotationState)>, SchedError> {
        let cycle = Arc::new(self.cycle.clone());
        self.employees
            .iter()
            .map(|e| {
                let position = e.position(&cycle)?;
                let state =
                    RotationState::new(Arc::clone(&cycle), position).map_err(|err| match err {
                        SchedError::Configuration(msg) => {
                            SchedError::Configuration(format!("{}: {msg}", e.name))
                        }
                        other => other,
                    })?;
                Ok((e.name.clone(), state))
            })
            .collect()
    }
}

pub fn export_team_json<P: AsRef<Path>>(path: P, team: &TeamConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(team)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_team_from_file<P: AsRef<Path>>(path: P) -> Result<TeamConfig> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading team {}", path.display()))?;
    let team: TeamConfig = serde_json::from_slice(&data)
        .with_context(|| format!("parsing team {}", path.display()))?;
    team.validate()?;
    Ok(team)
}
