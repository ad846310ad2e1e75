use crate::locale::Locale;
use crate::scheduler::SchedError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Turn de travail. Ne change qu'à l'entrée d'un nouveau bloc du cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    #[serde(alias = "mañana", alias = "manana")]
    Morning,
    #[serde(alias = "tarde")]
    Afternoon,
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Shift::Morning => "morning",
            Shift::Afternoon => "afternoon",
        })
    }
}

/// Statut d'un employé pour une journée donnée.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Working,
    Resting,
}

/// Bloc `(jours travaillés, jours de repos)` du cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationBlock {
    pub work_days: u32,
    pub rest_days: u32,
}

impl RotationBlock {
    pub const fn new(work_days: u32, rest_days: u32) -> Self {
        Self {
            work_days,
            rest_days,
        }
    }

    pub const fn total(&self) -> u32 {
        self.work_days + self.rest_days
    }

    /// Libellé court, ex. `4-2`.
    pub fn label(&self) -> String {
        format!("{}-{}", self.work_days, self.rest_days)
    }
}

/// Cycle de rotation partagé par toute l'équipe : liste ordonnée de blocs et
/// table des turns (un turn désigné par position de bloc). Immuable une fois
/// construit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCycle", into = "RawCycle")]
pub struct RotationCycle {
    blocks: Vec<RotationBlock>,
    shifts: Vec<Shift>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawCycle {
    blocks: Vec<RotationBlock>,
    shifts: Vec<Shift>,
}

impl TryFrom<RawCycle> for RotationCycle {
    type Error = SchedError;

    fn try_from(raw: RawCycle) -> Result<Self, Self::Error> {
        Self::new(raw.blocks, raw.shifts)
    }
}

impl From<RotationCycle> for RawCycle {
    fn from(cycle: RotationCycle) -> Self {
        Self {
            blocks: cycle.blocks,
            shifts: cycle.shifts,
        }
    }
}

impl RotationCycle {
    /// Crée un cycle en validant blocs et table des turns.
    pub fn new(blocks: Vec<RotationBlock>, shifts: Vec<Shift>) -> Result<Self, SchedError> {
        if blocks.is_empty() {
            return Err(SchedError::Configuration(
                "rotation cycle must contain at least one block".into(),
            ));
        }
        for (idx, block) in blocks.iter().enumerate() {
            if block.work_days == 0 || block.rest_days == 0 {
                return Err(SchedError::Configuration(format!(
                    "block {idx} ({}) must have positive work and rest days",
                    block.label()
                )));
            }
        }
        // day_in_cycle doit pouvoir dépasser le total d'une unité
        let period = blocks
            .iter()
            .try_fold(0u32, |acc, b| {
                b.work_days.checked_add(b.rest_days).and_then(|t| acc.checked_add(t))
            })
            .filter(|p| *p < u32::MAX);
        if period.is_none() {
            return Err(SchedError::Configuration(
                "rotation cycle period overflows".into(),
            ));
        }
        if shifts.len() != blocks.len() {
            return Err(SchedError::Configuration(format!(
                "shift table has {} entries for {} blocks",
                shifts.len(),
                blocks.len()
            )));
        }
        Ok(Self { blocks, shifts })
    }

    /// Cycle de l'équipe de référence : 3-2 tarde, 3-2 matin, 4-1 tarde, 4-2 matin.
    pub fn reference() -> Self {
        Self {
            blocks: vec![
                RotationBlock::new(3, 2),
                RotationBlock::new(3, 2),
                RotationBlock::new(4, 1),
                RotationBlock::new(4, 2),
            ],
            shifts: vec![
                Shift::Afternoon,
                Shift::Morning,
                Shift::Afternoon,
                Shift::Morning,
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn blocks(&self) -> &[RotationBlock] {
        &self.blocks
    }

    pub fn block(&self, index: usize) -> Option<RotationBlock> {
        self.blocks.get(index).copied()
    }

    /// Turn attribué à l'entrée du bloc `index` (modulo la longueur).
    pub fn shift_for(&self, index: usize) -> Shift {
        self.shifts[index % self.shifts.len()]
    }

    /// Index du bloc suivant, avec bouclage.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.blocks.len()
    }

    /// Nombre de jours d'un parcours complet du cycle.
    pub fn period(&self) -> u32 {
        self.blocks.iter().map(RotationBlock::total).sum()
    }
}

/// Position d'un employé dans le cycle à une date donnée.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationPosition {
    pub cycle_index: usize,
    pub day_in_cycle: u32,
    pub shift: Shift,
    pub resting: bool,
}

/// Situation d'un employé pour une journée du planning général.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDay {
    pub name: String,
    pub status: Status,
    pub shift: Option<Shift>,
    pub cycle_label: String,
    pub day_in_cycle: u32,
    pub cycle_index: usize,
}

/// Une journée du planning général (membres dans l'ordre de l'équipe).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterDay {
    pub date: NaiveDate,
    pub weekday: String,
    pub entries: Vec<EmployeeDay>,
}

impl RosterDay {
    pub fn working_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.status == Status::Working)
            .count()
    }

    pub fn get(&self, name: &str) -> Option<&EmployeeDay> {
        self.entries.iter().find(|e| e.name == name)
    }
}

/// Ligne du planning individuel d'un employé.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualRecord {
    pub date: NaiveDate,
    pub weekday: String,
    pub status: Status,
    pub shift: Option<Shift>,
    pub cycle_label: String,
    pub day_in_cycle: u32,
}

/// Résultat complet d'une génération : planning général + plannings individuels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub start_date: NaiveDate,
    pub locale: Locale,
    /// Noms dans l'ordre de l'équipe.
    pub employees: Vec<String>,
    pub general: Vec<RosterDay>,
    pub individual: BTreeMap<String, Vec<IndividualRecord>>,
}

impl Schedule {
    pub fn len(&self) -> usize {
        self.general.len()
    }

    pub fn is_empty(&self) -> bool {
        self.general.is_empty()
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.general.last().map(|d| d.date)
    }

    pub fn individual_for(&self, name: &str) -> Option<&[IndividualRecord]> {
        self.individual.get(name).map(Vec::as_slice)
    }
}
