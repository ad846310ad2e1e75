use super::SchedError;
use crate::model::{RotationBlock, RotationCycle, RotationPosition, Shift, Status};
use std::sync::Arc;

/// Machine à états d'un employé : position dans le cycle, turn courant,
/// repos. N'avance que d'un jour à la fois, jamais en arrière.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationState {
    cycle: Arc<RotationCycle>,
    cycle_index: usize,
    day_in_cycle: u32,
    shift: Shift,
    resting: bool,
}

impl RotationState {
    /// Construit l'état à partir d'une position connue (date de référence).
    pub fn new(cycle: Arc<RotationCycle>, start: RotationPosition) -> Result<Self, SchedError> {
        let block = cycle.block(start.cycle_index).ok_or_else(|| {
            SchedError::Configuration(format!(
                "cycle index {} out of range (cycle has {} blocks)",
                start.cycle_index,
                cycle.len()
            ))
        })?;
        if start.day_in_cycle == 0 || start.day_in_cycle > block.total() {
            return Err(SchedError::Configuration(format!(
                "day {} outside block {} ({} days)",
                start.day_in_cycle,
                block.label(),
                block.total()
            )));
        }
        let derived = start.day_in_cycle > block.work_days;
        if derived != start.resting {
            return Err(SchedError::Configuration(format!(
                "resting flag {} contradicts day {} of block {}",
                start.resting,
                start.day_in_cycle,
                block.label()
            )));
        }
        Ok(Self {
            cycle,
            cycle_index: start.cycle_index,
            day_in_cycle: start.day_in_cycle,
            shift: start.shift,
            resting: start.resting,
        })
    }

    /// Avance d'un jour ; change de bloc (et de turn) une fois le bloc épuisé.
    pub fn advance_one_day(&mut self) {
        self.day_in_cycle += 1;
        if self.day_in_cycle > self.block().total() {
            self.cycle_index = self.cycle.next_index(self.cycle_index);
            self.day_in_cycle = 1;
            self.shift = self.cycle.shift_for(self.cycle_index);
        }
        self.resting = self.day_in_cycle > self.block().work_days;
    }

    /// `(Resting, None)` en repos, sinon `(Working, Some(turn))`.
    pub fn current_status(&self) -> (Status, Option<Shift>) {
        if self.resting {
            (Status::Resting, None)
        } else {
            (Status::Working, Some(self.shift))
        }
    }

    pub fn block(&self) -> RotationBlock {
        // index toujours valide : vérifié à la construction, bouclé ensuite
        self.cycle.blocks()[self.cycle_index]
    }

    pub fn cycle_label(&self) -> String {
        self.block().label()
    }

    pub fn cycle_index(&self) -> usize {
        self.cycle_index
    }

    pub fn day_in_cycle(&self) -> u32 {
        self.day_in_cycle
    }

    pub fn shift(&self) -> Shift {
        self.shift
    }

    pub fn is_resting(&self) -> bool {
        self.resting
    }

    pub fn cycle(&self) -> &RotationCycle {
        &self.cycle
    }

    pub fn position(&self) -> RotationPosition {
        RotationPosition {
            cycle_index: self.cycle_index,
            day_in_cycle: self.day_in_cycle,
            shift: self.shift,
            resting: self.resting,
        }
    }
}
