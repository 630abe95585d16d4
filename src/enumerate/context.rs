// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration context.
//!
//! The context is the mutable state a program works on: the partial decision
//! vector, the trail that undoes it, the statistics, and the outputs of the
//! run (first witness and any error raised by a predicate). The constraint
//! system itself is shared read-only.

use super::statistics::Statistics;
use super::trail::Trail;
use crate::assignment::Assignment;
use crate::constraint::SystemRef;
use crate::error::{ReductionError, Result};

#[derive(Debug)]
pub struct EnumerationContext<'a> {
    /// The system being enumerated.
    pub system: SystemRef<'a>,
    /// Current partial decision vector.
    pub values: Assignment,
    pub trail: Trail,
    pub statistics: Statistics,
    /// First satisfying vector seen, if any.
    pub witness: Option<Assignment>,
    /// Error raised by a predicate; the program suspends when one is set.
    pub error: Option<ReductionError>,
}

impl<'a> EnumerationContext<'a> {
    /// Context with every decision variable of `system` unassigned.
    pub fn new(system: impl Into<SystemRef<'a>>) -> Self {
        let system = system.into();
        let num_variables = system.num_variables();
        Self {
            system,
            values: Assignment::unassigned(num_variables),
            trail: Trail::with_capacity(num_variables),
            statistics: Statistics::new(),
            witness: None,
            error: None,
        }
    }

    /// Assign a decision variable, recording it on the trail.
    pub fn assign(&mut self, var: usize, value: bool) -> Result<()> {
        self.values.set(var, value)?;
        self.trail.record(var);
        Ok(())
    }

    /// Undo every assignment made after `checkpoint`.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        let values = &mut self.values;
        self.trail.rewind_to(checkpoint).for_each(|var| values.clear(var));
    }

    /// Number of decision variables.
    pub fn num_variables(&self) -> usize {
        self.values.len()
    }
}
