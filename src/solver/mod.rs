// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Results reported by an external SAT engine.
//!
//! Solving itself happens outside this crate: a driver writes the formula with
//! [`CnfInstance::to_dimacs`](crate::cnf::CnfInstance::to_dimacs), runs an
//! engine under its own timeout, and hands the engine's standard output and
//! exit code to [`SolverOutcome::parse`]. Engines that time out, crash or give
//! up produce [`SolverOutcome::Unsolved`], which is not an error of this
//! crate. A reported model is never trusted: [`SolverOutcome::checked`] runs
//! it through the verifier.
//!
//! Output follows the SAT competition conventions: an `s SATISFIABLE`,
//! `s UNSATISFIABLE` or `s UNKNOWN` status line, and `v` lines listing signed
//! literals terminated by `0`. Without a status line the MiniSat exit codes
//! decide: 10 is satisfiable, 20 unsatisfiable.
//!
//! # Example
//!
//! ```
//! use np_reduce::solver::SolverOutcome;
//!
//! let outcome = SolverOutcome::parse("s SATISFIABLE\nv 1 -2 0\n", Some(10), 2).unwrap();
//! let model = outcome.assignment().unwrap();
//! assert_eq!(model.get(0), Ok(true));
//! assert_eq!(model.get(1), Ok(false));
//! ```

use crate::assignment::Assignment;
use crate::constraint::SystemRef;
use crate::error::{ReductionError, Result};
use crate::verify::verify;
use std::fmt;
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;
use tracing::{debug, warn};

/// MiniSat exit code for a satisfiable formula.
pub const EXIT_SATISFIABLE: i32 = 10;
/// MiniSat exit code for an unsatisfiable formula.
pub const EXIT_UNSATISFIABLE: i32 = 20;

/// Why an engine run produced no answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnsolvedReason {
    /// The driver abandoned the run after `seconds`.
    Timeout { seconds: u64 },
    /// The engine reported `s UNKNOWN`.
    Unknown,
    /// The engine exited with a code that means neither SAT nor UNSAT, or
    /// with no status at all.
    EngineError { exit_code: Option<i32> },
    /// The engine claimed SAT but printed no model.
    MissingModel,
}

impl fmt::Display for UnsolvedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnsolvedReason::Timeout { seconds } => write!(f, "timed out after {}s", seconds),
            UnsolvedReason::Unknown => write!(f, "engine reported unknown"),
            UnsolvedReason::EngineError {
                exit_code: Some(code),
            } => write!(f, "engine exited with code {}", code),
            UnsolvedReason::EngineError { exit_code: None } => {
                write!(f, "engine produced no status")
            }
            UnsolvedReason::MissingModel => write!(f, "engine claimed SAT without a model"),
        }
    }
}

/// Answer of one engine run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverOutcome {
    Satisfiable(Assignment),
    Unsatisfiable,
    Unsolved { reason: UnsolvedReason },
}

/// Coarse status of an outcome, as tallied by benchmark drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCountMacro)]
pub enum SolverStatus {
    Sat = 0,
    Unsat,
    Timeout,
    Error,
    Unknown,
}

impl fmt::Display for SolverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SolverStatus::Sat => "SAT",
            SolverStatus::Unsat => "UNSAT",
            SolverStatus::Timeout => "TIMEOUT",
            SolverStatus::Error => "ERROR",
            SolverStatus::Unknown => "UNKNOWN",
        };
        f.write_str(label)
    }
}

impl SolverOutcome {
    /// Interpret an engine's standard output and exit code. `num_vars` is the
    /// variable count of the formula that was solved.
    ///
    /// Fails only when a model line cannot be read: a token that is not an
    /// integer is `MalformedInstance`, a literal beyond `num_vars` is
    /// `OutOfRange`.
    pub fn parse(stdout: &str, exit_code: Option<i32>, num_vars: usize) -> Result<Self> {
        let status = stdout.lines().map(str::trim).find_map(|line| match line {
            "s SATISFIABLE" => Some(SolverStatus::Sat),
            "s UNSATISFIABLE" => Some(SolverStatus::Unsat),
            "s UNKNOWN" => Some(SolverStatus::Unknown),
            _ => None,
        });
        let status = status.unwrap_or(match exit_code {
            Some(EXIT_SATISFIABLE) => SolverStatus::Sat,
            Some(EXIT_UNSATISFIABLE) => SolverStatus::Unsat,
            _ => SolverStatus::Error,
        });

        let outcome = match status {
            SolverStatus::Sat => match model_literals(stdout)? {
                Some(literals) => {
                    SolverOutcome::Satisfiable(Assignment::from_dimacs_model(num_vars, &literals)?)
                }
                None => SolverOutcome::Unsolved {
                    reason: UnsolvedReason::MissingModel,
                },
            },
            SolverStatus::Unsat => SolverOutcome::Unsatisfiable,
            SolverStatus::Unknown => SolverOutcome::Unsolved {
                reason: UnsolvedReason::Unknown,
            },
            SolverStatus::Timeout | SolverStatus::Error => SolverOutcome::Unsolved {
                reason: UnsolvedReason::EngineError { exit_code },
            },
        };
        debug!(status = %outcome.status(), ?exit_code, "parsed engine output");
        Ok(outcome)
    }

    /// A run the driver abandoned after `seconds`.
    pub fn timed_out(seconds: u64) -> Self {
        SolverOutcome::Unsolved {
            reason: UnsolvedReason::Timeout { seconds },
        }
    }

    pub fn status(&self) -> SolverStatus {
        match self {
            SolverOutcome::Satisfiable(_) => SolverStatus::Sat,
            SolverOutcome::Unsatisfiable => SolverStatus::Unsat,
            SolverOutcome::Unsolved {
                reason: UnsolvedReason::Timeout { .. },
            } => SolverStatus::Timeout,
            SolverOutcome::Unsolved {
                reason: UnsolvedReason::Unknown,
            } => SolverStatus::Unknown,
            SolverOutcome::Unsolved { .. } => SolverStatus::Error,
        }
    }

    /// The reported model, if any.
    pub fn assignment(&self) -> Option<&Assignment> {
        match self {
            SolverOutcome::Satisfiable(model) => Some(model),
            _ => None,
        }
    }

    pub fn is_unsolved(&self) -> bool {
        matches!(self, SolverOutcome::Unsolved { .. })
    }

    /// Check a reported model against the system that was solved.
    ///
    /// A model that fails verification is `MalformedInstance`; a model with
    /// gaps is `MissingAssignment`. Other outcomes pass through unchanged,
    /// since an UNSAT claim cannot be checked without solving.
    pub fn checked<'a>(self, system: impl Into<SystemRef<'a>>) -> Result<Self> {
        if let SolverOutcome::Satisfiable(model) = &self {
            if !verify(system, model)? {
                warn!(model = %model, "engine model does not satisfy the formula");
                return Err(ReductionError::malformed(
                    "engine model does not satisfy the constraint system",
                ));
            }
        }
        Ok(self)
    }
}

/// Tally of outcome statuses over a batch of runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomeTally {
    counts: [u64; SolverStatus::COUNT],
}

impl OutcomeTally {
    pub fn record(&mut self, outcome: &SolverOutcome) {
        self.counts[outcome.status() as usize] += 1;
    }

    pub fn get(&self, status: SolverStatus) -> u64 {
        self.counts[status as usize]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

/// Signed literals from all `v` lines, or `None` if there are none.
fn model_literals(stdout: &str) -> Result<Option<Vec<i64>>> {
    let mut literals = Vec::new();
    let mut seen = false;
    for line in stdout.lines().map(str::trim) {
        let Some(rest) = line.strip_prefix('v') else {
            continue;
        };
        if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
            continue;
        }
        seen = true;
        for token in rest.split_whitespace() {
            let value = token.parse::<i64>().map_err(|_| {
                ReductionError::malformed(format!("model token {:?} is not a literal", token))
            })?;
            if value != 0 {
                literals.push(value);
            }
        }
    }
    Ok(seen.then_some(literals))
}
