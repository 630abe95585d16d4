// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! DIMACS CNF export for external solving engines.

use super::CnfInstance;
use std::fmt::{self, Write};

impl CnfInstance {
    /// Write the `p cnf` header and one line per clause, each terminated by
    /// `0`.
    pub fn write_dimacs<W: Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "p cnf {} {}", self.num_vars(), self.num_clauses())?;
        for row in self.clauses() {
            for literal in row.literals() {
                write!(out, "{} ", literal.to_dimacs())?;
            }
            writeln!(out, "0")?;
        }
        Ok(())
    }

    /// The instance as DIMACS CNF text.
    pub fn to_dimacs(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = self.write_dimacs(&mut out);
        out
    }
}
