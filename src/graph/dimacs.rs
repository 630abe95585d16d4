// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! DIMACS graph text (`p edge` format).
//!
//! ```text
//! c comment
//! p edge 4 2
//! e 1 2
//! e 3 4
//! ```
//!
//! Vertices are 1-indexed in the text and 0-indexed in [`Graph`]. Each `e`
//! line sets both directed entries. This is also the input format of the
//! external clique-finder.

use super::Graph;
use crate::error::{ReductionError, Result};
use std::fmt::Write;
use tracing::{trace, warn};

impl Graph {
    /// Read a graph in DIMACS `p edge` (or `p col`) format.
    pub fn from_dimacs(text: &str) -> Result<Graph> {
        let mut graph: Option<Graph> = None;
        let mut declared_edges = 0usize;
        let mut seen_edges = 0usize;

        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('c') {
                continue;
            }
            let mut fields = line.split_whitespace();
            match fields.next() {
                Some("p") => {
                    if graph.is_some() {
                        return Err(ReductionError::malformed(format!(
                            "line {}: second problem line",
                            line_no + 1
                        )));
                    }
                    match fields.next() {
                        Some("edge") | Some("col") => {}
                        other => {
                            return Err(ReductionError::malformed(format!(
                                "line {}: unsupported problem type {:?}",
                                line_no + 1,
                                other
                            )))
                        }
                    }
                    let vertices = parse_number(fields.next(), line_no)?;
                    declared_edges = parse_number(fields.next(), line_no)?;
                    graph = Some(Graph::new(vertices)?);
                }
                Some("e") => {
                    let graph = graph.as_mut().ok_or_else(|| {
                        ReductionError::malformed(format!(
                            "line {}: edge before problem line",
                            line_no + 1
                        ))
                    })?;
                    let u = parse_vertex(fields.next(), graph, line_no)?;
                    let v = parse_vertex(fields.next(), graph, line_no)?;
                    graph.add_edge(u, v)?;
                    graph.add_edge(v, u)?;
                    seen_edges += 1;
                }
                Some(other) => {
                    trace!(line = line_no + 1, kind = other, "skipping DIMACS line");
                }
                None => {}
            }
        }

        let graph = graph.ok_or_else(|| ReductionError::malformed("missing problem line"))?;
        if seen_edges != declared_edges {
            warn!(
                declared = declared_edges,
                found = seen_edges,
                "DIMACS edge count differs from header"
            );
        }
        Ok(graph)
    }

    /// Write the graph in DIMACS `p edge` format, one `e` line per unordered
    /// edge.
    pub fn to_dimacs(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "p edge {} {}", self.vertex_count(), self.edge_count());
        for (u, v) in self.edges() {
            let _ = writeln!(out, "e {} {}", u + 1, v + 1);
        }
        out
    }
}

fn parse_number(field: Option<&str>, line_no: usize) -> Result<usize> {
    let field = field.ok_or_else(|| {
        ReductionError::malformed(format!("line {}: missing field", line_no + 1))
    })?;
    field.parse().map_err(|_| {
        ReductionError::malformed(format!("line {}: bad number {:?}", line_no + 1, field))
    })
}

fn parse_vertex(field: Option<&str>, graph: &Graph, line_no: usize) -> Result<usize> {
    let vertex = parse_number(field, line_no)?;
    if vertex == 0 {
        return Err(ReductionError::out_of_range(&[0], &[graph.vertex_count()]));
    }
    graph.check_vertex(vertex - 1)?;
    Ok(vertex - 1)
}
