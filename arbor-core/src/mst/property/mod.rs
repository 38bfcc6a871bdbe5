//! Property-based tests for the Kruskal and Prim builders.
//!
//! Both builders are checked against a sequential union-by-rank oracle,
//! against each other, and against the structural invariants of a spanning
//! tree across generated topologies with varied weight distributions.

mod equivalence;
mod helpers;
mod oracle;
mod strategies;
mod structural;
