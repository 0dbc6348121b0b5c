//! Crustadf is a SAT-based reasoner for Abstract Dialectical Frameworks.
//!
//! Frameworks are built in the [`adf`] module.
//! Their semantics are computed by pipelines of reasoning steps (see [`solvers`]), working on clauses produced by the [`encodings`] module
//! and solved by the SAT solvers of the [`sat`] module.

#![warn(missing_docs)]

pub mod adf;

pub mod encodings;

pub mod sat;

pub mod solvers;

pub mod utils;
