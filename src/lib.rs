//! MCDA Engine - multi-criteria ranking and Pareto filtering
//!
//! This crate ranks alternatives (laptops, games, synthetic points) against
//! weighted criteria. A request flows through a fixed pipeline: exclusion,
//! hard-constraint filtering, decision-matrix construction, scoring with one
//! of seven MCDA methods, stable ordering, and truncation. A Pareto-dominance
//! filter with three interchangeable algorithms sits alongside.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
