//! # curio-core
//!
//! Core types, ID generation, and error types for Curio.
//!
//! This crate provides the foundational types shared across all Curio crates:
//! - Value types for every planning stage (ideas, packages, assessments, briefs,
//!   shot plans, learning insights, performance logs)
//! - Small closed enums (novelty type, effort, risk label, storage provider)
//! - ID prefix constants and the random ID generator
//! - The workspace state that snapshots persist
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod numeric;
pub mod workspace;

pub use errors::CoreError;
