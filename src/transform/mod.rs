//! Transformation module.
//!
//! This module handles the genre expansion:
//! - Explode: split the delimited column and multiply rows
//! - Pipeline: main load → explode → trim → save orchestration

pub mod explode;
pub mod pipeline;

pub use explode::{explode, split_cell, trim_column};
pub use pipeline::*;
