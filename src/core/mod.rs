//! Core module - Contains the fundamental data structures
//!
//! This module provides:
//! - Stats model (StatValue, StatsSnapshot, Version) and the error type
//! - Rendering functions for different output formats

pub mod model;
pub mod render;
