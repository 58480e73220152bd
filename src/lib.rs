//! Lit Compass - a reader-archetype self-assessment.
//!
//! Two five-statement batteries score a reader on insight and mechanics,
//! a forced-choice question nudges borderline totals, and the result is
//! one of four archetypes placed on a quadrant chart.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
