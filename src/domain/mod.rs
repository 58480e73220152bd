//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `content` - Read-only question, tie-breaker and archetype tables
//! - `scoring` - Rating sheets and the scoring engine
//! - `classification` - Archetype identities, threshold classifier, quadrant chart
//! - `quiz` - Step flow and the session aggregate

pub mod classification;
pub mod content;
pub mod foundation;
pub mod quiz;
pub mod scoring;
