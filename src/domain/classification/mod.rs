//! Classification module - archetype identities and the threshold classifier.

mod archetype;
mod chart;
mod classifier;

pub use archetype::Archetype;
pub use chart::{MarkerPosition, QuadrantChart, CHART_MAX, CHART_MIN, EDGE_MARGIN};
pub use classifier::{Classification, Classifier};
