//! CLI library components for the variant reconciler.

pub mod logging;
pub mod pipeline;
pub mod types;
