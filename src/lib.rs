//! InsightBoard core: dataset catalog, view-model, dashboard metrics and
//! insight requests. The `insightboard` binary is a thin egui shell over it.

pub mod config;
pub mod data;
pub mod insights;
