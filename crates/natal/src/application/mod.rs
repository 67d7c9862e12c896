//! Application Layer
//!
//! View models that connect domain entities to a presenter.

mod profile_view_model;

pub use profile_view_model::*;
