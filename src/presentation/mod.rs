//! Visual styling and color mapping, separated from domain logic.

pub mod color_mapping;
