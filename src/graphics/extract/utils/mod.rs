//! Building blocks for extraction systems.

pub mod extract_component;
pub mod extract_param;
