//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod discussion_gateway;
pub mod discussion_renderer;
pub mod discussion_view;
