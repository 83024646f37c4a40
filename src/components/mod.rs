//! Reusable view components.

/// Course sidebar with search and selected-course list.
pub mod sidebar;
