mod component;
pub mod search;
mod state;
mod types;

pub use component::Sidebar;
pub use state::{SidebarState, Visibility};
pub use types::CourseNode;
