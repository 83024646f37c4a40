use serde::{Deserialize, Serialize};

/// A course entry in the prerequisite graph, as read by the sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseNode {
	/// Course code, unique within a graph.
	#[serde(rename = "id_")]
	pub id: String,
}

impl CourseNode {
	/// Build a node from its course code.
	pub fn new(id: impl Into<String>) -> Self {
		Self { id: id.into() }
	}
}
