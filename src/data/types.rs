use serde::{Deserialize, Serialize};

use crate::components::sidebar::CourseNode;

/// Kind of a drawn graph shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
	/// A course.
	Node,
	/// A label grouping several courses into one prerequisite.
	Hybrid,
	/// An and/or junction.
	BoolNode,
}

/// A text label drawn on the graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextRecord {
	/// Graph the record belongs to.
	#[serde(default)]
	pub graph: u32,
	/// Identifier of the owning shape's label.
	#[serde(rename = "rId")]
	pub r_id: String,
	/// Label contents.
	pub text: String,
	/// Position in graph coordinates.
	pub pos: [f64; 2],
	/// Fill colour, empty when unset.
	#[serde(default)]
	pub fill: String,
	/// Text anchor.
	#[serde(default)]
	pub align: String,
}

/// A node, hybrid or boolean junction drawn on the graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shape {
	/// Unique identifier within the graph.
	#[serde(rename = "id_")]
	pub id: String,
	/// What the shape represents.
	#[serde(rename = "type_")]
	pub kind: ShapeKind,
	/// Graph the record belongs to.
	#[serde(default)]
	pub graph: u32,
	/// Position in graph coordinates.
	pub pos: [f64; 2],
	/// Width in graph units.
	pub width: f64,
	/// Height in graph units.
	pub height: f64,
	/// Fill colour, empty when unset.
	#[serde(default)]
	pub fill: String,
	/// Stroke colour, empty when unset.
	#[serde(default)]
	pub stroke: String,
	/// Labels drawn inside the shape.
	#[serde(default)]
	pub text: Vec<TextRecord>,
}

/// An edge or region outline between two shapes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathRecord {
	/// Unique identifier within the graph.
	#[serde(rename = "id_")]
	pub id: String,
	/// Graph the record belongs to.
	#[serde(default)]
	pub graph: u32,
	/// Polyline vertices.
	pub points: Vec<[f64; 2]>,
	/// Whether the path outlines a region instead of an edge.
	#[serde(rename = "isRegion", default)]
	pub is_region: bool,
	/// Fill colour, empty when unset.
	#[serde(default)]
	pub fill: String,
	/// Stroke colour, empty when unset.
	#[serde(default)]
	pub stroke: String,
	/// Shape the edge starts at.
	#[serde(default)]
	pub source: Option<String>,
	/// Shape the edge ends at.
	#[serde(default)]
	pub target: Option<String>,
}

/// A full prerequisite graph as served by `get-json-data`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphPayload {
	/// Canvas width.
	pub width: f64,
	/// Canvas height.
	pub height: f64,
	/// Courses, hybrids and junctions.
	#[serde(default)]
	pub shapes: Vec<Shape>,
	/// Free-standing labels.
	#[serde(default)]
	pub texts: Vec<TextRecord>,
	/// Edges and regions.
	#[serde(default)]
	pub paths: Vec<PathRecord>,
}

impl GraphPayload {
	/// Course shapes in drawing order; hybrids and junctions are skipped.
	pub fn course_nodes(&self) -> Vec<CourseNode> {
		self.shapes
			.iter()
			.filter(|shape| shape.kind == ShapeKind::Node)
			.map(|shape| CourseNode::new(shape.id.clone()))
			.collect()
	}
}

/// One entry of the `/graphs` catalogue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEntry {
	/// Catalogue identifier.
	pub id: u32,
	/// Display title.
	pub title: String,
	/// Whether the graph is generated on request.
	#[serde(default)]
	pub dynamic: bool,
}
