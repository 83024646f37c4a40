//! Course and graph data boundary: payload types, request signatures and the
//! provider the viewer fetches through.

mod provider;
mod request;
mod types;

use thiserror::Error;

pub use provider::{DataProvider, FixtureProvider};
pub use request::{GRAPHS_REQUEST, course_request, form_encode, graph_request};
pub use types::{GraphEntry, GraphPayload, PathRecord, Shape, ShapeKind, TextRecord};

/// Failures while fetching or decoding course data.
#[derive(Error, Debug)]
pub enum Error {
	/// No payload exists for the request.
	#[error("No data for request: {0}")]
	NotFound(String),

	/// The payload was not the expected JSON.
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
}

/// Result alias for data operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Where course data comes from and which graph opens first.
#[derive(Clone, Debug)]
pub struct ProviderConfig {
	/// Origin that absolute requests are resolved against.
	pub origin: String,
	/// Graph shown on first load.
	pub default_graph: String,
}

impl Default for ProviderConfig {
	fn default() -> Self {
		Self {
			origin: "http://localhost".into(),
			default_graph: "Computer Science".into(),
		}
	}
}
