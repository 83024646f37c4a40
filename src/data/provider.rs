use std::collections::HashMap;

use log::{debug, warn};
use serde_json::Value;

use super::request::{GRAPHS_REQUEST, course_request, graph_request};
use super::types::{GraphEntry, GraphPayload};
use super::{Error, ProviderConfig, Result};

const COMPUTER_SCIENCE: &str = include_str!("../../fixtures/computer_science.json");
const STATISTICS: &str = include_str!("../../fixtures/statistics.json");
const AAA100_COURSE_INFO: &str = include_str!("../../fixtures/aaa100_course_info.json");
const GRAPHS: &str = include_str!("../../fixtures/graphs.json");

/// Source of course and graph JSON, addressed by request string.
pub trait DataProvider {
	/// Answer `request` (a path plus query string) with its JSON payload.
	fn fetch(&self, request: &str) -> Result<Value>;

	/// Graph called `name`.
	fn graph(&self, name: &str) -> Result<GraphPayload> {
		Ok(serde_json::from_value(self.fetch(&graph_request(name))?)?)
	}

	/// Course information for `code`, left untyped.
	fn course_info(&self, code: &str) -> Result<Value> {
		self.fetch(&course_request(code))
	}

	/// Catalogue of available graphs.
	fn graphs(&self) -> Result<Vec<GraphEntry>> {
		Ok(serde_json::from_value(self.fetch(GRAPHS_REQUEST)?)?)
	}
}

/// Provider answering a fixed set of requests with canned payloads.
///
/// Requests match either origin-relative (`/graphs`) or absolute under the
/// configured origin (`http://localhost/graphs`).
#[derive(Clone, Debug)]
pub struct FixtureProvider {
	origin: String,
	routes: HashMap<String, &'static str>,
}

impl FixtureProvider {
	/// Empty provider for `config.origin`.
	pub fn empty(config: &ProviderConfig) -> Self {
		Self {
			origin: config.origin.trim_end_matches('/').to_string(),
			routes: HashMap::new(),
		}
	}

	/// Provider serving the bundled graph and course fixtures.
	pub fn new(config: &ProviderConfig) -> Self {
		Self::empty(config)
			.with_route(graph_request("Computer Science"), COMPUTER_SCIENCE)
			.with_route(graph_request("(unofficial) Statistics"), STATISTICS)
			.with_route(course_request("aaa100H1"), AAA100_COURSE_INFO)
			.with_route(course_request("aaa100"), AAA100_COURSE_INFO)
			.with_route(GRAPHS_REQUEST, GRAPHS)
	}

	/// Answer `request` with `body`.
	pub fn with_route(mut self, request: impl Into<String>, body: &'static str) -> Self {
		self.routes.insert(request.into(), body);
		self
	}

	fn route_key<'a>(&self, request: &'a str) -> &'a str {
		request.strip_prefix(self.origin.as_str()).unwrap_or(request)
	}
}

impl Default for FixtureProvider {
	fn default() -> Self {
		Self::new(&ProviderConfig::default())
	}
}

impl DataProvider for FixtureProvider {
	fn fetch(&self, request: &str) -> Result<Value> {
		let key = self.route_key(request);
		let Some(body) = self.routes.get(key) else {
			warn!("no fixture for {}", request);
			return Err(Error::NotFound(request.to_string()));
		};
		debug!("serving fixture for {}", key);
		Ok(serde_json::from_str(body)?)
	}
}
