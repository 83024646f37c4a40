use log::debug;

use super::search::filter_courses;

/// Whether the sidebar dropdown is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
	/// Dropdown shown.
	Open,
	/// Dropdown hidden; only the counter and toggle remain.
	#[default]
	Collapsed,
}

impl Visibility {
	/// CSS class of the sidebar container for this state.
	pub fn class(self) -> &'static str {
		match self {
			Visibility::Open => "expanded sidebar",
			Visibility::Collapsed => "collapsed sidebar",
		}
	}
}

/// Local interaction state owned by one sidebar instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SidebarState {
	/// Current open/collapsed state.
	pub visibility: Visibility,
	/// Course codes matching the last search input.
	pub results: Vec<String>,
}

impl SidebarState {
	/// Recompute the search results from scratch for `query`.
	pub fn search(&mut self, candidates: &[String], query: &str) {
		self.results = filter_courses(candidates, query);
		debug!("search {:?}: {} result(s)", query, self.results.len());
	}

	/// Flip between open and collapsed on a toggle-affordance click.
	pub fn toggle(&mut self) {
		self.visibility = match self.visibility {
			Visibility::Open => Visibility::Collapsed,
			Visibility::Collapsed => Visibility::Open,
		};
		debug!("sidebar toggled to {:?}", self.visibility);
	}

	/// Whether the dropdown is shown.
	#[cfg(test)]
	pub fn is_open(&self) -> bool {
		self.visibility == Visibility::Open
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn courses(ids: &[&str]) -> Vec<String> {
		ids.iter().map(|id| id.to_string()).collect()
	}

	#[test]
	fn starts_collapsed_with_no_results() {
		let state = SidebarState::default();
		assert_eq!(state.visibility, Visibility::Collapsed);
		assert!(state.results.is_empty());
		assert_eq!(state.visibility.class(), "collapsed sidebar");
	}

	#[test]
	fn toggle_opens_then_closes() {
		let mut state = SidebarState::default();
		state.toggle();
		assert!(state.is_open());
		assert_eq!(state.visibility.class(), "expanded sidebar");
		state.toggle();
		assert_eq!(state.visibility, Visibility::Collapsed);
	}

	#[test]
	fn each_keystroke_replaces_results() {
		let all = courses(&["csc104", "csc108"]);
		let mut state = SidebarState::default();

		state.search(&all, "10");
		assert_eq!(state.results, all);
		state.search(&all, "104");
		assert_eq!(state.results, courses(&["csc104"]));
		state.search(&all, "zzz");
		assert!(state.results.is_empty());
		state.search(&all, "");
		assert_eq!(state.results, all);
	}

	#[test]
	fn search_leaves_visibility_alone() {
		let mut state = SidebarState::default();
		state.toggle();
		state.search(&courses(&["csc104"]), "1");
		assert!(state.is_open());
	}
}
