//! Pure helpers behind the sidebar views: search filtering, active-course
//! ordering and counter formatting.

use std::cmp::Ordering;
use std::collections::HashSet;

use super::types::CourseNode;

/// Identifiers of every node, in node order.
pub fn candidates(nodes: &[CourseNode]) -> Vec<String> {
	nodes.iter().map(|node| node.id.clone()).collect()
}

/// Keep the candidates containing `query` (case-sensitive).
///
/// An empty query returns the candidates unchanged.
pub fn filter_courses(candidates: &[String], query: &str) -> Vec<String> {
	if query.is_empty() {
		return candidates.to_vec();
	}
	candidates
		.iter()
		.filter(|course| course.contains(query))
		.cloned()
		.collect()
}

/// Copy of the active set, sorted ascending with locale-aware comparison.
pub fn sorted_active(active: &HashSet<String>) -> Vec<String> {
	let mut courses: Vec<String> = active.iter().cloned().collect();
	courses.sort_by(|a, b| locale_compare(a, b));
	courses
}

/// Upper-cased label shown for a course code.
pub fn display_label(course: &str) -> String {
	course.to_uppercase()
}

/// Render an FCE total: whole numbers keep one decimal place (`2` → `2.0`).
pub fn format_fce(count: f64) -> String {
	if count.is_nan() {
		return "NaN".into();
	}
	if count.is_infinite() {
		return if count > 0.0 { "Infinity" } else { "-Infinity" }.into();
	}
	if count == 0.0 {
		// also folds -0.0
		return "0.0".into();
	}
	let natural = number_to_string(count);
	if count.fract() == 0.0 {
		format!("{natural}.0")
	} else {
		natural
	}
}

// Exponent form outside [1e-6, 1e21), as JavaScript prints numbers.
fn number_to_string(n: f64) -> String {
	let magnitude = n.abs();
	if (1e-6..1e21).contains(&magnitude) {
		return n.to_string();
	}
	let exp = format!("{n:e}");
	match exp.split_once('e') {
		Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
		_ => exp,
	}
}

#[cfg(target_arch = "wasm32")]
fn locale_compare(a: &str, b: &str) -> Ordering {
	let order = js_sys::JsString::from(a).locale_compare(
		b,
		&js_sys::Array::new(),
		&js_sys::Object::new(),
	);
	order.cmp(&0)
}

// Off-browser there is no collator; fold case first, lower case wins ties.
#[cfg(not(target_arch = "wasm32"))]
fn locale_compare(a: &str, b: &str) -> Ordering {
	a.to_lowercase()
		.cmp(&b.to_lowercase())
		.then_with(|| b.cmp(a))
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod properties {
	use proptest::prelude::*;

	use super::*;

	proptest! {
		#[test]
		fn filtered_results_contain_the_query(
			all in proptest::collection::vec("[a-z]{3}[0-9]{3}", 0..20),
			query in "[a-z0-9]{0,4}",
		) {
			let filtered = filter_courses(&all, &query);
			for course in &filtered {
				prop_assert!(course.contains(query.as_str()));
				prop_assert!(all.contains(course));
			}
			let expected = all.iter().filter(|c| c.contains(query.as_str())).count();
			prop_assert_eq!(filtered.len(), expected);
		}

		#[test]
		fn filtering_is_idempotent(
			all in proptest::collection::vec("[a-z]{3}[0-9]{3}", 0..20),
			query in "[a-z0-9]{0,4}",
		) {
			let once = filter_courses(&all, &query);
			prop_assert_eq!(filter_courses(&once, &query), once);
		}

		#[test]
		fn active_courses_sort_as_case_folded_permutation(
			active in proptest::collection::hash_set("[a-zA-Z]{1,3}[0-9]{0,3}", 0..20),
		) {
			let sorted = sorted_active(&active);
			prop_assert_eq!(sorted.len(), active.len());
			prop_assert!(sorted.iter().all(|course| active.contains(course)));
			for pair in sorted.windows(2) {
				prop_assert!(pair[0].to_lowercase() <= pair[1].to_lowercase());
			}
		}

		#[test]
		fn whole_fce_counts_end_in_point_zero(n in 1u32..10_000) {
			prop_assert_eq!(format_fce(f64::from(n)), format!("{n}.0"));
		}
	}
}
