use std::collections::HashSet;

use leptos::ev::{Event, MouseEvent};
use leptos::prelude::*;
use log::debug;

use super::search::{candidates, display_label, format_fce, sorted_active};
use super::state::SidebarState;
use super::types::CourseNode;

/// Course sidebar: FCE counter, course search, selected courses and reset.
///
/// The host owns the authoritative selection; this component only reports
/// intent through `on_item_click` and `on_reset`. Every prop is optional and
/// missing data renders as empty.
#[component]
pub fn Sidebar(
	/// Running FCE total; missing renders as `0.0`.
	#[prop(optional, into)]
	fce_count: MaybeProp<f64>,
	/// Graph nodes searched by the search box.
	#[prop(optional, into)]
	nodes: MaybeProp<Vec<CourseNode>>,
	/// Courses currently selected in the graph.
	#[prop(optional, into)]
	active_courses: MaybeProp<HashSet<String>>,
	/// Name of the graph being shown.
	#[prop(optional, into)]
	graph_name: MaybeProp<String>,
	/// Called with the original course code when a search result is clicked.
	#[prop(optional, into)]
	on_item_click: Option<Callback<String>>,
	/// Called when the reset button is clicked.
	#[prop(optional, into)]
	on_reset: Option<Callback<()>>,
) -> impl IntoView {
	let state = RwSignal::new(SidebarState::default());

	let on_search = move |ev: Event| {
		let query = event_target_value(&ev);
		let all = candidates(&nodes.get_untracked().unwrap_or_default());
		state.update(|s| s.search(&all, &query));
	};

	let select = move |course: String| {
		debug!("course selected: {}", course);
		if let Some(cb) = on_item_click {
			cb.run(course);
		}
	};

	let reset = move |_: MouseEvent| {
		debug!("reset requested");
		if let Some(cb) = on_reset {
			cb.run(());
		}
	};

	let results = move || {
		state
			.with(|s| s.results.clone())
			.into_iter()
			.map(|result| {
				let label = display_label(&result);
				view! {
					<li class="item" on:click=move |_| select(result.clone())>
						{label}
					</li>
				}
			})
			.collect_view()
	};

	let selected = move || {
		sorted_active(&active_courses.get().unwrap_or_default())
			.into_iter()
			.map(|course| {
				view! {
					<div data-testid=format!("test {course}") class="course-selection">
						{display_label(&course)}
					</div>
				}
			})
			.collect_view()
	};

	view! {
		<div
			class=move || state.with(|s| s.visibility.class())
			data-graph=move || graph_name.get()
			data-testid="test-toggle"
		>
			<div class="fcecount" data-testid="test-fcecount">
				{move || format!("FCE Count: {}", format_fce(fce_count.get().unwrap_or_default()))}
			</div>
			<div class="sidebar-dropdown" data-testid="test-sidebar">
				<div>
					<div>
						<label for="header-search">
							<span class="label-hidden">"Search courses"</span>
						</label>
						<input id="header-search" type="text" on:input=on_search />
					</div>
					<ul id="courseDropdown">{results}</ul>
				</div>
				<h3 class="selected-courses">"Selected courses"</h3>
				<div class="courses" data-testid="test-course-selection">
					{selected}
				</div>
				<button class="reset-selections" data-testid="test-reset" on:click=reset>
					"Reset Selections"
				</button>
			</div>
			<div
				class="sidebar-button"
				data-testid="test-sidebar-button"
				on:click=move |_| state.update(SidebarState::toggle)
			>
				<img id="sidebar-icon" src="/static/res/ico/sidebar.png" />
			</div>
		</div>
	}
}
