use std::collections::HashSet;

use leptos::prelude::*;
use log::info;

use crate::components::sidebar::Sidebar;
use crate::data::{DataProvider, FixtureProvider, ProviderConfig};

/// FCE weight of a half-year course.
const COURSE_FCE: f64 = 0.5;

/// Default Home Page: the sidebar over the default graph's courses.
#[component]
pub fn Home() -> impl IntoView {
	let config = use_context::<ProviderConfig>().unwrap_or_default();
	let provider = FixtureProvider::new(&config);
	let graph = provider.graph(&config.default_graph);
	let graph_name = config.default_graph;

	let (fce_count, set_fce_count) = signal(0.0_f64);
	let active_courses = RwSignal::new(HashSet::<String>::new());

	let on_item_click = Callback::new(move |course: String| {
		let added = active_courses
			.try_update(|courses| courses.insert(course))
			.unwrap_or(false);
		if added {
			set_fce_count.update(|n| *n += COURSE_FCE);
		}
	});

	let on_reset = Callback::new(move |_: ()| {
		info!("clearing course selection");
		active_courses.update(HashSet::clear);
		set_fce_count.set(0.0);
	});

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			{graph
				.map(|graph| {
					view! {
						<Sidebar
							fce_count=fce_count
							nodes=graph.course_nodes()
							active_courses=active_courses.read_only()
							graph_name=graph_name
							on_item_click=on_item_click
							on_reset=on_reset
						/>
					}
				})}
		</ErrorBoundary>
	}
}
