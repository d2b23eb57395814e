//! Projects section: cards that open either the project's GitHub page or
//! a detail modal with the long description.

use leptos::prelude::*;

use crate::content::Project;

/// Project card grid plus the detail modal.
///
/// Clicking a card opens its GitHub link in a new tab when one is set;
/// otherwise the detail modal opens with the long description.
#[component]
pub fn Projects(projects: Vec<Project>) -> impl IntoView {
	let selected: RwSignal<Option<Project>> = RwSignal::new(None);

	let cards = projects
		.into_iter()
		.map(|project| {
			let github = project.github.clone();
			let fallback = project.clone();
			let open = move |_| {
				if let Some(url) = &github {
					if let Some(window) = web_sys::window() {
						let _ = window.open_with_url_and_target(url, "_blank");
					}
				} else {
					selected.set(Some(fallback.clone()));
				}
			};

			view! {
				<article class="project-card" on:click=open>
					<div class="project-image">
						<img
							src=project.image.clone().unwrap_or_else(|| "/images/placeholder.svg".into())
							alt=project.title.clone()
						/>
					</div>
					<div class="project-body">
						<h3>{project.title.clone()}</h3>
						<div class="tech-tags">
							{project
								.tech_stack
								.iter()
								.map(|tech| view! { <span class="tech-tag">{tech.clone()}</span> })
								.collect_view()}
						</div>
						<p>{project.description.clone()}</p>
					</div>
				</article>
			}
		})
		.collect_view();

	view! {
		<section id="projects" class="section projects">
			<div class="section-inner">
				<h2 class="section-title">"Featured Projects"</h2>
				<div class="project-grid">{cards}</div>
			</div>

			{move || {
				selected
					.get()
					.map(|project| {
						view! {
							<div class="modal-overlay" on:click=move |_| selected.set(None)></div>
							<div class="modal">
								<button class="modal-close" on:click=move |_| selected.set(None)>
									"\u{2715}"
								</button>
								<h3>{project.title.clone()}</h3>
								<div class="tech-tags">
									{project
										.tech_stack
										.iter()
										.map(|tech| view! { <span class="tech-tag">{tech.clone()}</span> })
										.collect_view()}
								</div>
								<p>
									{project
										.long_description
										.clone()
										.unwrap_or_else(|| project.description.clone())}
								</p>
							</div>
						}
					})
			}}
		</section>
	}
}
