//! Skills section: categorized proficiency bars.

use leptos::prelude::*;

use crate::content::SkillCategory;

/// Grid of skill categories, each a card of percentage bars.
#[component]
pub fn Skills(categories: Vec<SkillCategory>) -> impl IntoView {
	view! {
		<section id="skills" class="section skills">
			<div class="section-inner">
				<h2 class="section-title">"Technical Proficiencies"</h2>

				<div class="skill-category-grid">
					{categories
						.into_iter()
						.map(|category| {
							view! {
								<div class="skill-category">
									<h3>{category.name}</h3>
									<div class="skill-grid">
										{category
											.skills
											.into_iter()
											.map(|skill| {
												let level = skill.level.min(100);
												view! {
													<div class="skill-card">
														<div class="skill-card-head">
															<h4>{skill.name}</h4>
															<span class="skill-level">{format!("{level}%")}</span>
														</div>
														<div class="skill-bar">
															<div
																class="skill-bar-fill"
																style=format!("width: {level}%")
															></div>
														</div>
													</div>
												}
											})
											.collect_view()}
									</div>
								</div>
							}
						})
						.collect_view()}
				</div>
			</div>
		</section>
	}
}
