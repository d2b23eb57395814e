//! About section: bio card and competency rings over the 2D particle field.

use leptos::prelude::*;

use crate::components::particle_field::ParticleCanvas;
use crate::content::Skill;

/// Render one competency as a conic-gradient progress ring.
fn competency_ring(skill: &Skill) -> impl IntoView + use<> {
	let level = skill.level.min(100);
	let ring_style = format!(
		"background: conic-gradient(var(--accent) {}%, var(--ring-track) 0)",
		level
	);

	view! {
		<div class="competency-card">
			<div class="competency-ring" style=ring_style>
				<span class="competency-level">{format!("{level}%")}</span>
			</div>
			<h4>{skill.name.clone()}</h4>
		</div>
	}
}

/// About section with the pointer-reactive particle background.
#[component]
pub fn About(
	#[prop(into)] name: String,
	#[prop(into)] bio: String,
	competencies: Vec<Skill>,
) -> impl IntoView {
	view! {
		<section id="about" class="section about">
			<div class="section-backdrop">
				<ParticleCanvas />
			</div>

			<div class="section-inner">
				<h2 class="section-title">{format!("Who is {name}?")}</h2>

				<div class="bio-card">
					<p>{bio}</p>
				</div>

				<h3 class="section-subtitle">"Core Competencies"</h3>
				<div class="competency-grid">
					{competencies
						.into_iter()
						.map(|skill| competency_ring(&skill))
						.collect_view()}
				</div>
			</div>
		</section>
	}
}
