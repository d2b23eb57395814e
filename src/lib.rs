//! neon-portfolio: single-page animated portfolio site.
//!
//! A WASM client-side app: hero, about, skills, projects, and contact
//! sections over animated canvas particle backgrounds. Site copy can be
//! overridden through a JSON island in the host page; everything else is
//! compiled in.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod content;
pub mod submit;

use components::about::About;
use components::contact::Contact;
use components::footer::Footer;
use components::hero::Hero;
use components::navigation::Navigation;
use components::projects::Projects;
use components::skills::Skills;
use content::SiteContent;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("neon-portfolio: logging initialized");
}

/// Load site content from a script element with id="portfolio-data".
/// Expected format: JSON matching [`SiteContent`]; missing fields fall
/// back to the built-in defaults.
fn load_site_content() -> Option<SiteContent> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("portfolio-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<SiteContent>(&json_text) {
		Ok(content) => {
			info!(
				"neon-portfolio: loaded content, {} projects, {} skill categories",
				content.projects.len(),
				content.skill_categories.len()
			);
			Some(content)
		}
		Err(e) => {
			warn!("neon-portfolio: failed to parse portfolio data: {e}");
			None
		}
	}
}

/// Main application component: composes the page sections from the
/// loaded (or default) site content.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let content = load_site_content().unwrap_or_default();
	let title = format!("{} | Data Scientist", content.profile.name);

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text=title />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Navigation brand=content.profile.name.clone() />
		<main>
			<Hero profile=content.profile.clone() />
			<About
				name=content.profile.name.clone()
				bio=content.profile.bio.clone()
				competencies=content.competencies.clone()
			/>
			<Skills categories=content.skill_categories.clone() />
			<Projects projects=content.projects.clone() />
			<Contact email=content.profile.email.clone() social=content.social.clone() />
		</main>
		<Footer name=content.profile.name.clone() social=content.social />
	}
}
