//! Full-screen hero section with the 3D particle background.
//!
//! The tagline types itself out character by character and the role line
//! cycles every few seconds; both run on plain browser intervals that
//! are cleared when the component unmounts.

use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::components::particle_field::DepthCanvas;
use crate::content::Profile;

/// Interval between typewriter characters, in milliseconds.
const TYPE_SPEED_MS: i32 = 100;
/// Interval between role-line changes, in milliseconds.
const ROLE_CYCLE_MS: i32 = 3000;

/// Keeps the interval closures alive until unmount and clears whichever
/// handles were actually registered.
struct HeroIntervals {
	window: web_sys::Window,
	type_id: Rc<Cell<Option<i32>>>,
	role_id: Option<i32>,
	_type_cb: Closure<dyn FnMut()>,
	_role_cb: Closure<dyn FnMut()>,
}

impl HeroIntervals {
	fn clear(&self) {
		if let Some(id) = self.type_id.take() {
			self.window.clear_interval_with_handle(id);
		}
		if let Some(id) = self.role_id {
			self.window.clear_interval_with_handle(id);
		}
	}
}

/// Hero section: name, typewriter tagline, cycling role line, and a
/// call-to-action that scrolls down to the about section.
#[component]
pub fn Hero(profile: Profile) -> impl IntoView {
	let (typed, set_typed) = signal(0usize);
	let (role_idx, set_role_idx) = signal(0usize);

	let tagline = profile.tagline.clone();
	let tagline_len = tagline.chars().count();
	let roles = profile.roles.clone();
	let role_count = roles.len().max(1);

	let window = web_sys::window().unwrap();

	// Typewriter: advance until the tagline is complete, then stop.
	let type_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
	let type_cb = Closure::<dyn FnMut()>::new({
		let (window, type_id) = (window.clone(), type_id.clone());
		move || {
			let n = typed.get_untracked();
			if n < tagline_len {
				set_typed.set(n + 1);
			} else if let Some(id) = type_id.take() {
				window.clear_interval_with_handle(id);
			}
		}
	});
	if let Ok(id) = window.set_interval_with_callback_and_timeout_and_arguments_0(
		type_cb.as_ref().unchecked_ref(),
		TYPE_SPEED_MS,
	) {
		type_id.set(Some(id));
	}

	let role_cb = Closure::<dyn FnMut()>::new(move || {
		set_role_idx.update(|i| *i = (*i + 1) % role_count);
	});
	let role_id = window
		.set_interval_with_callback_and_timeout_and_arguments_0(
			role_cb.as_ref().unchecked_ref(),
			ROLE_CYCLE_MS,
		)
		.ok();

	let intervals = StoredValue::new_local(HeroIntervals {
		window,
		type_id,
		role_id,
		_type_cb: type_cb,
		_role_cb: role_cb,
	});
	on_cleanup(move || intervals.with_value(HeroIntervals::clear));

	let typed_tagline = move || tagline.chars().take(typed.get()).collect::<String>();
	let current_role = move || roles.get(role_idx.get()).cloned().unwrap_or_default();

	let scroll_to_about = move |_| {
		let Some(document) = web_sys::window().and_then(|w| w.document()) else {
			return;
		};
		if let Some(section) = document.get_element_by_id("about") {
			let opts = ScrollIntoViewOptions::new();
			opts.set_behavior(ScrollBehavior::Smooth);
			section.scroll_into_view_with_scroll_into_view_options(&opts);
		}
	};

	view! {
		<section id="top" class="hero">
			<div class="hero-backdrop">
				<DepthCanvas />
			</div>

			<div class="hero-content">
				<div class="hero-portrait">
					<div class="portrait-glow"></div>
					<div class="portrait-frame">
						<img src="/images/profile.png" alt=profile.name.clone() />
					</div>
					<div class="portrait-ring"></div>
				</div>

				<h1 class="hero-name">{profile.name.clone()}</h1>
				<p class="hero-tagline">{typed_tagline}<span class="caret">"_"</span></p>
				<p class="hero-role">{current_role}</p>

				<button class="cta-button" on:click=scroll_to_about>
					"Explore My Work"
				</button>
			</div>

			<div class="scroll-indicator">"\u{25BC}"</div>
		</section>
	}
}
