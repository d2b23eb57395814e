//! Fixed site header with scroll-aware styling.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

const NAV_ITEMS: &[(&str, &str)] = &[
	("About", "#about"),
	("Skills", "#skills"),
	("Projects", "#projects"),
	("Contact", "#contact"),
];

/// Fixed top navigation. Transparent over the hero; once the page is
/// scrolled past 50px it picks up a blurred backdrop.
#[component]
pub fn Navigation(#[prop(into)] brand: String) -> impl IntoView {
	let (scrolled, set_scrolled) = signal(false);

	let window = web_sys::window().unwrap();
	let scroll_cb = Closure::<dyn FnMut()>::new({
		let window = window.clone();
		move || set_scrolled.set(window.scroll_y().unwrap_or(0.0) > 50.0)
	});
	let _ = window.add_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref());

	let listener = StoredValue::new_local((window, scroll_cb));
	on_cleanup(move || {
		listener.with_value(|(window, cb)| {
			let _ = window
				.remove_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
		});
	});

	view! {
		<header class="site-nav" class=("nav-scrolled", move || scrolled.get())>
			<div class="nav-inner">
				<a href="#top" class="nav-brand">
					{brand}
				</a>
				<nav class="nav-links">
					{NAV_ITEMS
						.iter()
						.map(|(label, href)| view! { <a href=*href>{*label}</a> })
						.collect_view()}
				</nav>
			</div>
		</header>
	}
}
