//! Site footer: copyright line and social links.

use leptos::prelude::*;

use crate::content::SocialLink;

/// Footer strip at the bottom of the page.
#[component]
pub fn Footer(#[prop(into)] name: String, social: Vec<SocialLink>) -> impl IntoView {
	view! {
		<footer class="site-footer">
			<div class="footer-inner">
				<p>{format!("\u{a9} 2030 {name} | Innovating with Data & AI")}</p>
				<div class="social-links">
					{social
						.into_iter()
						.map(|link| {
							view! {
								<a href=link.url target="_blank" rel="noopener noreferrer">
									{link.name}
								</a>
							}
						})
						.collect_view()}
				</div>
			</div>
		</footer>
	}
}
