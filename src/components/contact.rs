//! Contact section: the message form and social links.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::warn;

use crate::content::SocialLink;
use crate::submit::{ContactPayload, send_contact};

/// Where a submission attempt currently stands.
#[derive(Clone, Debug, PartialEq)]
enum FormStatus {
	Idle,
	Sending,
	Sent,
	Failed(String),
}

/// Contact form posting to the mock email endpoint, next to a column of
/// social links.
#[component]
pub fn Contact(#[prop(into)] email: String, social: Vec<SocialLink>) -> impl IntoView {
	let (name, set_name) = signal(String::new());
	let (sender, set_sender) = signal(String::new());
	let (message, set_message) = signal(String::new());
	let status = RwSignal::new(FormStatus::Idle);

	let on_submit = move |ev: leptos::ev::SubmitEvent| {
		ev.prevent_default();
		if status.get_untracked() == FormStatus::Sending {
			return;
		}

		let payload = ContactPayload {
			name: name.get_untracked(),
			email: sender.get_untracked(),
			message: message.get_untracked(),
		};
		if !payload.is_complete() {
			status.set(FormStatus::Failed("all fields are required".into()));
			return;
		}

		status.set(FormStatus::Sending);
		spawn_local(async move {
			match send_contact(&payload).await {
				Ok(()) => {
					set_name.set(String::new());
					set_sender.set(String::new());
					set_message.set(String::new());
					status.set(FormStatus::Sent);
				}
				Err(e) => {
					warn!("contact: submission failed: {e}");
					status.set(FormStatus::Failed(e.to_string()));
				}
			}
		});
	};

	let submit_label = move || match status.get() {
		FormStatus::Sending => "Sending Transmission...",
		_ => "Send Transmission",
	};

	let status_banner = move || {
		let banner = match status.get() {
			FormStatus::Sent => Some((
				"form-status form-status-ok",
				"Your transmission has been received. I'll respond shortly.".to_string(),
			)),
			FormStatus::Failed(reason) => Some(("form-status form-status-err", reason)),
			_ => None,
		};
		banner.map(|(class, text)| view! { <p class=class>{text}</p> })
	};

	view! {
		<section id="contact" class="section contact">
			<div class="section-inner">
				<h2 class="section-title">"Let's Connect to Build the Future"</h2>
				<p class="section-lead">
					"Have a project in mind or want to discuss potential collaborations? \
					 Send me a message and let's create something amazing together."
				</p>

				<div class="contact-grid">
					<form class="contact-form" on:submit=on_submit>
						<input
							type="text"
							placeholder="Your Name"
							prop:value=move || name.get()
							on:input=move |ev| set_name.set(event_target_value(&ev))
						/>
						<input
							type="email"
							placeholder="Your Email"
							prop:value=move || sender.get()
							on:input=move |ev| set_sender.set(event_target_value(&ev))
						/>
						<textarea
							placeholder="Your Message"
							prop:value=move || message.get()
							on:input=move |ev| set_message.set(event_target_value(&ev))
						></textarea>

						<button
							type="submit"
							class="cta-button"
							disabled=move || status.get() == FormStatus::Sending
						>
							{submit_label}
						</button>

						{status_banner}
					</form>

					<div class="contact-aside">
						<h3>"Connect With Me"</h3>
						<p>
							"I'm always open to discussing new projects, creative ideas or \
							 opportunities to be part of your vision."
						</p>
						<p class="contact-email">{email}</p>

						<h4>"Find Me On"</h4>
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
				</div>
			</div>
		</section>
	}
}
