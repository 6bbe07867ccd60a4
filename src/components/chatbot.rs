//! Floating chat widget wrapping the portfolio assistant.
//!
//! A launcher button toggles the panel; submissions push the user turn onto
//! the transcript, call the completion service, and append the reply. The
//! busy flag blocks re-entrant submits while a request is in flight.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::SubmitEvent;

use crate::chat::{self, Message, Role};

const GREETING: &str = "System online. I'm Richard's AI interface. How can I assist with your inquiry regarding his architecture, tech stack, or availability?";

/// Floating chat widget, fixed to the bottom-right corner above all page
/// content.
#[component]
pub fn ChatBot() -> impl IntoView {
	let open = RwSignal::new(false);
	let messages = RwSignal::new(vec![Message {
		role: Role::Assistant,
		content: GREETING.to_string(),
	}]);
	let input = RwSignal::new(String::new());
	let busy = RwSignal::new(false);

	let scroll_ref = NodeRef::<leptos::html::Div>::new();

	// Pin the transcript to its newest entry.
	Effect::new(move |_| {
		messages.track();
		busy.track();
		if let Some(el) = scroll_ref.get() {
			el.set_scroll_top(el.scroll_height());
		}
	});

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let text = input.get_untracked().trim().to_string();
		if text.is_empty() || busy.get_untracked() {
			return;
		}
		input.set(String::new());

		let history = messages.get_untracked();
		messages.update(|m| {
			m.push(Message {
				role: Role::User,
				content: text.clone(),
			})
		});
		busy.set(true);

		spawn_local(async move {
			let reply = chat::chat_reply(&history, &text).await;
			messages.update(|m| {
				m.push(Message {
					role: Role::Assistant,
					content: reply,
				})
			});
			busy.set(false);
		});
	};

	view! {
		<div class="chatbot">
			<Show
				when=move || open.get()
				fallback=move || {
					view! {
						<button class="chatbot-launcher" on:click=move |_| open.set(true)>
							"💬"
						</button>
					}
				}
			>
				<div class="chatbot-panel">
					<div class="chatbot-header">
						<div>
							<h3>"RA.INTERFACE"</h3>
							<span class="chatbot-status">"Neural Link Active"</span>
						</div>
						<button class="chatbot-close" on:click=move |_| open.set(false)>
							"×"
						</button>
					</div>

					<div class="chatbot-transcript" node_ref=scroll_ref>
						{move || {
							messages
								.get()
								.iter()
								.map(|msg| {
									let class = match msg.role {
										Role::User => "chat-message chat-message-user",
										Role::Assistant => "chat-message chat-message-assistant",
									};
									view! { <div class=class>{msg.content.clone()}</div> }
								})
								.collect_view()
						}}
						<Show when=move || busy.get()>
							<div class="chat-message chat-message-assistant chat-typing">
								<span></span>
								<span></span>
								<span></span>
							</div>
						</Show>
					</div>

					<form class="chatbot-input" on:submit=on_submit>
						<input
							type="text"
							placeholder="Input query..."
							prop:value=input
							on:input=move |ev| input.set(event_target_value(&ev))
						/>
						<button type="submit" disabled=move || busy.get()>
							"➤"
						</button>
					</form>
				</div>
			</Show>
		</div>
	}
}
