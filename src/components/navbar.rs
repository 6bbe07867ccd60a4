//! Fixed top navbar with a scroll-state background toggle.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use crate::content::PERSONAL_INFO;

/// Scroll offset past which the navbar gets its solid backdrop.
const SCROLL_THRESHOLD: f64 = 20.0;

const NAV_LINKS: [&str; 4] = ["About", "Projects", "Experience", "Contact"];

/// Site navigation bar. Transparent at the top of the page, backdropped once
/// the window has scrolled past the threshold.
#[component]
pub fn Navbar() -> impl IntoView {
	let scrolled = RwSignal::new(false);

	if let Some(window) = web_sys::window() {
		let scroll_cb = Closure::<dyn FnMut()>::new(move || {
			let offset = web_sys::window()
				.and_then(|w| w.scroll_y().ok())
				.unwrap_or(0.0);
			scrolled.set(offset > SCROLL_THRESHOLD);
		});
		let _ = window.add_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref());
		// `on_cleanup` requires `Send + Sync`; the captured `Closure` is
		// neither, but the app is single-threaded, so `SendWrapper` is sound.
		let cleanup = leptos::__reexports::send_wrapper::SendWrapper::new(move || {
			if let Some(win) = web_sys::window() {
				let _ = win
					.remove_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref());
			}
		});
		on_cleanup(move || cleanup.take()());
	}

	view! {
		<nav class=move || if scrolled.get() { "navbar navbar-scrolled" } else { "navbar" }>
			<div class="navbar-inner">
				<a href="#" class="navbar-brand">
					"RA" <span class="accent">"."</span>
				</a>
				<div class="navbar-links">
					{NAV_LINKS
						.iter()
						.map(|item| {
							view! {
								<a href=format!("#{}", item.to_lowercase()) class="navbar-link">
									{*item}
								</a>
							}
						})
						.collect_view()}
					<a href="#contact" class="navbar-cta" title=PERSONAL_INFO.availability>
						"Hire"
					</a>
				</div>
			</div>
		</nav>
	}
}
