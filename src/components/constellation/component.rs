//! Leptos component for the constellation background.
//!
//! Renders the node field as absolutely positioned, idle-floating DOM elements
//! plus an overlay canvas for the hover links. An animation loop runs via
//! `requestAnimationFrame`: each frame clears the canvas, reads the current
//! hover, measures live element centers through the DOM, and strokes the
//! nearest-neighbor links. The loop and the resize listener are torn down on
//! unmount.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::field::{self, NodeSpec};
use super::links;

/// Current on-screen center of a node's rendered element, or `None` when the
/// element cannot be measured this frame. The DOM box is queried live because
/// the idle-float animation moves elements off their stored percentages.
fn node_center(id: usize) -> Option<(f64, f64)> {
	let document = web_sys::window()?.document()?;
	let element = document.get_element_by_id(&format!("constellation-node-{id}"))?;
	let rect = element.get_bounding_client_rect();
	Some((rect.left() + rect.width() / 2.0, rect.top() + rect.height() / 2.0))
}

/// Hover value after a pointer-leave from `leaving`. A leave event for a node
/// that is not the active hover must not clobber a newer hover.
fn release_hover(current: Option<usize>, leaving: usize) -> Option<usize> {
	if current == Some(leaving) { None } else { current }
}

/// Size the canvas pixel buffer to the viewport so drawing coordinates map
/// 1:1 to screen pixels.
fn fit_canvas_to_viewport(canvas: &HtmlCanvasElement, window: &Window) {
	let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
	let height = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
	canvas.set_width(width as u32);
	canvas.set_height(height as u32);
}

/// Animated node-constellation background.
///
/// Layered above the page background and below interactive foreground
/// content; only the individual node elements accept pointer events.
#[component]
pub fn Constellation() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let hovered = RwSignal::new(None::<usize>);
	let nodes: Vec<NodeSpec> = field::generate_field();

	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let raf_handle: Rc<Cell<i32>> = Rc::new(Cell::new(0));
	let (animate_init, resize_cb_init, raf_init) =
		(animate.clone(), resize_cb.clone(), raf_handle.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		// The buffer must match the viewport before the first frame draws.
		fit_canvas_to_viewport(&canvas, &window);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let canvas_resize = canvas.clone();
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(win) = web_sys::window() {
				fit_canvas_to_viewport(&canvas_resize, &win);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (animate_inner, raf_inner) = (animate_init.clone(), raf_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);

			// Read the hover fresh each frame; a stale or unmeasurable node
			// degrades to an empty frame, never an error.
			if let Some((origin, targets)) =
				links::plan_frame(hovered.get_untracked(), 0..field::NODE_COUNT, node_center)
			{
				links::draw_links(&ctx, origin, &targets);
			}

			if let Some(ref cb) = *animate_inner.borrow() {
				if let Ok(handle) = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref())
				{
					raf_inner.set(handle);
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			if let Ok(handle) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				raf_init.set(handle);
			}
		}
	});

	// `on_cleanup` requires `Send + Sync`; the captured `Rc`s are neither,
	// but the app is single-threaded, so `SendWrapper` is sound.
	let cleanup = leptos::__reexports::send_wrapper::SendWrapper::new(move || {
		if let Some(window) = web_sys::window() {
			let _ = window.cancel_animation_frame(raf_handle.get());
			if let Some(ref cb) = *resize_cb.borrow() {
				let _ =
					window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
		*animate.borrow_mut() = None;
		*resize_cb.borrow_mut() = None;
	});
	on_cleanup(move || cleanup.take()());

	view! {
		<div class="constellation">
			<canvas node_ref=canvas_ref class="constellation-canvas" />
			{nodes
				.into_iter()
				.map(|node| {
					let id = node.id;
					view! {
						<div
							id=format!("constellation-node-{id}")
							class=format!("constellation-node glow-{}", node.color.css_class())
							style=format!(
								"left: {:.4}%; top: {:.4}%; animation-delay: {:.2}s;",
								node.x,
								node.y,
								node.delay,
							)
							on:mouseenter=move |_| hovered.set(Some(id))
							on:mouseleave=move |_| hovered.update(|h| *h = release_hover(*h, id))
						>
							<span class="constellation-glyph">{node.glyph}</span>
							<Show when=move || hovered.get() == Some(id)>
								<div class="constellation-ring" />
							</Show>
						</div>
					}
				})
				.collect_view()}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::release_hover;

	#[test]
	fn leave_from_the_active_node_clears_the_hover() {
		assert_eq!(release_hover(Some(3), 3), None);
	}

	#[test]
	fn stale_leave_keeps_a_newer_hover() {
		// A hovered, then B's delayed leave arrives: A stays highlighted.
		assert_eq!(release_hover(Some(5), 9), Some(5));
		assert_eq!(release_hover(None, 9), None);
	}
}
