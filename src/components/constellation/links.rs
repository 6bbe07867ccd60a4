//! Neighbor selection and edge drawing for the constellation overlay.
//!
//! Selection is pure and runs against a resolver seam so the same code path
//! serves DOM-measured centers in the browser and fixture maps in tests. The
//! renderer loop calls [`select_link_targets`] then [`draw_links`] every frame;
//! nothing here is cached across frames.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

/// Maximum number of neighbors linked to the hovered node.
pub const LINK_NEIGHBORS: usize = 4;

/// Neighbors at or beyond this pixel distance are never linked.
pub const LINK_RANGE_PX: f64 = 500.0;

/// Stroke width of a link segment.
const LINK_WIDTH: f64 = 1.5;

/// Dash pattern of a link segment: 5 on, 15 off.
const DASH_PATTERN: (f64, f64) = (5.0, 15.0);

/// A selected link endpoint: a neighbor's current on-screen center and its
/// distance from the hovered node's center.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkTarget {
	/// Neighbor node id.
	pub id: usize,
	/// Neighbor center, horizontal viewport pixels.
	pub x: f64,
	/// Neighbor center, vertical viewport pixels.
	pub y: f64,
	/// Pixel distance from the hovered node's center.
	pub dist: f64,
}

/// Per-frame drawing plan: the hovered node's current on-screen center and
/// its selected link targets. `None` means the frame draws nothing — either
/// no node is hovered, or the hovered node's element cannot be measured this
/// frame. The hover value itself is never touched here; an unmeasurable
/// element only skips the one frame.
pub fn plan_frame<F>(
	hovered: Option<usize>,
	ids: impl IntoIterator<Item = usize>,
	mut resolve: F,
) -> Option<((f64, f64), Vec<LinkTarget>)>
where
	F: FnMut(usize) -> Option<(f64, f64)>,
{
	let active = hovered?;
	let origin = resolve(active)?;
	let targets = select_link_targets(origin, active, ids, resolve);
	Some((origin, targets))
}

/// Select the up-to-4 nearest neighbors of the hovered node, in ascending
/// distance order, keeping only those strictly inside [`LINK_RANGE_PX`].
///
/// `resolve` maps a node id to its current on-screen center, or `None` when
/// the element cannot be measured this frame. Unresolvable candidates sort
/// as infinitely far and fall out of the selection naturally. Ties keep the
/// candidates' original relative order (stable sort).
pub fn select_link_targets<F>(
	origin: (f64, f64),
	hovered: usize,
	ids: impl IntoIterator<Item = usize>,
	mut resolve: F,
) -> Vec<LinkTarget>
where
	F: FnMut(usize) -> Option<(f64, f64)>,
{
	let (ax, ay) = origin;
	let mut targets: Vec<LinkTarget> = ids
		.into_iter()
		.filter(|&id| id != hovered)
		.map(|id| match resolve(id) {
			Some((x, y)) => {
				let dist = ((ax - x).powi(2) + (ay - y).powi(2)).sqrt();
				LinkTarget { id, x, y, dist }
			}
			None => LinkTarget {
				id,
				x: 0.0,
				y: 0.0,
				dist: f64::INFINITY,
			},
		})
		.collect();

	targets.sort_by(|a, b| a.dist.total_cmp(&b.dist));
	targets.truncate(LINK_NEIGHBORS);
	targets.retain(|t| t.dist < LINK_RANGE_PX);
	targets
}

/// Stroke one dashed gradient segment per selected target, fading from the
/// hovered node's center outward.
pub fn draw_links(ctx: &CanvasRenderingContext2d, origin: (f64, f64), targets: &[LinkTarget]) {
	let (ax, ay) = origin;
	for target in targets {
		let gradient = ctx.create_linear_gradient(ax, ay, target.x, target.y);
		let _ = gradient.add_color_stop(0.0, "rgba(99, 102, 241, 0.6)");
		let _ = gradient.add_color_stop(0.5, "rgba(99, 102, 241, 0.2)");
		let _ = gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)");

		ctx.begin_path();
		ctx.move_to(ax, ay);
		ctx.line_to(target.x, target.y);
		#[allow(deprecated)]
		ctx.set_stroke_style(&gradient);
		ctx.set_line_width(LINK_WIDTH);
		let _ = ctx.set_line_dash(&js_sys::Array::of2(
			&JsValue::from_f64(DASH_PATTERN.0),
			&JsValue::from_f64(DASH_PATTERN.1),
		));
		ctx.stroke();
		// Dash state must not leak into other canvas drawing.
		let _ = ctx.set_line_dash(&js_sys::Array::new());
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;

	fn resolver(centers: &[(usize, (f64, f64))]) -> impl FnMut(usize) -> Option<(f64, f64)> + '_ {
		let map: HashMap<usize, (f64, f64)> = centers.iter().copied().collect();
		move |id| map.get(&id).copied()
	}

	#[test]
	fn no_hover_plans_an_empty_frame() {
		let centers: Vec<(usize, (f64, f64))> =
			(0..5).map(|id| (id, (id as f64 * 10.0, 0.0))).collect();
		assert_eq!(plan_frame(None, 0..5, resolver(&centers)), None);
	}

	#[test]
	fn unmeasurable_hovered_element_skips_the_frame() {
		// Node 0 has no measurable element this frame; nothing is drawn, and
		// the hover value passed in is left for the next frame to retry.
		let centers = [(1, (10.0, 0.0)), (2, (20.0, 0.0))];
		assert_eq!(plan_frame(Some(0), 0..3, resolver(&centers)), None);
	}

	#[test]
	fn hovered_frame_plans_origin_and_targets() {
		let centers = [(0, (0.0, 0.0)), (1, (30.0, 40.0)), (2, (60.0, 80.0))];
		let (origin, targets) =
			plan_frame(Some(0), 0..3, resolver(&centers)).expect("measurable hover plans a frame");
		assert_eq!(origin, (0.0, 0.0));
		assert_eq!(targets.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);
	}

	#[test]
	fn never_selects_more_than_four_neighbors() {
		let centers: Vec<(usize, (f64, f64))> =
			(0..10).map(|id| (id, (id as f64 * 10.0, 0.0))).collect();
		let targets = select_link_targets((0.0, 0.0), 0, 0..10, resolver(&centers));
		assert!(targets.len() <= LINK_NEIGHBORS);
		assert_eq!(targets.len(), 4);
	}

	#[test]
	fn excludes_neighbors_at_or_beyond_the_range() {
		let centers = [
			(0, (0.0, 0.0)),
			(1, (499.0, 0.0)),
			(2, (500.0, 0.0)),
			(3, (700.0, 0.0)),
		];
		let targets = select_link_targets((0.0, 0.0), 0, 0..4, resolver(&centers));
		assert_eq!(
			targets.iter().map(|t| t.id).collect::<Vec<_>>(),
			vec![1],
			"exactly-500px and farther neighbors must be dropped"
		);
	}

	#[test]
	fn hovered_node_never_links_to_itself() {
		let centers = [(0, (0.0, 0.0)), (1, (1.0, 0.0)), (2, (2.0, 0.0))];
		let targets = select_link_targets((0.0, 0.0), 0, 0..3, resolver(&centers));
		assert!(targets.iter().all(|t| t.id != 0));
	}

	#[test]
	fn unresolvable_neighbors_sort_last_and_fall_out() {
		let centers = [(1, (10.0, 0.0)), (3, (20.0, 0.0))];
		// ids 2 and 4 have no measurable element this frame.
		let targets = select_link_targets((0.0, 0.0), 0, 1..5, resolver(&centers));
		assert_eq!(targets.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);
	}

	#[test]
	fn equal_distances_keep_generation_order() {
		let centers = [
			(1, (0.0, 100.0)),
			(2, (100.0, 0.0)),
			(3, (0.0, -100.0)),
			(4, (-100.0, 0.0)),
			(5, (0.0, 50.0)),
		];
		let targets = select_link_targets((0.0, 0.0), 0, 1..6, resolver(&centers));
		assert_eq!(
			targets.iter().map(|t| t.id).collect::<Vec<_>>(),
			vec![5, 1, 2, 3]
		);
	}

	#[test]
	fn hover_scenario_links_three_in_ascending_distance_order() {
		// Hovered node 5 at (100, 100); neighbors at ~22.4px, ~78.1px,
		// ~424.3px, and ~1131.4px (past the range cutoff).
		let centers = [
			(5, (100.0, 100.0)),
			(0, (120.0, 110.0)),
			(1, (400.0, 400.0)),
			(2, (900.0, 900.0)),
			(3, (150.0, 160.0)),
		];
		let targets =
			select_link_targets((100.0, 100.0), 5, [0, 1, 2, 3, 5], resolver(&centers));
		assert_eq!(targets.iter().map(|t| t.id).collect::<Vec<_>>(), vec![0, 3, 1]);
		assert!(targets.windows(2).all(|w| w[0].dist <= w[1].dist));
		assert!((targets[0].dist - 22.36).abs() < 0.01);
		assert!((targets[1].dist - 78.10).abs() < 0.01);
		assert!((targets[2].dist - 424.26).abs() < 0.01);
	}
}
