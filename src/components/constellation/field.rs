//! Node field generation for the constellation background.
//!
//! Produces the fixed set of decorated nodes once per mount. Positions are
//! stored as viewport percentages; the rendered DOM element is authoritative
//! for the actual pixel position, which drifts via the idle-float animation.

/// Number of nodes in one constellation.
pub const NODE_COUNT: usize = 28;

/// Lower bound of a node position, in percent of the viewport.
const POS_MIN: f64 = 5.0;
/// Span of the position range. Keeps nodes away from the extreme edges so
/// hover targets stay fully visible.
const POS_SPAN: f64 = 90.0;

/// Maximum idle-float animation delay, in seconds.
const DELAY_MAX: f64 = 5.0;

/// Glyphs cycled through by node id.
pub const GLYPHS: [&str; 16] = [
	"⚡", "🤖", "⚛️", "💎", "🔥", "🌐", "🛡️", "📦", "🚀", "⚙️", "✨", "🧠", "☁️", "🛠️", "📡", "💾",
];

/// Cosmetic color tag cycled through by node id. Maps to a `glow-*` CSS class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorTag {
	/// Styled by `glow-emerald`.
	Emerald,
	/// Styled by `glow-rose`.
	Rose,
	/// Styled by `glow-purple`.
	Purple,
	/// Styled by `glow-sky`.
	Sky,
}

impl ColorTag {
	/// Deterministic tag for a node id.
	pub fn from_id(id: usize) -> Self {
		match id % 4 {
			0 => ColorTag::Emerald,
			1 => ColorTag::Rose,
			2 => ColorTag::Purple,
			_ => ColorTag::Sky,
		}
	}

	/// CSS class suffix for this tag.
	pub fn css_class(self) -> &'static str {
		match self {
			ColorTag::Emerald => "emerald",
			ColorTag::Rose => "rose",
			ColorTag::Purple => "purple",
			ColorTag::Sky => "sky",
		}
	}
}

/// One constellation node. Created once per mount, never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeSpec {
	/// Stable id, contiguous from 0. Join key between the node and its DOM element.
	pub id: usize,
	/// Horizontal position in percent of the viewport width.
	pub x: f64,
	/// Vertical position in percent of the viewport height.
	pub y: f64,
	/// Cosmetic color tag, `id mod 4`.
	pub color: ColorTag,
	/// Display glyph, `id mod 16`.
	pub glyph: &'static str,
	/// Idle-float animation delay in seconds, desynchronizing the drift.
	pub delay: f64,
}

/// Generate the node field with the browser's random source.
pub fn generate_field() -> Vec<NodeSpec> {
	generate_field_with(js_sys::Math::random)
}

/// Generate the node field from an injected uniform source in `[0, 1)`.
pub fn generate_field_with(mut rng: impl FnMut() -> f64) -> Vec<NodeSpec> {
	(0..NODE_COUNT)
		.map(|id| NodeSpec {
			id,
			x: rng() * POS_SPAN + POS_MIN,
			y: rng() * POS_SPAN + POS_MIN,
			color: ColorTag::from_id(id),
			glyph: GLYPHS[id % GLYPHS.len()],
			delay: rng() * DELAY_MAX,
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Deterministic sin-hash uniform source in `[0, 1)`.
	fn pseudo_random(seed: &mut f64) -> f64 {
		*seed += 1.0;
		let x = (*seed * 12.9898 + *seed * 78.233).sin() * 43758.5453;
		x - x.floor()
	}

	fn fixture_field() -> Vec<NodeSpec> {
		let mut seed = 0.0;
		generate_field_with(move || pseudo_random(&mut seed))
	}

	#[test]
	fn field_has_exactly_28_nodes_with_contiguous_ids() {
		let nodes = fixture_field();
		assert_eq!(nodes.len(), NODE_COUNT);
		for (i, node) in nodes.iter().enumerate() {
			assert_eq!(node.id, i);
		}
	}

	#[test]
	fn positions_stay_inside_the_safe_band() {
		for node in fixture_field() {
			assert!((5.0..=95.0).contains(&node.x), "x out of range: {}", node.x);
			assert!((5.0..=95.0).contains(&node.y), "y out of range: {}", node.y);
		}
	}

	#[test]
	fn cosmetics_are_deterministic_in_id() {
		for node in fixture_field() {
			assert_eq!(node.color, ColorTag::from_id(node.id % 4));
			assert_eq!(node.glyph, GLYPHS[node.id % 16]);
		}
	}

	#[test]
	fn float_delay_is_below_five_seconds() {
		for node in fixture_field() {
			assert!((0.0..5.0).contains(&node.delay));
		}
	}

	#[test]
	fn regeneration_draws_fresh_positions() {
		let mut seed = 100.0;
		let first = generate_field_with(|| pseudo_random(&mut seed));
		let second = generate_field_with(|| pseudo_random(&mut seed));
		assert_ne!(first, second);
	}
}
