//! Animated node-constellation background.
//!
//! A fixed field of 28 decorated nodes floats over the page. Hovering a node
//! links it to its nearest on-screen neighbors with dashed gradient edges,
//! drawn on an overlay canvas that is recomputed every animation frame:
//! - Node field generated once per mount ([`field`])
//! - Nearest-neighbor selection against live DOM geometry ([`links`])
//! - `requestAnimationFrame` render loop with resize and unmount handling
//!   ([`component`])

mod component;
pub mod field;
pub mod links;

pub use component::Constellation;
