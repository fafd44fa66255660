//! # mood-charts
//!
//! D3-style SVG charting built with Leptos for the mood timeline.
//!
//! ## Architecture
//!
//! Uses Strategy pattern for scale computation (linear, time) and keeps
//! the brush and tooltip placement as pure state so they test off-DOM.
//!
//! ## Modules
//!
//! - `chartkit` - Core primitives: scales, paths, tick generators
//! - `layout` - Stacked focus/context geometry
//! - `brush` - Context-panel selection state machine
//! - `tooltip` - Observation tooltip content and placement
//! - `timeline` - The linked focus/context chart component

pub mod brush;
pub mod chartkit;
pub mod layout;
pub mod timeline;
pub mod tooltip;

pub use brush::*;
pub use chartkit::*;
pub use layout::*;
pub use timeline::*;
pub use tooltip::*;
