//! Toolkit-independent model of the spotlight search panel.
//!
//! The panel stacks a search bar above a result container holding a result
//! list and a detail pane. Layout is expressed as sets of [`LayoutRule`]s that
//! are resolved into [`Rect`] frames; the width of the result list is governed
//! by two mutually exclusive constraint sets that are swapped whenever the
//! host reports a new [`Breakpoint`]. Nothing in this crate talks to a
//! terminal: hosts feed it bounds and breakpoints, advance its transitions and
//! hand it a [`DividerCanvas`] to draw separators on.

pub mod appearance;
pub mod constraint;
pub mod debounce;
mod dispatch;
mod error;
pub mod geometry;
pub mod panel;
pub mod search_bar;
mod transition;

pub use appearance::{LayerAppearance, SearchBarAppearance};
pub use constraint::{
	Attribute, ConstraintGroup, ConstraintSet, HeightConstraint, LayoutRule, Region, Relation,
	resolve_frames,
};
pub use debounce::Debouncer;
pub use dispatch::{MainContext, PanelCommand, PanelHandle, main_context};
pub use error::LayoutError;
pub use geometry::{Point, Rect, Size};
pub use panel::{
	AdaptiveSearchPanel, Breakpoint, DividerCanvas, ListWidth, PanelConfig, RenderContext,
};
pub use search_bar::{EndEditingReason, SearchBar, SearchBarDelegate, TextChange};
pub use transition::EXPAND_DURATION;
