//! The adaptive split-pane search panel.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ search bar                   │
//! ├───────────┬──────────────────┤  ← horizontal divider
//! │ result    │ detail pane      │
//! │ list      │ (Regular only)   │  ← vertical divider at 40%
//! └───────────┴──────────────────┘
//! ```
//!
//! The result list is full width while the breakpoint is
//! [`Breakpoint::Compact`] and takes 40% of the result container while it is
//! [`Breakpoint::Regular`]; the detail pane is only visible in the latter.

use std::collections::HashMap;
use std::time::Instant;

use ratatui::style::Color;
use tracing::{debug, trace, warn};

use crate::appearance::{LayerAppearance, SearchBarAppearance};
use crate::constraint::{
	Attribute, ConstraintGroup, ConstraintSet, HeightConstraint, LayoutRule, Region,
	resolve_frames,
};
use crate::error::LayoutError;
use crate::geometry::{Point, Rect};
use crate::search_bar::SearchBar;
use crate::transition::Transition;

/// Share of the result container given to the list in split mode.
pub const SPLIT_RATIO: f64 = 0.4;
pub const HORIZONTAL_DIVIDER_WIDTH: f64 = 0.5;
pub const VERTICAL_DIVIDER_WIDTH: f64 = 0.5;

const LIST_WIDTH_GROUP: &str = "result-list-width";
const LAYOUT_ORDER: [Region; 4] = [
	Region::SearchBar,
	Region::ResultContainer,
	Region::ResultList,
	Region::DetailPane,
];

/// Discrete layout mode keyed to the available horizontal space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Breakpoint {
	#[default]
	Compact,
	Regular,
}

impl Breakpoint {
	/// Classify a host width: `Regular` from `regular_min_width` upwards.
	#[must_use]
	pub fn for_width(width: f64, regular_min_width: f64) -> Self {
		if width >= regular_min_width {
			Self::Regular
		} else {
			Self::Compact
		}
	}
}

/// Which of the two mutually exclusive list-width sets is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListWidth {
	/// The list spans the whole result container.
	Full,
	/// The list takes 40% of the container, leaving room for the detail pane.
	Split,
}

impl ListWidth {
	#[must_use]
	pub const fn set_name(self) -> &'static str {
		match self {
			Self::Full => "full-width",
			Self::Split => "split-width",
		}
	}

	#[must_use]
	pub const fn for_breakpoint(breakpoint: Breakpoint) -> Self {
		match breakpoint {
			Breakpoint::Compact => Self::Full,
			Breakpoint::Regular => Self::Split,
		}
	}
}

/// Where the panel is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderContext {
	/// Live rendering with breakpoint updates from the host.
	#[default]
	Runtime,
	/// Static rendering by a design tool that cannot resolve breakpoints.
	DesignTime,
}

/// Surface the panel strokes its dividers onto.
pub trait DividerCanvas {
	fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Color);
}

/// Construction parameters for [`AdaptiveSearchPanel`].
#[derive(Debug, Clone)]
pub struct PanelConfig {
	pub bar_height: f64,
	pub divider_color: Color,
	pub appearance: LayerAppearance,
	pub search_bar: SearchBarAppearance,
	pub context: RenderContext,
}

impl Default for PanelConfig {
	fn default() -> Self {
		Self {
			bar_height: 50.0,
			divider_color: Color::Gray,
			appearance: LayerAppearance::default(),
			search_bar: SearchBarAppearance::default(),
			context: RenderContext::Runtime,
		}
	}
}

pub struct AdaptiveSearchPanel {
	frame: Rect,
	breakpoint: Breakpoint,
	list_width: ListWidth,
	width_sets: ConstraintGroup,
	base_rules: Vec<LayoutRule>,
	frames: HashMap<Region, Rect>,
	detail_visible: bool,
	results_opacity: f64,
	divider_color: Color,
	bar_height: f64,
	appearance: LayerAppearance,
	search_bar: SearchBar,
	context: RenderContext,
	transition: Option<Transition>,
	needs_layout: bool,
	needs_display: bool,
	layout_passes: u64,
}

impl AdaptiveSearchPanel {
	/// Build the panel in its initial compact, collapsed state.
	pub fn new(config: PanelConfig) -> Result<Self, LayoutError> {
		let mut width_sets = ConstraintGroup::new(LIST_WIDTH_GROUP);
		width_sets.register(list_width_set(ListWidth::Full)?)?;
		width_sets.register(list_width_set(ListWidth::Split)?)?;
		width_sets.activate(ListWidth::Full.set_name())?;

		let mut panel = Self {
			frame: Rect::default(),
			breakpoint: Breakpoint::Compact,
			list_width: ListWidth::Full,
			width_sets,
			base_rules: base_rules(config.bar_height),
			frames: HashMap::new(),
			detail_visible: false,
			results_opacity: 0.0,
			divider_color: config.divider_color,
			bar_height: config.bar_height,
			appearance: config.appearance,
			search_bar: SearchBar::new(config.search_bar),
			context: config.context,
			transition: None,
			needs_layout: true,
			needs_display: true,
			layout_passes: 0,
		};
		panel.layout_if_needed();
		Ok(panel)
	}

	/// React to a breakpoint reported by the host. Repeating the current
	/// breakpoint does nothing.
	pub fn on_breakpoint_changed(&mut self, breakpoint: Breakpoint) {
		if breakpoint == self.breakpoint {
			trace!(?breakpoint, "breakpoint unchanged");
			return;
		}
		debug!(from = ?self.breakpoint, to = ?breakpoint, "breakpoint changed");

		self.breakpoint = breakpoint;
		self.detail_visible = breakpoint == Breakpoint::Regular;
		self.apply_list_width(ListWidth::for_breakpoint(breakpoint));
		self.layout_if_needed();
		self.needs_display = true;
	}

	/// Grow or shrink the host height constraint to `bar_height + by`.
	///
	/// The result container fades in when `by > 0` and out otherwise. With
	/// `animated` the change is spread over [`EXPAND_DURATION`] and advanced by
	/// [`tick`](Self::tick); this call returns immediately either way.
	///
	/// [`EXPAND_DURATION`]: crate::EXPAND_DURATION
	pub fn expand(&mut self, constraint: &HeightConstraint, by: f64, animated: bool) {
		self.expand_at(constraint, by, animated, Instant::now());
	}

	/// [`expand`](Self::expand) with an explicit start time for the transition.
	pub fn expand_at(
		&mut self,
		constraint: &HeightConstraint,
		by: f64,
		animated: bool,
		now: Instant,
	) {
		let target_height = self.bar_height + by;
		let current_height = self
			.transition
			.as_ref()
			.map_or(self.frame.height, |transition| transition.to_height);
		if current_height == target_height {
			trace!(target_height, "panel already at requested height");
			return;
		}

		self.layout_if_needed();
		let target_opacity = if by > 0.0 { 1.0 } else { 0.0 };
		debug!(
			constraint = constraint.id(),
			target_height, target_opacity, animated, "expanding panel"
		);

		if animated {
			self.transition = Some(Transition::new(
				constraint.clone(),
				now,
				(constraint.constant(), target_height),
				(self.results_opacity, target_opacity),
			));
		} else {
			self.transition = None;
			self.results_opacity = target_opacity;
			constraint.set_constant(target_height);
			self.layout_parent(target_height);
		}
	}

	/// Advance an in-flight expand transition. Returns `true` while it is
	/// still running.
	pub fn tick(&mut self, now: Instant) -> bool {
		let Some(transition) = self.transition.as_ref() else {
			return false;
		};
		let step = transition.sample(now);
		transition.constraint.set_constant(step.height);
		if step.finished {
			self.transition = None;
		}
		self.results_opacity = step.opacity;
		self.layout_parent(step.height);
		!step.finished
	}

	/// Stroke the dividers for the current layout, relative to `bounds`.
	/// Returns the number of segments drawn.
	pub fn redraw(&mut self, bounds: Rect, canvas: &mut dyn DividerCanvas) -> usize {
		self.needs_display = false;
		let Some(bar) = self.frames.get(&Region::SearchBar).copied() else {
			return 0;
		};
		if bounds.height <= bar.max_y() {
			return 0;
		}

		let horizontal_y = bar.max_y() - HORIZONTAL_DIVIDER_WIDTH / 2.0;
		canvas.stroke_line(
			Point::new(bounds.x + bar.min_x(), bounds.y + horizontal_y),
			Point::new(bounds.x + bar.max_x(), bounds.y + horizontal_y),
			HORIZONTAL_DIVIDER_WIDTH,
			self.divider_color,
		);

		if self.breakpoint != Breakpoint::Regular {
			return 1;
		}
		let Some(container) = self.frames.get(&Region::ResultContainer).copied() else {
			return 1;
		};

		let vertical_x =
			container.min_x() + container.width * SPLIT_RATIO + VERTICAL_DIVIDER_WIDTH / 2.0;
		canvas.stroke_line(
			Point::new(
				bounds.x + vertical_x,
				bounds.y + bar.max_y() + HORIZONTAL_DIVIDER_WIDTH / 2.0,
			),
			Point::new(bounds.x + vertical_x, bounds.y + bounds.height),
			VERTICAL_DIVIDER_WIDTH,
			self.divider_color,
		);
		2
	}

	/// Show the split layout in a design tool, where no breakpoint is ever
	/// reported. Ignored at runtime.
	pub fn prepare_for_design_time_preview(&mut self) {
		if self.context != RenderContext::DesignTime {
			trace!("design-time preview hook ignored at runtime");
			return;
		}
		self.apply_list_width(ListWidth::Split);
		self.layout_if_needed();
	}

	/// Force a layout pass of the child regions.
	pub fn layout_children(&mut self) {
		self.needs_layout = true;
		self.layout_if_needed();
	}

	/// Place the panel within its host. A size change re-lays the children.
	pub fn set_frame(&mut self, frame: Rect) {
		if frame.size() != self.frame.size() {
			self.needs_layout = true;
		}
		self.frame = frame;
		self.layout_if_needed();
	}

	pub fn set_bar_height(&mut self, bar_height: f64) {
		self.bar_height = bar_height;
		self.base_rules = base_rules(bar_height);
		self.layout_children();
	}

	pub fn set_divider_color(&mut self, color: Color) {
		self.divider_color = color;
		self.needs_display = true;
	}

	#[must_use]
	pub fn frame(&self) -> Rect {
		self.frame
	}

	/// Frame of a child region in panel coordinates, once laid out.
	#[must_use]
	pub fn frame_of(&self, region: Region) -> Option<Rect> {
		self.frames.get(&region).copied()
	}

	#[must_use]
	pub fn breakpoint(&self) -> Breakpoint {
		self.breakpoint
	}

	#[must_use]
	pub fn list_width(&self) -> ListWidth {
		self.list_width
	}

	#[must_use]
	pub fn is_list_width_active(&self, width: ListWidth) -> bool {
		self.width_sets.is_active(width.set_name())
	}

	#[must_use]
	pub fn width_sets(&self) -> &ConstraintGroup {
		&self.width_sets
	}

	#[must_use]
	pub fn detail_visible(&self) -> bool {
		self.detail_visible
	}

	/// Opacity of the result container (list and detail pane).
	#[must_use]
	pub fn results_opacity(&self) -> f64 {
		self.results_opacity
	}

	#[must_use]
	pub fn is_expanded(&self) -> bool {
		self.results_opacity > 0.0 && self.frame.height > self.bar_height
	}

	#[must_use]
	pub fn is_animating(&self) -> bool {
		self.transition.is_some()
	}

	#[must_use]
	pub fn bar_height(&self) -> f64 {
		self.bar_height
	}

	#[must_use]
	pub fn divider_color(&self) -> Color {
		self.divider_color
	}

	#[must_use]
	pub fn appearance(&self) -> &LayerAppearance {
		&self.appearance
	}

	pub fn appearance_mut(&mut self) -> &mut LayerAppearance {
		&mut self.appearance
	}

	#[must_use]
	pub fn search_bar(&self) -> &SearchBar {
		&self.search_bar
	}

	pub fn search_bar_mut(&mut self) -> &mut SearchBar {
		&mut self.search_bar
	}

	#[must_use]
	pub fn context(&self) -> RenderContext {
		self.context
	}

	/// Number of layout passes run so far.
	#[must_use]
	pub fn layout_passes(&self) -> u64 {
		self.layout_passes
	}

	/// Whether something changed that requires the dividers to be redrawn.
	#[must_use]
	pub fn needs_display(&self) -> bool {
		self.needs_display
	}

	fn apply_list_width(&mut self, width: ListWidth) {
		if let Err(err) = self.width_sets.activate(width.set_name()) {
			warn!(%err, "unable to switch result list width");
			return;
		}
		self.list_width = width;
	}

	fn layout_parent(&mut self, height: f64) {
		if self.frame.height != height {
			self.frame.height = height;
			self.needs_layout = true;
		}
		self.layout_if_needed();
		self.needs_display = true;
	}

	fn layout_if_needed(&mut self) {
		let requested = self.width_sets.take_needs_layout();
		if !(self.needs_layout || requested) {
			return;
		}
		self.needs_layout = false;

		let rules = self.base_rules.iter().chain(self.width_sets.active_rules());
		match resolve_frames(self.frame.size(), rules, &LAYOUT_ORDER) {
			Ok(frames) => {
				self.frames = frames;
				self.layout_passes += 1;
				self.needs_display = true;
			}
			Err(err) => debug!(%err, "layout pass skipped"),
		}
	}
}

fn base_rules(bar_height: f64) -> Vec<LayoutRule> {
	use Attribute::{Bottom, Height, Leading, Top, Trailing};
	use Region::{DetailPane, Panel, ResultContainer, ResultList, SearchBar};

	vec![
		LayoutRule::pin(SearchBar, Top, Panel, Top),
		LayoutRule::pin(SearchBar, Leading, Panel, Leading),
		LayoutRule::pin(SearchBar, Trailing, Panel, Trailing),
		LayoutRule::fixed(SearchBar, Height, bar_height),
		LayoutRule::pin(ResultContainer, Top, SearchBar, Bottom),
		LayoutRule::pin(ResultContainer, Bottom, Panel, Bottom),
		LayoutRule::pin(ResultContainer, Leading, SearchBar, Leading),
		LayoutRule::pin(ResultContainer, Trailing, SearchBar, Trailing),
		LayoutRule::pin(ResultList, Top, ResultContainer, Top),
		LayoutRule::pin(ResultList, Bottom, ResultContainer, Bottom),
		LayoutRule::pin(ResultList, Leading, ResultContainer, Leading),
		LayoutRule::pin(DetailPane, Top, ResultContainer, Top),
		LayoutRule::pin(DetailPane, Bottom, ResultContainer, Bottom),
		LayoutRule::pin(DetailPane, Leading, ResultList, Trailing),
		LayoutRule::pin(DetailPane, Trailing, ResultContainer, Trailing),
	]
}

fn list_width_set(width: ListWidth) -> Result<ConstraintSet, LayoutError> {
	let rule = LayoutRule::pin(
		Region::ResultList,
		Attribute::Width,
		Region::ResultContainer,
		Attribute::Width,
	);
	let rule = match width {
		ListWidth::Full => rule,
		ListWidth::Split => rule
			.with_multiplier(SPLIT_RATIO)
			.with_constant(-VERTICAL_DIVIDER_WIDTH),
	};
	ConstraintSet::new(width.set_name(), vec![rule])
}
