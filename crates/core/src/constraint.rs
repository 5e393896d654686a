//! Layout rules, mutually exclusive rule sets and the pass that resolves them
//! into frames.
//!
//! A [`LayoutRule`] reads like a linear equation:
//! `target.attribute <relation> source.attribute * multiplier + constant`.
//! Rules are grouped into named [`ConstraintSet`]s. Sets registered in the same
//! [`ConstraintGroup`] are mutually exclusive: activating one deactivates the
//! rest. [`resolve_frames`] evaluates a flat list of rules region by region.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::LayoutError;
use crate::geometry::{Rect, Size};

/// Regions owned by the panel. `Panel` is the root and is always resolved
/// before any other region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
	Panel,
	SearchBar,
	ResultContainer,
	ResultList,
	DetailPane,
}

/// Edge or dimension of a region that a rule constrains or reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
	Top,
	Bottom,
	Leading,
	Trailing,
	Width,
	Height,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Relation {
	#[default]
	Equal,
	AtLeast,
	AtMost,
}

/// One layout equation.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRule {
	pub target: Region,
	pub attribute: Attribute,
	pub relation: Relation,
	pub source: Option<(Region, Attribute)>,
	pub multiplier: f64,
	pub constant: f64,
}

impl LayoutRule {
	/// Pin `target.attribute` to `source.source_attribute`.
	#[must_use]
	pub fn pin(
		target: Region,
		attribute: Attribute,
		source: Region,
		source_attribute: Attribute,
	) -> Self {
		Self {
			target,
			attribute,
			relation: Relation::Equal,
			source: Some((source, source_attribute)),
			multiplier: 1.0,
			constant: 0.0,
		}
	}

	/// Set `target.attribute` to a constant that does not depend on any region.
	#[must_use]
	pub fn fixed(target: Region, attribute: Attribute, constant: f64) -> Self {
		Self {
			target,
			attribute,
			relation: Relation::Equal,
			source: None,
			multiplier: 1.0,
			constant,
		}
	}

	#[must_use]
	pub fn with_multiplier(mut self, multiplier: f64) -> Self {
		self.multiplier = multiplier;
		self
	}

	#[must_use]
	pub fn with_constant(mut self, constant: f64) -> Self {
		self.constant = constant;
		self
	}

	#[must_use]
	pub fn with_relation(mut self, relation: Relation) -> Self {
		self.relation = relation;
		self
	}

	fn evaluate(&self, frames: &HashMap<Region, Rect>) -> Result<f64, LayoutError> {
		match self.source {
			None => Ok(self.constant),
			Some((region, attribute)) => {
				let frame = frames
					.get(&region)
					.ok_or(LayoutError::MissingHostRegion { region })?;
				Ok(attribute_value(frame, attribute) * self.multiplier + self.constant)
			}
		}
	}
}

fn attribute_value(frame: &Rect, attribute: Attribute) -> f64 {
	match attribute {
		Attribute::Top => frame.min_y(),
		Attribute::Bottom => frame.max_y(),
		Attribute::Leading => frame.min_x(),
		Attribute::Trailing => frame.max_x(),
		Attribute::Width => frame.width,
		Attribute::Height => frame.height,
	}
}

/// A named, non-empty group of rules that is switched on and off as a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintSet {
	name: &'static str,
	rules: Vec<LayoutRule>,
}

impl ConstraintSet {
	/// Build a set, rejecting one without rules.
	pub fn new(name: &'static str, rules: Vec<LayoutRule>) -> Result<Self, LayoutError> {
		if rules.is_empty() {
			return Err(LayoutError::EmptyConstraintSet { name });
		}
		Ok(Self { name, rules })
	}

	#[must_use]
	pub fn name(&self) -> &'static str {
		self.name
	}

	#[must_use]
	pub fn rules(&self) -> &[LayoutRule] {
		&self.rules
	}

	/// First rule in the set that constrains `target.attribute`.
	#[must_use]
	pub fn rule_for(&self, target: Region, attribute: Attribute) -> Option<&LayoutRule> {
		self.rules
			.iter()
			.find(|rule| rule.target == target && rule.attribute == attribute)
	}
}

/// Mutually exclusive constraint sets sharing one group id.
#[derive(Debug, Clone)]
pub struct ConstraintGroup {
	id: &'static str,
	sets: Vec<ConstraintSet>,
	active: Option<usize>,
	needs_layout: bool,
}

impl ConstraintGroup {
	#[must_use]
	pub fn new(id: &'static str) -> Self {
		Self {
			id,
			sets: Vec::new(),
			active: None,
			needs_layout: false,
		}
	}

	#[must_use]
	pub fn id(&self) -> &'static str {
		self.id
	}

	/// Add a set to the group. Newly registered sets start inactive.
	pub fn register(&mut self, set: ConstraintSet) -> Result<(), LayoutError> {
		if self.position(set.name()).is_some() {
			return Err(LayoutError::DuplicateConstraintSet {
				group: self.id,
				name: set.name(),
			});
		}
		self.sets.push(set);
		Ok(())
	}

	/// Activate `name`, deactivating every other set in the group, and flag
	/// the group as needing a layout pass.
	pub fn activate(&mut self, name: &str) -> Result<(), LayoutError> {
		let position = self
			.position(name)
			.ok_or_else(|| LayoutError::UnknownConstraintSet {
				group: self.id,
				name: name.to_string(),
			})?;
		self.active = Some(position);
		self.needs_layout = true;
		Ok(())
	}

	/// Leave the group without an active set.
	pub fn deactivate_all(&mut self) {
		if self.active.take().is_some() {
			self.needs_layout = true;
		}
	}

	#[must_use]
	pub fn active(&self) -> Option<&ConstraintSet> {
		self.active.and_then(|position| self.sets.get(position))
	}

	#[must_use]
	pub fn is_active(&self, name: &str) -> bool {
		self.active().is_some_and(|set| set.name() == name)
	}

	/// Number of sets currently active. Always zero or one.
	#[must_use]
	pub fn active_count(&self) -> usize {
		usize::from(self.active.is_some())
	}

	#[must_use]
	pub fn get(&self, name: &str) -> Option<&ConstraintSet> {
		self.position(name).and_then(|position| self.sets.get(position))
	}

	/// Rules of the active set, or nothing when no set is active.
	pub fn active_rules(&self) -> impl Iterator<Item = &LayoutRule> {
		self.active().into_iter().flat_map(|set| set.rules().iter())
	}

	/// Report and clear the pending layout request raised by activation.
	pub fn take_needs_layout(&mut self) -> bool {
		std::mem::take(&mut self.needs_layout)
	}

	fn position(&self, name: &str) -> Option<usize> {
		self.sets.iter().position(|set| set.name() == name)
	}
}

#[derive(Debug, Default)]
struct Edges {
	top: Option<f64>,
	bottom: Option<f64>,
	leading: Option<f64>,
	trailing: Option<f64>,
	width: Option<f64>,
	height: Option<f64>,
}

impl Edges {
	fn apply(&mut self, attribute: Attribute, relation: Relation, value: f64) {
		let slot = match attribute {
			Attribute::Top => &mut self.top,
			Attribute::Bottom => &mut self.bottom,
			Attribute::Leading => &mut self.leading,
			Attribute::Trailing => &mut self.trailing,
			Attribute::Width => &mut self.width,
			Attribute::Height => &mut self.height,
		};
		*slot = Some(match (relation, *slot) {
			(Relation::Equal, _) | (_, None) => value,
			(Relation::AtLeast, Some(current)) => current.max(value),
			(Relation::AtMost, Some(current)) => current.min(value),
		});
	}

	fn into_rect(self) -> Rect {
		let (x, width) = axis(self.leading, self.trailing, self.width);
		let (y, height) = axis(self.top, self.bottom, self.height);
		Rect::new(x, y, width.max(0.0), height.max(0.0))
	}
}

fn axis(start: Option<f64>, end: Option<f64>, length: Option<f64>) -> (f64, f64) {
	match (start, end, length) {
		(Some(start), _, Some(length)) => (start, length),
		(Some(start), Some(end), None) => (start, end - start),
		(None, Some(end), Some(length)) => (end - length, length),
		(Some(start), None, None) => (start, 0.0),
		(None, Some(end), None) => (end, 0.0),
		(None, None, Some(length)) => (0.0, length),
		(None, None, None) => (0.0, 0.0),
	}
}

/// Run one layout pass.
///
/// The panel root takes `bounds`; every region in `order` is then resolved
/// from the rules that target it. A rule may only read regions resolved
/// earlier in `order`.
pub fn resolve_frames<'a, I>(
	bounds: Size,
	rules: I,
	order: &[Region],
) -> Result<HashMap<Region, Rect>, LayoutError>
where
	I: IntoIterator<Item = &'a LayoutRule>,
{
	let rules: Vec<&LayoutRule> = rules.into_iter().collect();
	let mut frames = HashMap::with_capacity(order.len() + 1);
	frames.insert(Region::Panel, Rect::from_size(bounds));

	for region in order {
		let mut edges = Edges::default();
		for rule in rules.iter().filter(|rule| rule.target == *region) {
			let value = rule.evaluate(&frames)?;
			edges.apply(rule.attribute, rule.relation, value);
		}
		frames.insert(*region, edges.into_rect());
	}

	Ok(frames)
}

/// Host-owned height constraint of the panel.
///
/// Clones share the same constant. The constant is stored as atomic `f64`
/// bits so the handle can travel inside commands sent from other threads;
/// it is still only written from the main context.
#[derive(Debug, Clone)]
pub struct HeightConstraint {
	id: Arc<str>,
	constant: Arc<AtomicU64>,
}

impl HeightConstraint {
	#[must_use]
	pub fn new(id: impl Into<Arc<str>>, constant: f64) -> Self {
		Self {
			id: id.into(),
			constant: Arc::new(AtomicU64::new(constant.to_bits())),
		}
	}

	#[must_use]
	pub fn id(&self) -> &str {
		&self.id
	}

	#[must_use]
	pub fn constant(&self) -> f64 {
		f64::from_bits(self.constant.load(Ordering::Acquire))
	}

	pub fn set_constant(&self, value: f64) {
		self.constant.store(value.to_bits(), Ordering::Release);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn width_rule(multiplier: f64) -> LayoutRule {
		LayoutRule::pin(
			Region::ResultList,
			Attribute::Width,
			Region::ResultContainer,
			Attribute::Width,
		)
		.with_multiplier(multiplier)
	}

	#[test]
	fn empty_set_is_rejected() {
		let err = ConstraintSet::new("nothing", Vec::new()).unwrap_err();
		assert_eq!(err, LayoutError::EmptyConstraintSet { name: "nothing" });
	}

	#[test]
	fn activation_is_mutually_exclusive() {
		let mut group = ConstraintGroup::new("list-width");
		group
			.register(ConstraintSet::new("full", vec![width_rule(1.0)]).unwrap())
			.unwrap();
		group
			.register(ConstraintSet::new("split", vec![width_rule(0.4)]).unwrap())
			.unwrap();
		assert_eq!(group.active_count(), 0);

		group.activate("full").unwrap();
		assert!(group.is_active("full"));
		assert!(group.take_needs_layout());
		assert!(!group.take_needs_layout());

		group.activate("split").unwrap();
		assert!(group.is_active("split"));
		assert!(!group.is_active("full"));
		assert_eq!(group.active_count(), 1);
		assert_eq!(group.active_rules().count(), 1);
	}

	#[test]
	fn unknown_and_duplicate_sets_are_rejected() {
		let mut group = ConstraintGroup::new("list-width");
		group
			.register(ConstraintSet::new("full", vec![width_rule(1.0)]).unwrap())
			.unwrap();
		let duplicate = group.register(ConstraintSet::new("full", vec![width_rule(1.0)]).unwrap());
		assert!(matches!(
			duplicate,
			Err(LayoutError::DuplicateConstraintSet { name: "full", .. })
		));
		assert!(matches!(
			group.activate("missing"),
			Err(LayoutError::UnknownConstraintSet { .. })
		));
	}

	#[test]
	fn resolves_stacked_regions() {
		let rules = vec![
			LayoutRule::pin(Region::SearchBar, Attribute::Top, Region::Panel, Attribute::Top),
			LayoutRule::pin(
				Region::SearchBar,
				Attribute::Leading,
				Region::Panel,
				Attribute::Leading,
			),
			LayoutRule::pin(
				Region::SearchBar,
				Attribute::Trailing,
				Region::Panel,
				Attribute::Trailing,
			),
			LayoutRule::fixed(Region::SearchBar, Attribute::Height, 5.0),
			LayoutRule::pin(
				Region::ResultContainer,
				Attribute::Top,
				Region::SearchBar,
				Attribute::Bottom,
			),
			LayoutRule::pin(
				Region::ResultContainer,
				Attribute::Bottom,
				Region::Panel,
				Attribute::Bottom,
			),
			LayoutRule::fixed(Region::ResultContainer, Attribute::Width, 30.0)
				.with_relation(Relation::AtMost),
		];
		let frames = resolve_frames(
			Size::new(40.0, 20.0),
			&rules,
			&[Region::SearchBar, Region::ResultContainer],
		)
		.unwrap();

		assert_eq!(frames[&Region::SearchBar], Rect::new(0.0, 0.0, 40.0, 5.0));
		assert_eq!(frames[&Region::ResultContainer], Rect::new(0.0, 5.0, 30.0, 15.0));
	}

	#[test]
	fn reading_an_unresolved_region_fails() {
		let rules = [width_rule(1.0)];
		let err = resolve_frames(Size::new(10.0, 10.0), &rules, &[Region::ResultList]).unwrap_err();
		assert_eq!(
			err,
			LayoutError::MissingHostRegion {
				region: Region::ResultContainer
			}
		);
	}

	#[test]
	fn height_constraint_clones_share_the_constant() {
		let constraint = HeightConstraint::new("SearchViewHeight", 50.0);
		let shared = constraint.clone();
		shared.set_constant(400.0);
		assert_eq!(constraint.constant(), 400.0);
		assert_eq!(constraint.id(), "SearchViewHeight");
	}
}
