use thiserror::Error;

use crate::constraint::Region;

/// Failures raised while building or resolving panel layout.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
	/// A constraint set was constructed without any rules.
	#[error("constraint set '{name}' has no rules")]
	EmptyConstraintSet { name: &'static str },

	/// A set with the same name is already registered in the group.
	#[error("constraint set '{name}' is already registered in group '{group}'")]
	DuplicateConstraintSet {
		group: &'static str,
		name: &'static str,
	},

	/// Activation referenced a set that was never registered.
	#[error("constraint set '{name}' is not registered in group '{group}'")]
	UnknownConstraintSet { group: &'static str, name: String },

	/// A rule referenced a region that has not been laid out yet.
	#[error("region {region:?} is not available for layout")]
	MissingHostRegion { region: Region },
}
