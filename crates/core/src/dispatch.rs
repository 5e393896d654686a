//! Marshalling of panel mutations onto the main context.
//!
//! Layout and paint state are only ever touched by the thread that owns the
//! [`AdaptiveSearchPanel`]. Other threads hold a [`PanelHandle`] and post
//! [`PanelCommand`]s; the owner drains them with [`MainContext::pump`] once
//! per frame.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use tracing::trace;

use crate::constraint::HeightConstraint;
use crate::panel::{AdaptiveSearchPanel, Breakpoint};

/// A deferred panel mutation.
#[derive(Debug, Clone)]
pub enum PanelCommand {
	BreakpointChanged(Breakpoint),
	Expand {
		constraint: HeightConstraint,
		by: f64,
		animated: bool,
	},
	LayoutChildren,
}

impl PanelCommand {
	fn apply(self, panel: &mut AdaptiveSearchPanel) {
		match self {
			Self::BreakpointChanged(breakpoint) => panel.on_breakpoint_changed(breakpoint),
			Self::Expand {
				constraint,
				by,
				animated,
			} => panel.expand(&constraint, by, animated),
			Self::LayoutChildren => panel.layout_children(),
		}
	}
}

/// Cloneable, thread-safe sender of [`PanelCommand`]s.
#[derive(Debug, Clone)]
pub struct PanelHandle {
	tx: Sender<PanelCommand>,
}

impl PanelHandle {
	/// Post a command. Returns `false` once the main context is gone.
	pub fn send(&self, command: PanelCommand) -> bool {
		self.tx.send(command).is_ok()
	}

	pub fn breakpoint_changed(&self, breakpoint: Breakpoint) -> bool {
		self.send(PanelCommand::BreakpointChanged(breakpoint))
	}

	pub fn expand(&self, constraint: HeightConstraint, by: f64, animated: bool) -> bool {
		self.send(PanelCommand::Expand {
			constraint,
			by,
			animated,
		})
	}

	pub fn layout_children(&self) -> bool {
		self.send(PanelCommand::LayoutChildren)
	}
}

/// Receiving end owned by the thread that owns the panel.
#[derive(Debug)]
pub struct MainContext {
	rx: Receiver<PanelCommand>,
}

impl MainContext {
	/// Apply every queued command in order. Returns how many were applied.
	pub fn pump(&self, panel: &mut AdaptiveSearchPanel) -> usize {
		let mut applied = 0;
		loop {
			match self.rx.try_recv() {
				Ok(command) => {
					trace!(?command, "applying panel command");
					command.apply(panel);
					applied += 1;
				}
				Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
			}
		}
		applied
	}
}

/// Create a connected handle/main-context pair.
#[must_use]
pub fn main_context() -> (PanelHandle, MainContext) {
	let (tx, rx) = mpsc::channel();
	(PanelHandle { tx }, MainContext { rx })
}

#[cfg(test)]
mod tests {
	use std::thread;

	use super::*;
	use crate::geometry::Rect;
	use crate::panel::{ListWidth, PanelConfig};

	#[test]
	fn commands_from_other_threads_apply_on_pump() {
		let mut panel = AdaptiveSearchPanel::new(PanelConfig::default()).unwrap();
		panel.set_frame(Rect::new(0.0, 0.0, 800.0, 50.0));
		let constraint = HeightConstraint::new("SearchViewHeight", 50.0);
		let (handle, main) = main_context();

		let worker = {
			let handle = handle.clone();
			let constraint = constraint.clone();
			thread::spawn(move || {
				handle.breakpoint_changed(Breakpoint::Regular);
				handle.expand(constraint, 350.0, false);
			})
		};
		worker.join().unwrap();

		assert_eq!(panel.breakpoint(), Breakpoint::Compact);
		assert_eq!(constraint.constant(), 50.0);

		assert_eq!(main.pump(&mut panel), 2);
		assert_eq!(panel.breakpoint(), Breakpoint::Regular);
		assert!(panel.is_list_width_active(ListWidth::Split));
		assert_eq!(constraint.constant(), 400.0);
		assert_eq!(main.pump(&mut panel), 0);
	}

	#[test]
	fn commands_apply_in_order() {
		let mut panel = AdaptiveSearchPanel::new(PanelConfig::default()).unwrap();
		let (handle, main) = main_context();
		handle.breakpoint_changed(Breakpoint::Regular);
		handle.breakpoint_changed(Breakpoint::Compact);
		main.pump(&mut panel);
		assert_eq!(panel.breakpoint(), Breakpoint::Compact);
		assert!(!panel.detail_visible());
	}

	#[test]
	fn sending_after_the_main_context_is_dropped_reports_failure() {
		let (handle, main) = main_context();
		drop(main);
		assert!(!handle.layout_children());
	}
}
