//! Terminal session and event loop.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use spotlight_core::Breakpoint;
use tracing::{debug, info};

use crate::source::ResultsSource;
use crate::view::{SearchView, ViewOutcome};

/// Pause between frames.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Take over the terminal and pump the view until the user returns or
/// cancels.
///
/// Resize events never reach the main loop: the input thread turns them into
/// breakpoint changes posted through the view's
/// [`PanelHandle`](spotlight_core::PanelHandle).
pub fn run(view: &mut SearchView, source: &mut dyn ResultsSource) -> Result<ViewOutcome> {
	let mut terminal = ratatui::init();
	let result = drive(&mut terminal, view, source);
	ratatui::restore();
	info!(outcome = ?result.as_ref().ok(), "search session finished");
	result
}

fn drive(
	terminal: &mut DefaultTerminal,
	view: &mut SearchView,
	source: &mut dyn ResultsSource,
) -> Result<ViewOutcome> {
	terminal.clear()?;

	let handle = view.handle();
	let columns = terminal.size()?.width;
	handle.breakpoint_changed(view.breakpoint_for(columns));
	if !view.panel_mut().search_bar_mut().begin_editing() {
		debug!("search bar declined initial focus");
	}

	let regular_min_width = f64::from(view.regular_min_width());
	let (event_tx, event_rx) = mpsc::channel();
	let input_running = Arc::new(AtomicBool::new(true));
	let input_flag = Arc::clone(&input_running);

	let input_thread = thread::spawn(move || -> Result<()> {
		while input_flag.load(Ordering::Relaxed) {
			if !event::poll(Duration::from_millis(50))? {
				continue;
			}
			let forwarded = match event::read()? {
				Event::Resize(width, _) => {
					let breakpoint = Breakpoint::for_width(f64::from(width), regular_min_width);
					handle.breakpoint_changed(breakpoint) && handle.layout_children()
				}
				Event::Key(key) if key.kind == KeyEventKind::Press => event_tx.send(key).is_ok(),
				_ => true,
			};
			if !forwarded {
				break;
			}
		}
		Ok(())
	});

	let result = frame_loop(terminal, view, source, &event_rx);

	input_running.store(false, Ordering::Relaxed);
	match input_thread.join() {
		Ok(joined) => joined?,
		Err(err) => std::panic::resume_unwind(err),
	}
	result
}

/// Pump, tick, update, handle queued keys and draw until the view ends.
fn frame_loop(
	terminal: &mut DefaultTerminal,
	view: &mut SearchView,
	source: &mut dyn ResultsSource,
	keys: &Receiver<KeyEvent>,
) -> Result<ViewOutcome> {
	loop {
		let now = Instant::now();
		view.pump();
		view.tick(now);
		view.update(source, now);

		loop {
			match keys.try_recv() {
				Ok(key) => {
					if let Some(outcome) = view.handle_key(key, source, now) {
						return Ok(outcome);
					}
				}
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => {
					return Err(anyhow!("input event channel disconnected"));
				}
			}
		}

		terminal.draw(|frame| view.draw(frame, &*source))?;
		thread::sleep(FRAME_INTERVAL);
	}
}
