//! Terminal host for the adaptive search panel.
//!
//! [`SearchView`] owns an [`AdaptiveSearchPanel`](spotlight_core::AdaptiveSearchPanel)
//! and renders it with ratatui: the search bar with its editable text, the
//! result list and, in the regular breakpoint, the detail pane. Dividers are
//! painted by the panel itself through a [`BufferCanvas`]. Rows and detail
//! content come from a [`ResultsSource`].

pub mod canvas;
mod components;
pub mod field;
pub mod preview;
mod runtime;
pub mod source;
pub mod style;
pub mod view;

pub use canvas::BufferCanvas;
pub use field::{FieldEvent, SearchField};
pub use preview::{buffer_to_string, render_preview};
pub use runtime::{FRAME_INTERVAL, run};
pub use source::{ResultsSource, ViewContext};
pub use style::{Theme, builtin_themes, by_name, default_theme, names};
pub use view::{HEIGHT_CONSTRAINT_ID, SearchView, ViewOptions, ViewOutcome};
