//! Visual styling utilities.
//!
//! Themes hold the colour scheme of the terminal host. Panel geometry and
//! chrome colours live on the core appearance types instead.

/// Theme definitions, built-ins and lookup.
pub mod theme;

pub use theme::{Theme, ThemeRegistration, builtin_themes, by_name, default_theme, names};
