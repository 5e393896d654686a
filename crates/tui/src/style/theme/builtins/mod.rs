mod light;
mod slate;

pub(crate) use light::LIGHT;
pub(crate) use slate::SLATE;

use crate::style::theme::types::{Theme, ThemeRegistration};

/// Get the default built-in theme.
#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

pub(super) fn registrations() -> Vec<ThemeRegistration> {
	vec![
		ThemeRegistration::new("slate", SLATE).alias("dark"),
		ThemeRegistration::new("light", LIGHT).alias("day"),
	]
}
