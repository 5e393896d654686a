use super::builtin_themes;
use super::types::Theme;

/// Look up a built-in theme by name or alias, ignoring ASCII case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let name = name.trim();
	builtin_themes()
		.into_iter()
		.find(|registration| registration.matches(name))
		.map(|registration| registration.theme)
}

/// Names of every built-in theme, sorted.
#[must_use]
pub fn names() -> Vec<String> {
	let mut names: Vec<String> = builtin_themes()
		.into_iter()
		.map(|registration| registration.name)
		.collect();
	names.sort();
	names
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::style::theme::builtins::{LIGHT, SLATE};

	#[test]
	fn lookup_ignores_case_and_accepts_aliases() {
		assert_eq!(by_name("Slate"), Some(SLATE));
		assert_eq!(by_name(" day "), Some(LIGHT));
		assert_eq!(by_name("solarized"), None);
	}

	#[test]
	fn names_are_sorted() {
		assert_eq!(names(), vec!["light".to_string(), "slate".to_string()]);
	}
}
