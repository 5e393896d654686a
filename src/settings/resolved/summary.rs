use ratatui::style::Color;

use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!("  Theme: {}", config.theme_name);
	println!("  Bar height: {}", config.panel.bar_height);
	println!("  Expand by: {}", config.expand_by);
	println!("  Regular from: {} columns", config.regular_min_width);
	println!("  Divider colour: {}", config.panel.divider_color);

	let appearance = &config.panel.appearance;
	println!("  Mask to bounds: {}", bool_to_word(appearance.mask_to_bounds));
	println!("  Corner radius: {}", appearance.corner_radius);
	println!(
		"  Border: {} ({})",
		appearance.border_width,
		color_or_none(appearance.border_color)
	);
	println!(
		"  Shadow: {} at opacity {}, radius {}, offset ({}, {})",
		color_or_none(appearance.shadow_color),
		appearance.shadow_opacity,
		appearance.shadow_radius,
		appearance.shadow_offset.x,
		appearance.shadow_offset.y
	);

	let bar = &config.panel.search_bar;
	println!("  Search icon colour: {}", bar.search_icon_color);
	println!("  Search text colour: {}", color_or_none(bar.text_color));
	println!("  Search bar margin: {}", bar.margin);
	println!(
		"  Search bar border: {} ({}), corner radius {}",
		bar.layer.border_width,
		color_or_none(bar.layer.border_color),
		bar.layer.corner_radius
	);
	println!("  Placeholder: {}", config.placeholder);
	if !config.initial_query.is_empty() {
		println!("  Initial query: {}", config.initial_query);
	}
	println!("  Debounce: {} ms", config.debounce.as_millis());
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

fn color_or_none(color: Option<Color>) -> String {
	color.map_or_else(|| "none".to_string(), |color| color.to_string())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(bool_to_word(true), "yes");
		assert_eq!(bool_to_word(false), "no");
	}

	#[test]
	fn missing_colours_print_as_none() {
		assert_eq!(color_or_none(None), "none");
		assert_eq!(color_or_none(Some(Color::Red)), "Red");
	}
}
