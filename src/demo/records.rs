//! Mock records searched by the demo.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
	Male,
	Female,
}

impl fmt::Display for Gender {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Male => "Male",
			Self::Female => "Female",
		})
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonInfo {
	pub name: String,
	pub surname: String,
	pub gender: Gender,
	pub region: String,
}

impl PersonInfo {
	pub fn new(name: &str, surname: &str, gender: Gender, region: &str) -> Self {
		Self {
			name: name.to_string(),
			surname: surname.to_string(),
			gender,
			region: region.to_string(),
		}
	}

	#[must_use]
	pub fn full_name(&self) -> String {
		format!("{} {}", self.name, self.surname)
	}
}

impl fmt::Display for PersonInfo {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} {}, {}, is from {}",
			self.name, self.surname, self.gender, self.region
		)
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageInfo {
	pub name: String,
	pub format: String,
}

impl ImageInfo {
	pub fn new(name: &str, format: &str) -> Self {
		Self {
			name: name.to_string(),
			format: format.to_string(),
		}
	}

	#[must_use]
	pub fn file_name(&self) -> String {
		format!("{}.{}", self.name, self.format)
	}
}

/// A searchable entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Record {
	Person(PersonInfo),
	Image(ImageInfo),
}

impl Record {
	/// Text shown in the result list and matched against the query.
	#[must_use]
	pub fn label(&self) -> String {
		match self {
			Self::Person(person) => person.full_name(),
			Self::Image(image) => image.file_name(),
		}
	}

	/// Glyph shown at the trailing edge of the search bar.
	#[must_use]
	pub fn type_glyph(&self) -> &'static str {
		match self {
			Self::Person(_) => "☺",
			Self::Image(_) => "▣",
		}
	}

	/// Case-insensitive prefix match on [`label`](Self::label).
	#[must_use]
	pub fn matches(&self, query: &str) -> bool {
		self.label().to_lowercase().starts_with(&query.to_lowercase())
	}
}

impl fmt::Display for Record {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Person(person) => person.fmt(f),
			Self::Image(image) => f.write_str(&image.file_name()),
		}
	}
}

/// The three people and two images the demo searches.
#[must_use]
pub fn mock_records() -> Vec<Record> {
	vec![
		Record::Person(PersonInfo::new("Jack", "Depp", Gender::Male, "Owensboro")),
		Record::Person(PersonInfo::new("Jack", "DiCaprio", Gender::Male, "Los Angeles")),
		Record::Person(PersonInfo::new("Joe", "Daniels", Gender::Male, "Tennessee")),
		Record::Image(ImageInfo::new("Jackie Chan", "jpg")),
		Record::Image(ImageInfo::new("Just Push Play", "jpg")),
	]
}

/// Records whose label starts with `query`, in their original order. An empty
/// query matches nothing.
#[must_use]
pub fn search(records: &[Record], query: &str) -> Vec<Record> {
	if query.is_empty() {
		return Vec::new();
	}
	records
		.iter()
		.filter(|record| record.matches(query))
		.cloned()
		.collect()
}
