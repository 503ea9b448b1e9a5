use serde::{Deserialize, Serialize};

/// The query parameters accepted by every list route.
///
/// All fields are kept as raw strings so that a malformed value never rejects
/// the request. Use the accessor methods to get the interpreted values, which
/// fall back to the defaults when a value is missing or cannot be parsed.
///
/// ## Example
/// `?page=2&page_size=5&search=ann&ordering=-email` returns the second page of
/// five items whose searchable fields contain `ann`, sorted by email in
/// descending order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListQuery {
	/// The page number to return, starting at 1
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub page: Option<String>,
	/// The number of items per page
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub page_size: Option<String>,
	/// A substring to look for in the searchable fields of the resource
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub search: Option<String>,
	/// The field to order by. Prefix with `-` for descending order
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub ordering: Option<String>,
}

impl ListQuery {
	/// The page size used if none (or an invalid one) is specified.
	pub const DEFAULT_PAGE_SIZE: u32 = 10;
	/// The field used for ordering if none is specified.
	pub const DEFAULT_ORDERING: &'static str = "id";

	/// The requested page, defaulting to the first page
	pub fn page(&self) -> u32 {
		parse_positive(self.page.as_deref()).unwrap_or(1)
	}

	/// The requested page size, defaulting to [`Self::DEFAULT_PAGE_SIZE`]
	pub fn page_size(&self) -> u32 {
		parse_positive(self.page_size.as_deref()).unwrap_or(Self::DEFAULT_PAGE_SIZE)
	}

	/// The number of rows to skip to get to the requested page
	pub fn offset(&self) -> u64 {
		u64::from(self.page() - 1) * u64::from(self.page_size())
	}

	/// The search term, if a non-empty one was given
	pub fn search(&self) -> Option<&str> {
		self.search
			.as_deref()
			.map(str::trim)
			.filter(|search| !search.is_empty())
	}

	/// The requested ordering, defaulting to ascending by id
	pub fn ordering(&self) -> Ordering {
		self.ordering
			.as_deref()
			.map(str::trim)
			.filter(|ordering| !ordering.is_empty())
			.map(Ordering::parse)
			.unwrap_or_else(|| Ordering::parse(Self::DEFAULT_ORDERING))
	}
}

/// Parses a strictly positive integer, treating anything else as absent
fn parse_positive(value: Option<&str>) -> Option<u32> {
	value
		.and_then(|value| value.trim().parse::<u32>().ok())
		.filter(|value| *value >= 1)
}

/// A parsed `ordering` query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ordering {
	/// The name of the field to order by
	pub field: String,
	/// Whether the ordering is descending
	pub descending: bool,
}

impl Ordering {
	/// Parses an ordering of the form `field` or `-field`
	pub fn parse(value: &str) -> Self {
		match value.strip_prefix('-') {
			Some(field) => Self {
				field: field.to_string(),
				descending: true,
			},
			None => Self {
				field: value.to_string(),
				descending: false,
			},
		}
	}

	/// The SQL keyword for the direction of this ordering
	pub fn direction(&self) -> &'static str {
		if self.descending {
			"DESC"
		} else {
			"ASC"
		}
	}
}

/// A single page of a list route's results, along with links to the
/// neighbouring pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Paginated<T> {
	/// The total number of items matching the query, across all pages
	pub count: u64,
	/// The total number of pages
	pub total_pages: u64,
	/// The page that was returned
	pub current_page: u32,
	/// An absolute URL to the next page, if there is one
	pub next: Option<String>,
	/// An absolute URL to the previous page, if there is one
	pub previous: Option<String>,
	/// The maximum number of items on a page
	pub page_size: u32,
	/// The items on this page
	pub data: Vec<T>,
}

impl<T> Paginated<T> {
	/// The number of pages needed to hold `count` items
	pub fn total_pages(count: u64, page_size: u32) -> u64 {
		count.div_ceil(u64::from(page_size.max(1)))
	}
}
