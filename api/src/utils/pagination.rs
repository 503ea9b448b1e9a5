use models::utils::{ListQuery, Paginated};

/// Wraps a page of results along with the links to its neighbouring pages.
///
/// `base_url` is the absolute URL of the list route without any query. The
/// links carry over the search and ordering of the current query.
pub fn paginate<T>(data: Vec<T>, count: u64, query: &ListQuery, base_url: &str) -> Paginated<T> {
	let current_page = query.page();
	let page_size = query.page_size();
	let total_pages = Paginated::<T>::total_pages(count, page_size);

	let link = |page: u32| {
		let params = ListQuery {
			page: Some(page.to_string()),
			page_size: Some(page_size.to_string()),
			search: query.search().map(str::to_string),
			ordering: query.ordering.clone(),
		};
		match serde_urlencoded::to_string(&params) {
			Ok(params) => format!("{base_url}?{params}"),
			Err(_) => format!("{base_url}?page={page}&page_size={page_size}"),
		}
	};

	Paginated {
		count,
		total_pages,
		current_page,
		next: (u64::from(current_page) < total_pages).then(|| link(current_page + 1)),
		previous: (current_page > 1).then(|| link(current_page - 1)),
		page_size,
		data,
	}
}

#[cfg(test)]
mod tests {
	use models::utils::ListQuery;

	use super::paginate;

	#[test]
	fn middle_page_links_both_ways() {
		let query = ListQuery {
			page: Some("2".to_string()),
			page_size: Some("5".to_string()),
			..Default::default()
		};
		let page = paginate(vec![1, 2, 3, 4, 5], 12, &query, "http://localhost/api/users");
		assert_eq!(page.total_pages, 3);
		assert_eq!(page.current_page, 2);
		assert_eq!(
			page.next.as_deref(),
			Some("http://localhost/api/users?page=3&page_size=5")
		);
		assert_eq!(
			page.previous.as_deref(),
			Some("http://localhost/api/users?page=1&page_size=5")
		);
	}

	#[test]
	fn last_page_has_no_next_link() {
		let query = ListQuery {
			page: Some("3".to_string()),
			page_size: Some("5".to_string()),
			search: Some("ann".to_string()),
			ordering: Some("-email".to_string()),
		};
		let page = paginate(vec![11, 12], 12, &query, "http://localhost/api/users");
		assert_eq!(page.next, None);
		assert_eq!(
			page.previous.as_deref(),
			Some("http://localhost/api/users?page=2&page_size=5&search=ann&ordering=-email")
		);
	}

	#[test]
	fn empty_results_have_no_links() {
		let page = paginate(Vec::<i64>::new(), 0, &ListQuery::default(), "http://localhost/api/roles");
		assert_eq!(page.total_pages, 0);
		assert_eq!(page.current_page, 1);
		assert_eq!(page.next, None);
		assert_eq!(page.previous, None);
		assert_eq!(page.page_size, 10);
	}
}
