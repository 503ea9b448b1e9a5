use std::collections::BTreeSet;

use crate::permission::PermissionCode;

/// Computes the effective permission set of a user: the union of the codes
/// inherited from the user's roles and the codes granted to them directly.
///
/// A code that arrives through several roles, or through a role as well as a
/// direct grant, appears exactly once. The result does not depend on the order
/// of either input.
pub fn effective_permissions<R, D>(role_codes: R, direct_codes: D) -> BTreeSet<String>
where
	R: IntoIterator,
	R::Item: Into<String>,
	D: IntoIterator,
	D::Item: Into<String>,
{
	role_codes
		.into_iter()
		.map(Into::into)
		.chain(direct_codes.into_iter().map(Into::into))
		.collect()
}

/// Checks whether an effective permission set grants the given code
pub fn permits(effective: &BTreeSet<String>, code: PermissionCode) -> bool {
	effective.contains(code.code())
}

#[cfg(test)]
mod tests {
	use std::collections::BTreeSet;

	use super::{effective_permissions, permits};
	use crate::permission::PermissionCode;

	fn set(codes: &[&str]) -> BTreeSet<String> {
		codes.iter().map(|code| code.to_string()).collect()
	}

	#[test]
	fn union_of_role_and_direct_codes() {
		let effective = effective_permissions(["edit_user", "view_user"], ["delete_user"]);
		assert_eq!(effective, set(&["delete_user", "edit_user", "view_user"]));
	}

	#[test]
	fn duplicates_collapse() {
		let effective = effective_permissions(
			["view_user", "view_user", "edit_user"],
			["edit_user", "view_user"],
		);
		assert_eq!(effective.len(), 2);
	}

	#[test]
	fn order_does_not_matter() {
		let forwards = effective_permissions(["a", "b", "c"], ["d", "e"]);
		let backwards = effective_permissions(["c", "b", "a"], ["e", "d"]);
		let swapped = effective_permissions(["e", "d"], ["a", "b", "c"]);
		assert_eq!(forwards, backwards);
		assert_eq!(forwards, swapped);
	}

	#[test]
	fn nothing_granted_permits_nothing() {
		let effective = effective_permissions(Vec::<String>::new(), Vec::<String>::new());
		assert!(effective.is_empty());
		assert!(!permits(&effective, PermissionCode::ViewUser));
	}

	#[test]
	fn editor_scenario() {
		let effective = effective_permissions(["edit_user", "view_user"], ["delete_user"]);
		assert!(permits(&effective, PermissionCode::DeleteUser));
		assert!(!permits(&effective, PermissionCode::CreateRole));
	}
}
