/// Registration, login and password recovery
pub mod auth;
/// Permissions and their CRUD
pub mod permission;
/// Roles, their CRUD and the permissions they bundle
pub mod role;
/// Users, their profile and their grants
pub mod user;
