//! Application services: role catalog, resolver, view binding, route guard,
//! and the authentication gateway port.

#![forbid(unsafe_code)]

mod auth_gateway;
mod auth_service;
mod role_catalog;
/// Pure role/permission/navigation resolution functions.
pub mod role_resolver;
mod role_view;
mod route_guard;

pub use auth_gateway::{AuthGateway, AuthSession, Credentials, Registration};
pub use auth_service::AuthService;
pub use role_catalog::RoleCatalog;
pub use role_resolver::{ProfileDetails, ProfileInfo};
pub use role_view::{RoleView, RoleViewBinding};
pub use route_guard::{GuardDecision, GuardRequirement};
