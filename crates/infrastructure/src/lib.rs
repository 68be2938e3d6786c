//! Adapters for the authentication gateway port.

#![forbid(unsafe_code)]

mod http_auth_gateway;
mod in_memory_auth_gateway;

pub use http_auth_gateway::HttpAuthGateway;
pub use in_memory_auth_gateway::InMemoryAuthGateway;
