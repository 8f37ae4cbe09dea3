//! Networking modules for the GraphQL data layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! `graphql` is the HTTP transport and response envelope, `queries` holds
//! the operation documents, `types` defines the entity DTOs, and `api`
//! exposes one async function per operation.

pub mod api;
pub mod graphql;
pub mod queries;
pub mod types;
