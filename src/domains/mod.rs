//! Domains module containing business logic organized by bounded contexts.
//!
//! Each subdomain represents a specific area of functionality within the
//! server. Only the tools domain exists today.

pub mod tools;
