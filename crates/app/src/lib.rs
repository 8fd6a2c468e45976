//! Crust application layer: identity, catalog and cart services over an
//! in-memory transactional store.

pub mod config;
pub mod context;
pub mod domain;
pub mod identity;
pub mod observability;
pub mod store;

#[cfg(test)]
mod test;

pub mod uuids;
