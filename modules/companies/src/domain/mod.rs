pub mod error;
pub mod filter;
pub mod join;
pub mod model;
pub mod pagination;
pub mod repo;
pub mod service;
