// catalog_ingest/src/models/mod.rs

//! Data structures exchanged with clients and the backing store.

pub mod product;

pub use product::Product;
