// catalog_ingest/src/lib.rs

//! Product ingestion service: accepts `POST /` product submissions, validates
//! them and writes accepted ones to PostgreSQL.

pub mod bootstrap;
pub mod config;
pub mod errors;
pub mod models;
pub mod pipelines;
pub mod state;
pub mod store;
pub mod telemetry;
pub mod validation;
pub mod web;
