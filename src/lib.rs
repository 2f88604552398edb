//! Hourly click analytics: synthetic click seeding, 24 hour bucketed counts
//! per page and a small dashboard charting them.

pub mod argument_parsing;
pub mod buckets;
pub mod click_data;
pub mod database;
pub mod error;
pub mod models;
mod postgres_queries;
pub mod reshape;
pub mod routes;
pub mod seed;
mod shared_queries;
mod sqlite_queries;
pub mod store;
