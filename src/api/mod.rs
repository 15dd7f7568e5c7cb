//! HTTP API: the batch-shortening endpoint, the stats listing and health checks

pub mod services;
