/// Match record persistence contract and backends.
pub mod match_store;
/// Persisted model definitions.
pub mod models;
/// Storage error types shared by every backend.
pub mod storage;
