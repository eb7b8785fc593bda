//! Mapping Store implementations.
//!
//! - [`RedisMappingStore`] - Production Redis-backed store
//! - [`MemoryMappingStore`] - In-process store for development and tests

mod memory_mapping_store;
mod redis_mapping_store;

pub use memory_mapping_store::MemoryMappingStore;
pub use redis_mapping_store::RedisMappingStore;
