//! Short-lived response caching.
//!
//! This module provides an in-memory memo with TTL-based invalidation,
//! used to avoid repeating identical remote lookups within one session.

pub mod entry;
pub mod memo;

pub use entry::CacheEntry;
pub use memo::MemoCache;

/// Default TTL for memoized remote responses.
pub const DEFAULT_TTL_SECONDS: u64 = 300;
