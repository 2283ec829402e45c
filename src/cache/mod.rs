//! In-memory response cache with background expiry
//!
//! This module provides a thread-safe cache of raw response bodies keyed by
//! request URL. Entries are swept by a background reaper task once per TTL
//! interval, so an entry lives at least one TTL and at most roughly two before
//! it disappears. Reads never check expiry themselves.

mod reaper;
mod ttl;

pub use ttl::Cache;
