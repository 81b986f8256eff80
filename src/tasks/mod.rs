//! Background Tasks Module
//!
//! Contains background tasks owned by a cache instance.
//!
//! # Tasks
//! - TTL Sweeper: removes expired cache entries at a fixed interval

mod sweeper;

pub use sweeper::spawn_sweeper_task;
