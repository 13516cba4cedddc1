//! Status store providers

pub mod memory;
pub mod redis;

pub use self::memory::InMemoryStatusStore;
pub use self::redis::RedisStatusStore;
