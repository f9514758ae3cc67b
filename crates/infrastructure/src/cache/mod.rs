mod memory;
mod redis;

pub use memory::MemoryKvCache;
pub use redis::RedisKvCache;
