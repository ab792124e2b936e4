pub mod memory;
pub mod redis;
pub mod store;
#[cfg(test)]
pub mod testing;
