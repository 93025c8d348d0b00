//! Non-SQL repository implementations

mod memory;

pub use memory::InMemoryStorage;
