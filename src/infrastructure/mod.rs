pub mod bank;
pub mod in_memory;
