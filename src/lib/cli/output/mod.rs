pub mod arguments;
pub mod executors;
