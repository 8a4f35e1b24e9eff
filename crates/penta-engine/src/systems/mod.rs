pub mod animator;
pub mod field;
