pub mod error;
pub mod students;
