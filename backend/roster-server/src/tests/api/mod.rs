mod error;
mod students;
