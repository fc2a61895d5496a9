pub mod announcement;
pub mod error;
pub mod quiz;
