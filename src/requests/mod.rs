pub mod announcement;
pub mod quiz;
