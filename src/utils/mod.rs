pub mod helpers;
pub mod time;
