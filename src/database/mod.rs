pub mod collection;
pub mod connection;
pub mod memory;
pub mod postgres;
