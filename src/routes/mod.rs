pub mod api;
pub mod openapi;
