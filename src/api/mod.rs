// JSON-lines TCP front end.

pub mod dto;
pub mod server;
