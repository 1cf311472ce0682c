// Structural equivalence of statement and expression trees.

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;
