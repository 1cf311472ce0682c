// Infrastructure adapters: fixture loading, symbol tables, exporters, runtime setup.

pub mod concurrency;
pub mod exporters;
pub mod fixture_loader;
pub mod logging;
pub mod symbol_table;

pub use exporters::{JsonExporter, TextExporter};
pub use fixture_loader::{Fixture, FixtureLoader, LoadError};
pub use symbol_table::{SymbolInfo, SymbolTable};
