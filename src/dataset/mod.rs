pub mod loader;
pub mod normalize;
pub mod sample;
pub mod table;

pub use loader::{DataSource, Dataset, DatasetCache, LoadError};
pub use normalize::ensure_columns;
pub use table::{Cell, Record, Table};
