pub mod bundle;
pub mod filters;
pub mod listing;
pub mod panels;
pub mod rank;
pub mod selections;

pub use panels::{build_dashboard, Dashboard, Panel};
pub use selections::{CapacityOptions, Selections};
