pub mod identity;
pub mod sessions;

pub use identity::{Provider, Traveler};
pub use sessions::SessionStore;
