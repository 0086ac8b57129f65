pub mod bundle;
pub mod card;
pub mod hero;
pub mod search_form;
pub mod sign_in;

pub use bundle::bundle_grid;
pub use card::{empty_notice, listing_grid, panel, CardDetail};
pub use hero::hero;
pub use search_form::search_form;
pub use sign_in::sign_in_form;
