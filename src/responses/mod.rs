pub mod errors;
pub mod html;
pub mod redirect;

pub use crate::errors::ResultResp;
pub use errors::html_error_response;
pub use html::html_response;
pub use redirect::{redirect, redirect_with_cookie};
