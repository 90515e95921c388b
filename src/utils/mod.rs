pub mod constants;
pub mod url_utils;

pub use constants::*;
pub use url_utils::{is_absolute_url, resolve_url};
