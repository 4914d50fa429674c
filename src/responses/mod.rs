pub mod errors;
pub mod html;
pub mod json;
pub mod redirect;

pub use errors::ResultResp;

// Normal HTML response
pub use html::{html_response, html_with_status};
pub use json::json_response;
pub use redirect::see_other;
