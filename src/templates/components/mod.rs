pub mod card;
pub mod error;
pub mod filterbar;
pub mod hero;
pub mod request_form;

pub use card::property_card;
pub use error::html_error_response;
pub use filterbar::filterbar;
pub use hero::hero;
pub use request_form::request_form;
