pub mod clickthrough;
pub mod request_form;
pub mod reveal;
pub mod slider;
pub mod whatsapp;

pub use request_form::RequestForm;
pub use whatsapp::WhatsAppLinks;
