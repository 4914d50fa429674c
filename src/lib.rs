//! Listing filters, sorting and page behaviour for the Gallipoli rental site, plus the
//! no-script web surface built on them.

pub mod app;
pub mod config;
pub mod errors;
pub mod listings;
pub mod logging;
pub mod query;
pub mod responses;
pub mod router;
pub mod site;
pub mod templates;
pub mod timer;

pub use app::App;
pub use config::SiteConfig;
pub use errors::{ServerError, StartupError};
pub use listings::{Catalog, Controller};

#[cfg(test)]
mod tests;
