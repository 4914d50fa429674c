pub mod card;
pub mod collation;
pub mod controller;
pub mod filter;
pub mod presenter;
pub mod sort;

mod catalog;

pub use card::{extract_cards, ListingCard};
pub use catalog::{Catalog, CatalogError};
pub use controller::{Controller, Effect, PageHooks, RangeOption};
pub use filter::{matches, FilterState, GuestRange};
pub use presenter::{render_meta, Presenter};
pub use sort::{sort_cards, SortMode};
