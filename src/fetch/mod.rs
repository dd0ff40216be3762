//! Version lookup
//!
//! - [`VersionFetcher`] turns a validated request into a [`FetchResult`]
//! - [`select_app`] lets a user pick the app to look up

pub mod fetcher;
pub mod selection;

pub use fetcher::{FetchResult, VersionFetcher};
pub use selection::{rank_apps, select_app, DialoguerInput, UserInput};
