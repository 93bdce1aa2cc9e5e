//! Shoe listing records for the card presenter.
//!
//! This crate provides the data side of a shoe card:
//!
//! - **Records**: [`ShoeRecord`], the immutable input to one card render
//! - **Money**: minor-unit amounts with a [`Currency`]
//! - **Ingestion**: [`RawShoe`] and [`parse_listing`] for loosely-typed JSON feeds
//!
//! # Example
//!
//! ```rust
//! use shoe_catalog::{parse_listing, Currency};
//!
//! let feed = r#"[{
//!     "slug": "tree-runner",
//!     "name": "Tree Runner",
//!     "imageSrc": "/assets/tree-runner.jpg",
//!     "price": 9800,
//!     "salePrice": null,
//!     "releaseDate": 1617408000000,
//!     "numOfColors": 3
//! }]"#;
//!
//! let records = parse_listing(feed, Currency::USD).unwrap();
//! let shoe = records[0].as_ref().unwrap();
//! assert_eq!(shoe.price.display(), "$98.00");
//! assert!(shoe.sale_price.is_none());
//! ```

pub mod error;
pub mod money;
pub mod raw;
pub mod shoe;
pub mod slug;

pub use error::CatalogError;
pub use money::{Currency, Money};
pub use raw::{parse_listing, RawShoe};
pub use shoe::ShoeRecord;
pub use slug::Slug;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::money::{Currency, Money};
    pub use crate::raw::{parse_listing, RawShoe};
    pub use crate::shoe::ShoeRecord;
    pub use crate::slug::Slug;
}
