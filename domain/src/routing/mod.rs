//! Routing domain module
//!
//! Pure logic for deciding which tool group should answer a free-text
//! request.
//!
//! ```text
//! query ──▶ DomainClassifier ──▶ Domain ──▶ GroupMap ──▶ group name
//!            (overrides, then        (many-to-one)
//!             keyword scores)
//! ```
//!
//! # Key Types
//!
//! - [`Domain`]: logical intent category
//! - [`KeywordTable`] / [`OverrideRule`]: static classification data
//! - [`DomainClassifier`]: total `query -> Domain` function
//! - [`GroupMap`]: domain to physical tool group
//!
//! Loading and caching groups is an application concern; see the
//! `RouteQueryUseCase` in `catc-application`.

pub mod classifier;
pub mod domain;
pub mod group_map;
pub mod keywords;
pub mod matching;

pub use classifier::{
    Classification, ClassificationReason, DEFAULT_DOMAIN, DomainClassifier, DomainScore,
};
pub use domain::Domain;
pub use group_map::{GroupMap, groups};
pub use keywords::{DomainKeywords, KeywordTable, OverrideRule};
