//! Equality Validation: cross-record column equality for form payloads
//!
//! The crate provides one validation rule, [`EqualityRule`]. The field under
//! validation holds the primary key of a *reference* record; another field
//! of the same payload holds the primary key of a *target* record. The rule
//! looks both up and fails when a chosen column differs between them.
//!
//! Everything the rule needs from the outside world is a capability trait:
//!
//! - **Records**: [`RecordStore`] looks a record up by primary key
//! - **Labels**: [`Labeler`] resolves column labels and the message template
//! - **Payload**: [`Payload`] is the input flattened into dot paths
//!
//! [`RuleSet`] drives rules over a payload, expanding `items.*.field` keys
//! per row, and [`EqualityValidationProvider`] registers the bundled
//! configuration and translations.
//!
//! # Example
//!
//! ```rust
//! use equality_validation::core::{EntityType, Record};
//! use equality_validation::provider::EqualityValidationProvider;
//! use equality_validation::store::MemoryStore;
//! use equality_validation::validator::RuleSet;
//! use serde_json::json;
//!
//! let products = EntityType::new("App\\Models\\Product");
//! let price_lists = EntityType::new("App\\Models\\PriceList");
//!
//! let mut store = MemoryStore::new();
//! store.insert(&products, Record::new().with("currency", "EUR"));
//! store.insert(&price_lists, Record::new().with("currency", "USD"));
//!
//! let provider = EqualityValidationProvider::new();
//! let mut translator = provider.translator();
//! provider.boot(&mut translator).unwrap();
//!
//! let rules = RuleSet::builder()
//!     .field(
//!         "product_id",
//!         provider
//!             .rule()
//!             .reference(products, "currency")
//!             .target(price_lists, "currency")
//!             .target_attribute("price_list_id")
//!             .store(store)
//!             .labeler(translator)
//!             .build()
//!             .unwrap(),
//!     )
//!     .build();
//!
//! let errors = rules
//!     .errors(&json!({ "product_id": 1, "price_list_id": 1 }))
//!     .unwrap();
//!
//! assert_eq!(
//!     errors.first("product_id"),
//!     Some("The currency of the selected Product must match the currency of the selected PriceList.")
//! );
//! ```

pub mod core;
pub mod provider;
pub mod rules;
pub mod store;
pub mod translation;
pub mod validator;

// Re-export commonly used types
pub use self::core::{EntityType, Payload, Record};
pub use provider::{EqualityConfig, EqualityValidationProvider};
pub use rules::{EqualityRule, FieldContext, Rule, RuleError, Violation};
pub use store::{MemoryStore, RecordStore, StoreError};
pub use translation::{Labeler, Translator};
pub use validator::{RuleSet, ValidationErrors};
