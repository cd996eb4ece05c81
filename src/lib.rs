//! Reduce a Postman API documentation export into an action catalog.
//!
//! Walks the export's folder tree, recovers argument metadata from the
//! free-text parameter descriptions, merges request items that share an
//! action, and flattens the result into plain template variables for an SDK
//! emitter.
//!
//! # Usage
//!
//! ```
//! use postman_actions::{CatalogConfig, CatalogVars, GroupNode};
//!
//! let export = serde_json::json!({
//!     "item": [{
//!         "name": "Accounts",
//!         "item": [{
//!             "name": "list accounts",
//!             "request": {
//!                 "method": "GET",
//!                 "url": { "query": [{ "key": "action", "value": "list_accounts" }] }
//!             }
//!         }]
//!     }]
//! });
//!
//! let config = CatalogConfig::default();
//! let root = GroupNode::build(&export, &config).unwrap();
//! let vars = CatalogVars::from_root(&root, &config);
//! assert_eq!(vars.sub_classes[0].api_calls[0].name, "list_accounts");
//! ```

pub mod arg;
pub mod call;
pub mod config;
pub mod error;
pub mod extract;
pub mod group;
pub mod reducer;
pub mod template;

pub use arg::{ArgType, ArgumentDescriptor};
pub use call::{BuildOutcome, CallDescriptor, Method};
pub use config::CatalogConfig;
pub use error::CatalogError;
pub use extract::{extract_field, ExtractedFields, Field};
pub use group::{GroupNode, RawGroup};
pub use reducer::{reduce_calls, ArgumentReducer, Call, ReducedCall};
pub use template::{ArgVars, CallVars, CatalogVars, NamespaceVars};

/// Build the catalog for `doc` and flatten it into template variables.
pub fn template_vars(
    doc: &serde_json::Value,
    config: &CatalogConfig,
) -> Result<CatalogVars, CatalogError> {
    let root = GroupNode::build(doc, config)?;
    Ok(CatalogVars::from_root(&root, config))
}
