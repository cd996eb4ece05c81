//! Postman folder tree → `GroupNode` tree
//!
//! Built in two phases: `RawGroup` mirrors the folders and collects the calls
//! found directly in each one; `GroupNode::reduce` then runs the action
//! reduction over every node's local call list.

use std::collections::BTreeSet;
use std::fmt;

use serde_json::Value;
use tracing::{debug, error, warn};

use crate::call::{BuildOutcome, CallDescriptor};
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::reducer::{reduce_calls, Call};

/// A folder as read from the export, before reduction.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct RawGroup {
    pub display_name: String,
    pub slug: String,
    pub path: Vec<String>,
    pub children: Vec<RawGroup>,
    pub calls: Vec<CallDescriptor>,
}

impl RawGroup {
    /// Read the whole document (`{ "item": [...] }`) into a raw tree.
    pub fn root(doc: &Value, config: &CatalogConfig) -> Result<Self, CatalogError> {
        let items = doc
            .get("item")
            .and_then(|v| v.as_array())
            .ok_or_else(|| CatalogError::InvalidDocument {
                reason: "top-level 'item' array is missing".into(),
            })?;

        let (children, calls) = collect_items(items, &[], config);
        Ok(Self {
            display_name: config.root_name.clone(),
            slug: slugify(&config.root_name, config.connector),
            path: Vec::new(),
            children,
            calls,
        })
    }

    fn folder(name: &str, items: &[Value], parent_path: &[String], config: &CatalogConfig) -> Self {
        let slug = slugify(name, config.connector);
        let mut path = parent_path.to_vec();
        path.push(slug.clone());

        debug!(folder = name, depth = path.len(), "descending into folder");
        let (children, calls) = collect_items(items, &path, config);
        Self {
            display_name: display_name(name),
            slug,
            path,
            children,
            calls,
        }
    }
}

/// Visit one folder's entries; bad entries are logged and skipped.
fn collect_items(
    items: &[Value],
    path: &[String],
    config: &CatalogConfig,
) -> (Vec<RawGroup>, Vec<CallDescriptor>) {
    let mut children = Vec::new();
    let mut calls = Vec::new();

    for item in items {
        if !item.is_object() {
            warn!(?path, "skipping non-object entry");
            continue;
        }
        let name = item.get("name").and_then(|v| v.as_str()).unwrap_or("");

        if let Some(nested) = item
            .get("item")
            .and_then(|v| v.as_array())
            .filter(|a| !a.is_empty())
        {
            if name == config.skip_folder {
                debug!(folder = name, "skipping folder");
            } else {
                children.push(RawGroup::folder(name, nested, path, config));
            }
        }

        if item.get("request").is_some() {
            match CallDescriptor::build(item, config) {
                BuildOutcome::Built(call) => calls.push(call),
                BuildOutcome::Skipped(e) => warn!(request = name, "skipping request: {e}"),
                BuildOutcome::Fatal(e) => error!(request = name, "dropping request: {e}"),
            }
        }
    }

    (children, calls)
}

/// A namespace in the emitted catalog.
///
/// Immutable once built; the tree owns its children and calls exclusively.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupNode {
    display_name: String,
    slug: String,
    path: Vec<String>,
    children: Vec<GroupNode>,
    calls: Vec<Call>,
}

impl GroupNode {
    /// Build and reduce the whole tree from an export document.
    pub fn build(doc: &Value, config: &CatalogConfig) -> Result<Self, CatalogError> {
        RawGroup::root(doc, config).map(Self::reduce)
    }

    /// Reduce every node's local calls; children are reduced independently.
    pub fn reduce(raw: RawGroup) -> Self {
        Self {
            display_name: raw.display_name,
            slug: raw.slug,
            path: raw.path,
            children: raw.children.into_iter().map(Self::reduce).collect(),
            calls: reduce_calls(raw.calls),
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Lowercase identifier used for the namespace's file name.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Slugs from the root (exclusive) down to this node.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn children(&self) -> &[GroupNode] {
        &self.children
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Sorted, de-duplicated import names needed by this node's calls.
    pub fn arg_types(&self) -> Vec<&'static str> {
        self.calls
            .iter()
            .flat_map(|c| c.import_types())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Depth-first search for a descendant (or self) by slug path.
    pub fn find(&self, path: &[&str]) -> Option<&GroupNode> {
        match path.split_first() {
            None => Some(self),
            Some((head, rest)) => self
                .children
                .iter()
                .find(|c| c.slug == *head)
                .and_then(|c| c.find(rest)),
        }
    }
}

impl fmt::Display for GroupNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Group: {} Children: {} Calls: {}",
            self.display_name,
            self.children.len(),
            self.calls.len()
        )
    }
}

/// Title-case each word, then keep alphanumerics only: `"vpc peering"` → `"VpcPeering"`.
pub fn display_name(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut prev_cased = false;
    for c in name.chars() {
        if c.is_alphabetic() {
            if prev_cased {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            prev_cased = true;
        } else {
            prev_cased = false;
            if c.is_alphanumeric() {
                result.push(c);
            }
        }
    }
    result
}

pub fn slugify(name: &str, connector: char) -> String {
    let mut result = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_alphanumeric() {
            result.extend(c.to_lowercase());
        } else if !result.is_empty() && !result.ends_with(connector) {
            result.push(connector);
        }
    }
    while result.ends_with(connector) {
        result.pop();
    }
    result
}
