//! Postman request item → `CallDescriptor`
//!
//! A request item carries its parameters either in the URL query (GET) or in
//! the form body (POST). One of those parameters names the action; the rest
//! become the call's arguments.

use std::fmt;
use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::Regex;
use serde_json::Value;

use crate::arg::{description_text, ArgumentDescriptor};
use crate::config::CatalogConfig;
use crate::error::CatalogError;

static DESCRIPTION_BANNER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Description\n-*\n*\+?").expect("description banner regex is valid")
});

/// HTTP method of a request item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Other(String),
}

impl Method {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "GET" => Self::Get,
            "POST" => Self::Post,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of turning one request item into a call.
///
/// `Skipped` is the expected outcome for entries without an action and is
/// recoverable by whoever is collecting calls. `Fatal` means the entry itself
/// is unusable (e.g. unsupported method).
#[derive(Debug, Clone, PartialEq)]
pub enum BuildOutcome {
    Built(CallDescriptor),
    Skipped(CatalogError),
    Fatal(CatalogError),
}

impl BuildOutcome {
    pub fn into_result(self) -> Result<CallDescriptor, CatalogError> {
        match self {
            Self::Built(call) => Ok(call),
            Self::Skipped(err) | Self::Fatal(err) => Err(err),
        }
    }
}

/// One HTTP request definition.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct CallDescriptor {
    /// Postman item name, kept for diagnostics
    pub item_name: String,
    pub method: Method,
    /// Value of the action parameter (e.g. "list_vpcs")
    pub action: String,
    /// `action` with separators replaced by the connector
    pub name: String,
    /// Request description split into bullet segments
    pub description: Vec<String>,
    /// Arguments in first-seen order, unique by key
    pub args: IndexSet<ArgumentDescriptor>,
}

impl CallDescriptor {
    /// Build a call from a Postman item that has a `request`.
    pub fn build(item: &Value, config: &CatalogConfig) -> BuildOutcome {
        let item_name = item
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string();

        let request = match item.get("request").filter(|r| r.is_object()) {
            Some(r) => r,
            None => {
                return BuildOutcome::Fatal(CatalogError::InvalidDocument {
                    reason: format!("item '{item_name}' has no request object"),
                })
            }
        };

        let method = Method::parse(
            request
                .get("method")
                .and_then(|v| v.as_str())
                .unwrap_or(""),
        );

        let params = match request_params(request, &method) {
            Ok(p) => p,
            Err(e) => return BuildOutcome::Fatal(e),
        };

        let mut action = None;
        let mut args = IndexSet::new();
        for param in params {
            let Some(arg) = ArgumentDescriptor::from_param(param) else {
                continue;
            };
            if arg.key == config.session_key {
                continue;
            }
            if arg.key == config.action_key {
                action = Some(arg.value);
                continue;
            }
            // IndexSet keeps the first occurrence of a key
            args.insert(arg);
        }

        let action = match action.filter(|a| !a.is_empty()) {
            Some(a) => a,
            None => return BuildOutcome::Skipped(CatalogError::MissingAction { name: item_name }),
        };

        let description = split_description(
            &request
                .get("description")
                .map(description_text)
                .unwrap_or_default(),
        );

        BuildOutcome::Built(Self {
            item_name,
            method,
            name: normalize_action(&action, config.connector),
            action,
            description,
            args,
        })
    }

    /// Build a standalone call; a missing action is an error here.
    pub fn from_item(item: &Value, config: &CatalogConfig) -> Result<Self, CatalogError> {
        Self::build(item, config).into_result()
    }

    /// Import names needed by this call's argument annotations.
    pub fn import_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.args.iter().flat_map(|a| a.arg_type.imports().iter().copied())
    }
}

impl fmt::Display for CallDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Call: {}", self.name)
    }
}

/// Select the parameter list for the request's method.
fn request_params<'a>(request: &'a Value, method: &Method) -> Result<&'a [Value], CatalogError> {
    let list = match method {
        Method::Get => request.pointer("/url/query"),
        Method::Post => {
            let body = request.get("body");
            body.and_then(|b| b.get("mode"))
                .and_then(|m| m.as_str())
                .and_then(|mode| body.and_then(|b| b.get(mode)))
        }
        Method::Other(m) => {
            return Err(CatalogError::UnsupportedMethod { method: m.clone() });
        }
    };
    Ok(list
        .and_then(|v| v.as_array())
        .map(Vec::as_slice)
        .unwrap_or(&[]))
}

/// Strip the "Description" banner and split on `+ ` bullets.
pub fn split_description(text: &str) -> Vec<String> {
    let text = text.replace("\r\n", "\n");
    let stripped = DESCRIPTION_BANNER_RE.replace_all(&text, "");
    stripped.split("+ ").map(|s| s.trim().to_string()).collect()
}

pub fn normalize_action(action: &str, connector: char) -> String {
    action
        .chars()
        .map(|c| match c {
            '.' | '-' | '/' | ' ' => connector,
            c => c,
        })
        .collect()
}
