//! `GroupNode` tree → plain template variables
//!
//! The SDK emitter only sees these serializable values; it never touches the
//! descriptor types.

use serde::Serialize;

use crate::arg::ArgumentDescriptor;
use crate::config::CatalogConfig;
use crate::group::GroupNode;
use crate::reducer::Call;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgVars {
    /// Raw parameter key
    pub name: String,
    /// Key usable as an identifier in generated code
    pub identifier: String,
    /// Target-language type annotation
    #[serde(rename = "type")]
    pub arg_type: String,
    pub description: String,
    pub default: String,
    pub example: String,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallVars {
    pub name: String,
    pub method: String,
    pub description: Vec<String>,
    pub action: String,
    pub args: Vec<ArgVars>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamespaceVars {
    pub name: String,
    pub filename: String,
    pub path: Vec<String>,
    pub arg_types: Vec<String>,
    pub sub_classes: Vec<NamespaceVars>,
    pub api_calls: Vec<CallVars>,
}

/// Top of the emitted catalog: the root's namespaces plus any calls that
/// sit directly under the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogVars {
    pub sub_classes: Vec<NamespaceVars>,
    pub api_calls: Vec<CallVars>,
}

impl ArgVars {
    pub fn from_arg(arg: &ArgumentDescriptor, config: &CatalogConfig) -> Self {
        Self {
            name: arg.key.clone(),
            identifier: arg.identifier(config.connector),
            arg_type: arg.arg_type.annotation().to_string(),
            description: arg.description.clone(),
            default: arg.default_value.clone(),
            example: arg.example.clone(),
            required: arg.required,
        }
    }
}

impl CallVars {
    pub fn from_call(call: &Call, config: &CatalogConfig) -> Self {
        Self {
            name: call.name().to_string(),
            method: call.method().to_string(),
            description: call.description().to_vec(),
            action: call.action().to_string(),
            args: call
                .args()
                .iter()
                .map(|a| ArgVars::from_arg(a, config))
                .collect(),
        }
    }
}

impl NamespaceVars {
    pub fn from_node(node: &GroupNode, config: &CatalogConfig) -> Self {
        Self {
            name: node.display_name().to_string(),
            filename: node.slug().to_string(),
            path: node.path().to_vec(),
            arg_types: node.arg_types().into_iter().map(String::from).collect(),
            sub_classes: node
                .children()
                .iter()
                .map(|c| Self::from_node(c, config))
                .collect(),
            api_calls: call_vars(node, config),
        }
    }
}

impl CatalogVars {
    pub fn from_root(root: &GroupNode, config: &CatalogConfig) -> Self {
        Self {
            sub_classes: root
                .children()
                .iter()
                .map(|c| NamespaceVars::from_node(c, config))
                .collect(),
            api_calls: call_vars(root, config),
        }
    }
}

fn call_vars(node: &GroupNode, config: &CatalogConfig) -> Vec<CallVars> {
    node.calls()
        .iter()
        .map(|c| CallVars::from_call(c, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn doc() -> Value {
        json!({
            "item": [{
                "name": "Gateway Management",
                "item": [
                    {
                        "name": "Peering",
                        "item": [{
                            "name": "create peering",
                            "request": {
                                "method": "POST",
                                "description": "Description\n---\n+ Create a peering",
                                "body": {
                                    "mode": "formdata",
                                    "formdata": [
                                        { "key": "action", "value": "create_peering" },
                                        { "key": "CID", "value": "x" },
                                        {
                                            "key": "gw_name[0]",
                                            "value": "",
                                            "description": "Required\nYes\nType\nArray\nDescription\nGateways\nExample(s)\n\"gw1\"\nDefault Value\n[]\n"
                                        }
                                    ]
                                }
                            }
                        }]
                    },
                    {
                        "name": "list",
                        "request": {
                            "method": "GET",
                            "url": { "query": [
                                { "key": "action", "value": "list_gateways" },
                                { "key": "cloud", "value": "", "description": "Required\nYes\nType\nInteger\n" }
                            ] }
                        }
                    }
                ]
            }]
        })
    }

    fn vars() -> CatalogVars {
        let config = CatalogConfig::default();
        let root = GroupNode::build(&doc(), &config).unwrap();
        CatalogVars::from_root(&root, &config)
    }

    #[test]
    fn namespace_tree_mirrors_folders() {
        let vars = vars();
        assert!(vars.api_calls.is_empty());
        assert_eq!(vars.sub_classes.len(), 1);

        let gw = &vars.sub_classes[0];
        assert_eq!(gw.name, "GatewayManagement");
        assert_eq!(gw.filename, "gateway_management");
        assert_eq!(gw.path, vec!["gateway_management"]);
        assert!(gw.arg_types.is_empty());
        assert_eq!(gw.api_calls.len(), 1);
        assert_eq!(gw.api_calls[0].name, "list_gateways");

        let peering = &gw.sub_classes[0];
        assert_eq!(peering.path, vec!["gateway_management", "peering"]);
        assert_eq!(peering.arg_types, vec!["Any", "List"]);
        assert!(peering.sub_classes.is_empty());
    }

    #[test]
    fn call_and_arg_vars() {
        let vars = vars();
        let call = &vars.sub_classes[0].sub_classes[0].api_calls[0];
        assert_eq!(call.method, "POST");
        assert_eq!(call.action, "create_peering");
        assert_eq!(call.description, vec!["Create a peering"]);

        let arg = &call.args[0];
        assert_eq!(arg.name, "gw_name[0]");
        assert_eq!(arg.identifier, "gw_name_0");
        assert_eq!(arg.arg_type, "List[Any]");
        assert_eq!(arg.description, "Gateways");
        assert_eq!(arg.example, "gw1");
        assert_eq!(arg.default, "[]");
        assert!(!arg.required);

        let cloud = &vars.sub_classes[0].api_calls[0].args[0];
        assert_eq!(cloud.arg_type, "int");
        assert!(cloud.required);
    }

    #[test]
    fn serializes_with_emitter_field_names() {
        let value = serde_json::to_value(vars()).unwrap();
        let arg = &value["sub_classes"][0]["api_calls"][0]["args"][0];
        assert_eq!(arg["type"], "int");
        assert_eq!(arg["name"], "cloud");
        assert_eq!(arg["required"], true);
        assert_eq!(value["sub_classes"][0]["filename"], "gateway_management");
        assert!(value["sub_classes"][0]["sub_classes"].is_array());
    }
}
