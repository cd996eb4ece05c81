use postman_actions::{
    template_vars, BuildOutcome, CallDescriptor, CatalogConfig, CatalogError, GroupNode,
};
use serde_json::{json, Value};

fn get_request(name: &str, params: Value) -> Value {
    json!({
        "name": name,
        "request": {
            "method": "GET",
            "url": { "query": params },
            "description": format!("Description\n-----------\n+ {name}")
        }
    })
}

fn name_param(required: &str) -> Value {
    json!({
        "key": "name",
        "value": "",
        "description": format!("Required\n{required}\nType\nString\nDescription\nObject name\n")
    })
}

fn action(value: &str) -> Value {
    json!({ "key": "action", "value": value })
}

#[test]
fn three_variants_of_one_action_merge_with_optional_name() {
    let doc = json!({
        "item": [{
            "name": "Objects",
            "item": [
                get_request("list a", json!([action("list_object"), name_param("Yes")])),
                get_request("list b", json!([action("list_object"), name_param("Yes")])),
                get_request("list c", json!([action("list_object"), name_param("No")]))
            ]
        }]
    });

    let vars = template_vars(&doc, &CatalogConfig::default()).unwrap();
    let calls = &vars.sub_classes[0].api_calls;
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].name, "list_object");
    assert_eq!(calls[0].description, vec!["list a"]);
    assert_eq!(calls[0].args.len(), 1);
    assert_eq!(calls[0].args[0].name, "name");
    assert!(!calls[0].args[0].required);
}

#[test]
fn required_everywhere_stays_required_after_merge() {
    let doc = json!({
        "item": [
            get_request("a", json!([action("get_object"), name_param("Yes")])),
            get_request("b", json!([action("get_object"), name_param("Yes")]))
        ]
    });

    let vars = template_vars(&doc, &CatalogConfig::default()).unwrap();
    assert_eq!(vars.api_calls.len(), 1);
    assert!(vars.api_calls[0].args[0].required);
}

#[test]
fn delete_request_fails_but_siblings_survive() {
    let delete = json!({
        "name": "remove",
        "request": {
            "method": "DELETE",
            "url": { "query": [action("delete_object")] }
        }
    });

    let err = CallDescriptor::from_item(&delete, &CatalogConfig::default()).unwrap_err();
    assert_eq!(
        err,
        CatalogError::UnsupportedMethod {
            method: "DELETE".into()
        }
    );

    let doc = json!({
        "item": [{
            "name": "Objects",
            "item": [
                delete,
                get_request("list", json!([action("list_object")])),
                get_request("get", json!([action("get_object")]))
            ]
        }]
    });
    let vars = template_vars(&doc, &CatalogConfig::default()).unwrap();
    let names: Vec<&str> = vars.sub_classes[0]
        .api_calls
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["list_object", "get_object"]);
}

#[test]
fn deprecated_folder_emits_nothing() {
    let doc = json!({
        "item": [{
            "name": "DEPRECATED",
            "item": [
                get_request("a", json!([action("old_a")])),
                get_request("b", json!([action("old_b")])),
                get_request("c", json!([action("old_c")]))
            ]
        }]
    });

    let vars = template_vars(&doc, &CatalogConfig::default()).unwrap();
    assert!(vars.sub_classes.is_empty());
    assert!(vars.api_calls.is_empty());
}

#[test]
fn call_count_equals_distinct_valid_actions() {
    let doc = json!({
        "item": [
            get_request("1", json!([action("b")])),
            get_request("2", json!([action("a")])),
            get_request("3", json!([])),
            get_request("4", json!([action("b")])),
            get_request("5", json!([action("c")]))
        ]
    });

    let root = GroupNode::build(&doc, &CatalogConfig::default()).unwrap();
    let actions: Vec<&str> = root.calls().iter().map(|c| c.action()).collect();
    assert_eq!(actions, vec!["b", "a", "c"]);
}

#[test]
fn missing_action_is_recoverable_outcome() {
    let item = get_request("nothing", json!([{ "key": "vpc_id", "value": "" }]));
    let outcome = CallDescriptor::build(&item, &CatalogConfig::default());
    assert!(matches!(
        outcome,
        BuildOutcome::Skipped(CatalogError::MissingAction { .. })
    ));
}

#[test]
fn indexed_keys_never_required_in_output() {
    let doc = json!({
        "item": [get_request("tags", json!([
            action("set_tags"),
            { "key": "tags[0]", "value": "", "description": "Required\nYes\nType\nList\n" },
            { "key": "tags[1]", "value": "", "description": "Required\nYes\nType\nList\n" }
        ]))]
    });

    let vars = template_vars(&doc, &CatalogConfig::default()).unwrap();
    let args = &vars.api_calls[0].args;
    assert_eq!(args.len(), 2);
    assert!(args.iter().all(|a| !a.required));
    assert_eq!(args[1].identifier, "tags_1");
}

#[test]
fn invalid_document_is_reported() {
    let err = template_vars(&json!([]), &CatalogConfig::default()).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidDocument { .. }));
}
