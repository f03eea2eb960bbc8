use apitree_core::parse::{self, ApiDocument};
use apitree_core::tree::{ExportNode, build_path_tree, split_path};

const PETSTORE: &str = include_str!("fixtures/petstore-tagged.yaml");
const ORDERS: &str = include_str!("fixtures/orders.json");

fn http_endpoints(doc: &ApiDocument) -> Vec<(String, String)> {
    doc.operations()
        .into_iter()
        .filter_map(|op| op.http_method().map(|m| (op.path.to_string(), m.to_string())))
        .collect()
}

#[test]
fn every_endpoint_lands_on_its_node() {
    for doc in [
        parse::from_yaml(PETSTORE).unwrap(),
        parse::from_json(ORDERS).unwrap(),
    ] {
        let tree = build_path_tree(&doc);
        for (path, method) in http_endpoints(&doc) {
            let segments = split_path(&path);
            let node = tree
                .find(&segments)
                .unwrap_or_else(|| panic!("no node for {path}"));
            assert!(node.methods().contains(&method), "{method} missing at {path}");
            if let Some(last) = segments.last() {
                assert_eq!(node.name(), *last);
            }
        }
    }
}

#[test]
fn reparsed_export_has_same_leaves() {
    let doc = parse::from_yaml(PETSTORE).unwrap();
    let tree = build_path_tree(&doc);
    let export = tree.to_export_tree();

    let json = serde_json::to_string_pretty(&export).unwrap();
    let back: ExportNode = serde_json::from_str(&json).unwrap();

    assert_eq!(back, export);
    assert_eq!(
        back.leaf_labels(),
        vec![
            "/{id} [DELETE, GET]",
            "/{id} [GET]",
            "/create_order [POST]",
            "/create_order_item [POST]",
            "/cancel_order [POST]",
            "/health [GET]",
        ]
    );
}

#[test]
fn outline_of_petstore() {
    let doc = parse::from_yaml(PETSTORE).unwrap();
    let tree = build_path_tree(&doc);

    insta::assert_snapshot!(tree.render(), @r"
    / [GET]
      /health [GET]
      /owners
        /{id} [GET]
      /pets [GET, POST]
        /{id} [DELETE, GET]
      /store
        /cancel_order [POST]
        /create_order [POST]
        /create_order_item [POST]
    ");
}

#[test]
fn empty_paths_export() {
    let doc = parse::from_json(r#"{"paths": {}}"#).unwrap();
    let export = build_path_tree(&doc).to_export_tree();
    assert_eq!(
        serde_json::to_value(&export).unwrap(),
        serde_json::json!({"name": "/", "children": null})
    );
}
