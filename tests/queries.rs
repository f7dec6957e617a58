//! End-to-end console queries against the fixture snapshot.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use construct_lens::context::ServiceContext;
use construct_lens::error::QueryError;
use construct_lens::queries::Console;
use construct_lens::view::ExplorerItem;

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/app.yaml")
}

fn collect_ids(item: &ExplorerItem, out: &mut Vec<String>) {
    out.push(item.id.clone());
    for child in item.child_items.iter().flatten() {
        collect_ids(child, out);
    }
}

#[test]
fn hidden_nodes_never_appear_in_any_projection() {
    let ctx = ServiceContext::open(&fixture()).unwrap();
    let console = Console::new(&ctx);

    let mut ids = Vec::new();
    collect_ids(&console.explorer_tree().unwrap(), &mut ids);
    assert!(!ids.iter().any(|id| id == "root/Default/Logger"));
    assert!(ids.iter().any(|id| id == "root/Default/Handler/Code"));

    let map = serde_json::to_string(&console.map().unwrap().nodes).unwrap();
    assert!(!map.contains("root/Default/Logger"));

    for rel in console.child_relationships(Some("root/Default")).unwrap() {
        assert_ne!(rel.node.summary.path, "root/Default/Logger");
        for connected in rel.inbound.iter().chain(&rel.outbound) {
            assert_ne!(connected.node.path, "root/Default/Logger");
        }
    }

    let meta = console.node_metadata(Some("root/Default/Handler")).unwrap();
    let outbound: Vec<&str> = meta.outbound.iter().map(|c| c.node.path.as_str()).collect();
    assert_eq!(outbound, ["root/Default/Bucket"]);
}

#[test]
fn map_edges_are_unique_and_follow_inbound_records() {
    let ctx = ServiceContext::open(&fixture()).unwrap();
    let edges = Console::new(&ctx).map().unwrap().edges;

    let ids: Vec<&str> = edges.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(
        ids,
        ["root/Default/Api -> root/Default/Handler", "root/Default/Handler -> root/Default/Bucket"]
    );
    let unique: HashSet<&str> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn metadata_keeps_first_of_duplicate_connections() {
    let ctx = ServiceContext::open(&fixture()).unwrap();
    let meta = Console::new(&ctx).node_metadata(Some("root/Default/Api")).unwrap();

    assert_eq!(meta.node.summary.resource_type, "@winglang/sdk.cloud.Api");
    assert_eq!(meta.node.props, Some(serde_json::json!({"cors": false})));
    assert_eq!(meta.outbound.len(), 1);
    assert_eq!(meta.outbound[0].relationship, "OnRequest");
    assert_eq!(meta.outbound[0].node.resource_type, "@winglang/sdk.cloud.Function");
}

#[test]
fn breadcrumbs_walk_from_root() {
    let ctx = ServiceContext::open(&fixture()).unwrap();
    let crumbs = Console::new(&ctx).breadcrumbs(Some("root/Default/Handler/Code")).unwrap();

    let paths: Vec<&str> = crumbs.iter().map(|c| c.path.as_str()).collect();
    assert_eq!(paths, ["root", "root/Default", "root/Default/Handler"]);
    assert_eq!(crumbs[1].resource_type, "constructs.Construct");
}

#[test]
fn node_detail_resolves_or_reports_not_found() {
    let ctx = ServiceContext::open(&fixture()).unwrap();
    let console = Console::new(&ctx);

    let root = console.node_detail(Some("root")).unwrap();
    assert_eq!(root.resource_type, "constructs.Construct");

    let bucket = console.node_detail(Some("root/Default/Bucket")).unwrap();
    assert_eq!(bucket.resource_type, "@winglang/sdk.cloud.Bucket");
    assert!(bucket.attributes.is_none());

    let err = console.node_detail(Some("nonexistent")).unwrap_err();
    assert!(matches!(err, QueryError::NotFound { .. }));
}

#[test]
fn explorer_output_matches_console_wire_shape() {
    let ctx = ServiceContext::open(&fixture()).unwrap();
    let value = serde_json::to_value(Console::new(&ctx).explorer_tree().unwrap()).unwrap();

    let default = &value["childItems"][0];
    assert_eq!(default["id"], "root/Default");
    assert_eq!(default["label"], "Default");
    let children: Vec<&str> = default["childItems"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["label"].as_str().unwrap())
        .collect();
    assert_eq!(children, ["Api", "Handler", "Bucket"]);
}
