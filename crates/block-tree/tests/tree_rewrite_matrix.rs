//! Drag-and-drop move planning over a realistic document tree.

use block_kit_tree::{
    count_items, find_item, move_item_to_container, move_item_to_sibling, BlockNode, MoveTarget,
};
use serde_json::json;

/// A small post: two top-level paragraphs around a group with a nested
/// columns block.
///
/// para-1
/// group-1
/// ├── col-1
/// │   ├── para-2
/// │   └── para-3
/// └── para-4
/// para-5
fn document() -> Vec<BlockNode> {
    let tree_json = json!([
        { "clientId": "para-1", "innerBlocks": [], "name": "core/paragraph" },
        {
            "clientId": "group-1",
            "name": "core/group",
            "innerBlocks": [
                {
                    "clientId": "col-1",
                    "name": "core/column",
                    "innerBlocks": [
                        { "clientId": "para-2", "innerBlocks": [], "name": "core/paragraph" },
                        { "clientId": "para-3", "innerBlocks": [], "name": "core/paragraph" },
                    ],
                },
                { "clientId": "para-4", "innerBlocks": [], "name": "core/paragraph" },
            ],
        },
        { "clientId": "para-5", "innerBlocks": [], "name": "core/paragraph" },
    ]);
    serde_json::from_value(tree_json).unwrap()
}

#[test]
fn sibling_move_within_one_parent() {
    let tree = document();
    let (new_tree, target) = move_item_to_sibling(&tree, "para-2", "para-3", true).unwrap();

    assert_eq!(
        target,
        MoveTarget {
            client_id: "para-2".into(),
            original_parent: Some("col-1".into()),
            target_parent: Some("col-1".into()),
            target_index: 1,
        }
    );
    let col = find_item(&new_tree, "col-1").unwrap();
    let ids: Vec<&str> = col.inner_blocks.iter().map(|b| b.client_id.as_str()).collect();
    assert_eq!(ids, ["para-3", "para-2"]);
    assert_eq!(count_items(&new_tree), count_items(&tree));
}

#[test]
fn sibling_move_across_parents() {
    let tree = document();
    let (new_tree, target) = move_item_to_sibling(&tree, "para-5", "para-2", false).unwrap();

    assert_eq!(target.original_parent, None);
    assert_eq!(target.target_parent.as_deref(), Some("col-1"));
    assert_eq!(target.target_index, 0);
    assert_eq!(count_items(&new_tree), count_items(&tree));
    // para-5 left the root level.
    assert_eq!(new_tree.len(), 2);
}

#[test]
fn subtree_moves_with_its_children() {
    let tree = document();
    let (new_tree, target) = move_item_to_sibling(&tree, "group-1", "para-5", true).unwrap();

    assert_eq!(target.original_parent, None);
    assert_eq!(target.target_parent, None);
    assert_eq!(target.target_index, 2);
    let group = find_item(&new_tree, "group-1").unwrap();
    assert_eq!(group.count(), 5);
    assert_eq!(count_items(&new_tree), count_items(&tree));
}

#[test]
fn container_move_prepends() {
    let tree = document();
    let (new_tree, target) = move_item_to_container(&tree, "para-1", "group-1").unwrap();

    assert_eq!(
        target,
        MoveTarget {
            client_id: "para-1".into(),
            original_parent: None,
            target_parent: Some("group-1".into()),
            target_index: 0,
        }
    );
    let group = find_item(&new_tree, "group-1").unwrap();
    assert_eq!(group.inner_blocks[0].client_id, "para-1");
    assert_eq!(count_items(&new_tree), count_items(&tree));
}

#[test]
fn moving_into_the_dragged_subtree_is_rejected() {
    let tree = document();
    assert!(move_item_to_sibling(&tree, "group-1", "para-2", true).is_none());
    assert!(move_item_to_container(&tree, "group-1", "col-1").is_none());
}

#[test]
fn absent_ids_produce_no_plan() {
    let tree = document();
    assert!(move_item_to_sibling(&tree, "missing", "para-1", true).is_none());
    assert!(move_item_to_sibling(&tree, "para-1", "missing", true).is_none());
    assert!(move_item_to_container(&tree, "para-1", "missing").is_none());
    assert!(move_item_to_sibling(&tree, "para-1", "para-1", true).is_none());
}

#[test]
fn planning_never_mutates_the_input() {
    let tree = document();
    let snapshot = tree.clone();
    let _ = move_item_to_sibling(&tree, "para-2", "para-5", true);
    let _ = move_item_to_container(&tree, "para-5", "col-1");
    assert_eq!(tree, snapshot);
}
