//! Drop-target selection and move planning for list-view drags.
//!
//! Mirrors `findFirstValidSibling` and the drag handler in
//! `packages/block-editor/src/components/list-view/index.js`. The planners
//! compose the tree rewrites in `ops` and emit the [`MoveTarget`] the
//! external store action consumes.

use crate::ops::{add_child_item_to_tree, add_item_to_tree, find_item, remove_item_from_tree};
use crate::types::{BlockNode, DropPosition, MoveTarget};

/// Scan `positions` away from `current`, in the direction of `velocity`,
/// for the first row that accepts a sibling drop and shares the current
/// row's parent.
///
/// A positive velocity scans forward, anything else scans backward.
/// Returns the index and the matching position, or `None` when the scan
/// walks off the end of the list (or `current` is out of bounds).
pub fn find_first_valid_sibling(
    positions: &[DropPosition],
    current: usize,
    velocity: f64,
) -> Option<(usize, &DropPosition)> {
    let anchor = positions.get(current)?;
    let step: isize = if velocity > 0.0 { 1 } else { -1 };
    let mut index = current as isize + step;
    while index >= 0 && (index as usize) < positions.len() {
        let position = &positions[index as usize];
        if position.drop_sibling && position.parent_id == anchor.parent_id {
            return Some((index as usize, position));
        }
        index += step;
    }
    None
}

/// Plan moving `client_id` next to `target_id` (after it when
/// `insert_after` is `true`).
///
/// Removes the block, reinserts it as a sibling of the target, and returns
/// the rewritten tree with the move descriptor. `None` when the dragged id
/// is absent, when the target is absent or sits inside the dragged
/// subtree, or when both ids are equal.
pub fn move_item_to_sibling(
    tree: &[BlockNode],
    client_id: &str,
    target_id: &str,
    insert_after: bool,
) -> Option<(Vec<BlockNode>, MoveTarget)> {
    if client_id == target_id {
        return None;
    }
    let item = find_item(tree, client_id)?.clone();
    let removed = remove_item_from_tree(tree, client_id);
    let inserted = add_item_to_tree(&removed.tree, target_id, &item, insert_after);
    let target_index = inserted.index?;
    Some((
        inserted.tree,
        MoveTarget {
            client_id: client_id.to_owned(),
            original_parent: removed.parent_id,
            target_parent: inserted.parent_id,
            target_index,
        },
    ))
}

/// Plan moving `client_id` into `container_id` as its first child.
///
/// `None` under the same conditions as [`move_item_to_sibling`].
pub fn move_item_to_container(
    tree: &[BlockNode],
    client_id: &str,
    container_id: &str,
) -> Option<(Vec<BlockNode>, MoveTarget)> {
    if client_id == container_id {
        return None;
    }
    let item = find_item(tree, client_id)?.clone();
    let removed = remove_item_from_tree(tree, client_id);
    // The container must survive the removal, i.e. not sit inside the
    // dragged subtree.
    find_item(&removed.tree, container_id)?;
    let new_tree = add_child_item_to_tree(&removed.tree, container_id, &item);
    Some((
        new_tree,
        MoveTarget {
            client_id: client_id.to_owned(),
            original_parent: removed.parent_id,
            target_parent: Some(container_id.to_owned()),
            target_index: 0,
        },
    ))
}
