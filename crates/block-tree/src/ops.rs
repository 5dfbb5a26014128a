//! Structural rewrite operations on the block tree.
//!
//! Mirrors `removeItemFromTree`, `addItemToTree`, and `addChildItemToTree`
//! in `packages/block-editor/src/components/list-view/utils.js`, with one
//! deliberate difference: all three operations are uniformly immutable.
//! Every node on the path from the root to the edit point is rebuilt, so a
//! caller holding the input tree never observes the change.
//!
//! Traversal is pre-order; client ids are unique by construction, so the
//! first match is the only match.

use crate::types::{BlockNode, InsertResult, RemoveResult};

/// Total number of nodes in the tree.
pub fn count_items(tree: &[BlockNode]) -> usize {
    tree.iter().map(BlockNode::count).sum()
}

/// Find the node with `client_id == id`, pre-order.
pub fn find_item<'a>(tree: &'a [BlockNode], id: &str) -> Option<&'a BlockNode> {
    for block in tree {
        if block.client_id == id {
            return Some(block);
        }
        if let Some(found) = find_item(&block.inner_blocks, id) {
            return Some(found);
        }
    }
    None
}

/// Remove the node with `client_id == id` from the tree.
///
/// Returns the rebuilt tree and the removed node's former parent id
/// (`None` for a root-level removal). An absent id is a no-op: the tree
/// comes back structurally equal to the input.
pub fn remove_item_from_tree(tree: &[BlockNode], id: &str) -> RemoveResult {
    remove_inner(tree, id, None)
}

fn remove_inner(tree: &[BlockNode], id: &str, parent: Option<&str>) -> RemoveResult {
    let mut new_tree = Vec::with_capacity(tree.len());
    let mut parent_id: Option<String> = None;
    for block in tree {
        if block.client_id == id {
            parent_id = parent.map(str::to_owned);
            continue;
        }
        if block.inner_blocks.is_empty() {
            new_tree.push(block.clone());
        } else {
            let inner = remove_inner(&block.inner_blocks, id, Some(&block.client_id));
            if inner.parent_id.is_some() {
                parent_id = inner.parent_id;
            }
            new_tree.push(BlockNode {
                client_id: block.client_id.clone(),
                inner_blocks: inner.tree,
                attributes: block.attributes.clone(),
            });
        }
    }
    RemoveResult {
        tree: new_tree,
        parent_id,
    }
}

/// Insert `item` as a sibling of the node with `client_id == id`, after it
/// when `insert_after` is `true` and before it otherwise.
///
/// Returns the rebuilt tree, the parent id of the insertion point (`None`
/// = root level), and the index the inserted node occupies among its new
/// siblings. An absent id is a no-op with `index: None`.
pub fn add_item_to_tree(
    tree: &[BlockNode],
    id: &str,
    item: &BlockNode,
    insert_after: bool,
) -> InsertResult {
    insert_inner(tree, id, item, insert_after, None)
}

fn insert_inner(
    tree: &[BlockNode],
    id: &str,
    item: &BlockNode,
    insert_after: bool,
    parent: Option<&str>,
) -> InsertResult {
    let mut new_tree = Vec::with_capacity(tree.len() + 1);
    let mut parent_id: Option<String> = None;
    let mut index: Option<usize> = None;
    for block in tree {
        if block.client_id == id {
            parent_id = parent.map(str::to_owned);
            if insert_after {
                new_tree.push(block.clone());
                index = Some(new_tree.len());
                new_tree.push(item.clone());
            } else {
                index = Some(new_tree.len());
                new_tree.push(item.clone());
                new_tree.push(block.clone());
            }
        } else if block.inner_blocks.is_empty() {
            new_tree.push(block.clone());
        } else {
            let inner = insert_inner(
                &block.inner_blocks,
                id,
                item,
                insert_after,
                Some(&block.client_id),
            );
            if inner.index.is_some() {
                index = inner.index;
                parent_id = inner.parent_id;
            }
            new_tree.push(BlockNode {
                client_id: block.client_id.clone(),
                inner_blocks: inner.tree,
                attributes: block.attributes.clone(),
            });
        }
    }
    InsertResult {
        tree: new_tree,
        parent_id,
        index,
    }
}

/// Prepend `item` to the children of the node with `client_id == id`.
///
/// An absent id returns the tree unchanged.
pub fn add_child_item_to_tree(tree: &[BlockNode], id: &str, item: &BlockNode) -> Vec<BlockNode> {
    tree.iter()
        .map(|block| {
            if block.client_id == id {
                let mut inner_blocks = Vec::with_capacity(block.inner_blocks.len() + 1);
                inner_blocks.push(item.clone());
                inner_blocks.extend(block.inner_blocks.iter().cloned());
                BlockNode {
                    client_id: block.client_id.clone(),
                    inner_blocks,
                    attributes: block.attributes.clone(),
                }
            } else if block.inner_blocks.is_empty() {
                block.clone()
            } else {
                BlockNode {
                    client_id: block.client_id.clone(),
                    inner_blocks: add_child_item_to_tree(&block.inner_blocks, id, item),
                    attributes: block.attributes.clone(),
                }
            }
        })
        .collect()
}
