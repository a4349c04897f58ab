//! Tree-sitter Utility Functions
//!
//! Common helpers for working with tree-sitter nodes, shared by the name
//! visitors and the statement lowering in `features::pruning`.

use tree_sitter::Node;

// ═══════════════════════════════════════════════════════════════════════════
// Node Traversal Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Collect all direct children (named and anonymous)
#[inline]
pub fn children<'tree>(node: &Node<'tree>) -> Vec<Node<'tree>> {
    (0..node.child_count())
        .filter_map(|i| node.child(i))
        .collect()
}

/// Collect direct named children only
///
/// Skips punctuation such as `;` and `,` between statements/elements.
#[inline]
pub fn named_children<'tree>(node: &Node<'tree>) -> Vec<Node<'tree>> {
    (0..node.named_child_count())
        .filter_map(|i| node.named_child(i))
        .collect()
}

/// True when `child` is the node stored under `field` of `parent`
#[inline]
pub fn is_field_child(parent: &Node, field: &str, child: &Node) -> bool {
    parent
        .child_by_field_name(field)
        .map_or(false, |n| n.id() == child.id())
}

/// Find the first ERROR or MISSING node (depth-first, source order)
pub fn find_first_error<'tree>(node: &Node<'tree>) -> Option<Node<'tree>> {
    let mut stack = vec![*node];
    while let Some(current) = stack.pop() {
        if current.is_error() || current.is_missing() {
            return Some(current);
        }
        if !current.has_error() {
            continue;
        }
        for i in (0..current.child_count()).rev() {
            if let Some(child) = current.child(i) {
                stack.push(child);
            }
        }
    }
    None
}

/// Find the first node (depth-first, source order) whose kind is in `kinds`
pub fn find_first_kind<'tree>(node: &Node<'tree>, kinds: &[&str]) -> Option<Node<'tree>> {
    let mut stack = vec![*node];
    while let Some(current) = stack.pop() {
        if kinds.contains(&current.kind()) {
            return Some(current);
        }
        for i in (0..current.child_count()).rev() {
            if let Some(child) = current.child(i) {
                stack.push(child);
            }
        }
    }
    None
}

// ═══════════════════════════════════════════════════════════════════════════
// Text Extraction Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Extract text content from a node
#[inline]
pub fn extract_node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    source.get(node.byte_range()).unwrap_or("")
}

/// Extract text content from a node as owned String
#[inline]
pub fn extract_node_text_owned(node: &Node, source: &str) -> String {
    extract_node_text(node, source).to_string()
}

/// 1-indexed line, 1-indexed column of the node start
#[inline]
pub fn start_line_col(node: &Node) -> (usize, usize) {
    let pos = node.start_position();
    (pos.row + 1, pos.column + 1)
}
