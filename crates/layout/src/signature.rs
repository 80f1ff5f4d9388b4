//! Structural page signatures for regression comparison.
//!
//! Each node contributes `"{nodeType}|{fieldPath-or-nodeId}|{x},{y},{w},{h}"`
//! with rounded coordinates; siblings are sorted before descending so the
//! result does not depend on construction order. The concatenation is hashed
//! with 32-bit FNV-1a and rendered as 8 hex digits.

use crate::node::LayoutNode;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

pub fn fnv1a32(bytes: &[u8]) -> u32 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &b| {
        (hash ^ u32::from(b)).wrapping_mul(FNV_PRIME)
    })
}

pub fn page_signature(page: &LayoutNode) -> String {
    format!("{:08x}", fnv1a32(canonical_form(page).as_bytes()))
}

pub fn page_signatures(pages: &[LayoutNode]) -> Vec<String> {
    pages.iter().map(page_signature).collect()
}

/// The string that gets hashed; exposed for debugging signature drift.
pub fn canonical_form(page: &LayoutNode) -> String {
    let mut out = String::new();
    write_node(page, &mut out);
    out
}

type SortKey<'a> = (&'static str, &'a str, i64, i64, i64, i64);

fn sort_key(node: &LayoutNode) -> SortKey<'_> {
    let f = node.frame;
    (
        node.node_type(),
        node.identifier(),
        round(f.x),
        round(f.y),
        round(f.width),
        round(f.height),
    )
}

fn round(v: f32) -> i64 {
    v.round() as i64
}

fn write_node(node: &LayoutNode, out: &mut String) {
    let (node_type, id, x, y, w, h) = sort_key(node);
    out.push_str(&format!("{}|{}|{},{},{},{}\n", node_type, id, x, y, w, h));

    let mut children: Vec<&LayoutNode> = node.children.iter().collect();
    children.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));
    for child in children {
        write_node(child, out);
    }
}
