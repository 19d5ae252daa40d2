use markup5ever_rcdom::{Handle, NodeData};

use crate::denylist::DISALLOWED_TAGS;

/// Decide whether a node survives filtering. Script and style blocks come
/// out of the parser as ordinary elements, so they are matched by name ahead
/// of the denylist lookup.
pub fn is_node_allowed(node: &Handle) -> bool {
    match node.data {
        NodeData::Comment { .. } => false,
        NodeData::Text { .. } => true,
        NodeData::Element { ref name, .. } => {
            let tag = name.local.to_ascii_lowercase();
            match &*tag {
                "script" | "style" => false,
                tag => !DISALLOWED_TAGS.contains(tag),
            }
        }
        // documents, doctypes and processing instructions pass through as-is
        NodeData::Document
        | NodeData::Doctype { .. }
        | NodeData::ProcessingInstruction { .. } => true,
    }
}

/// Strip the attributes of a surviving element. Anchors keep a non-empty
/// `href`, everything else keeps nothing. The `href` key is read by its
/// literal lowercase local name.
pub fn clean_node_attributes(node: &Handle) {
    if let NodeData::Element {
        ref name,
        ref attrs,
        ..
    } = node.data
    {
        let mut attrs = attrs.borrow_mut();

        if (*name.local).eq_ignore_ascii_case("a") {
            attrs.retain(|attr| attr.name.local.as_bytes() == b"href" && !attr.value.is_empty());
        } else {
            attrs.clear();
        }
    }
}

/// Recursively filter a node sequence in place: drop disallowed nodes with
/// their subtrees, sanitize the attributes of the survivors, then descend
/// into their children. Relative order of survivors is preserved.
pub fn strip_and_clean(nodes: &mut Vec<Handle>) {
    nodes.retain(is_node_allowed);

    for node in nodes.iter() {
        clean_node_attributes(node);
        strip_and_clean(&mut node.children.borrow_mut());
    }
}
