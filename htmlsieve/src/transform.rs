use html5ever::driver::ParseOpts;
use html5ever::serialize::{serialize, SerializeOpts, TraversalScope};
use html5ever::tendril::TendrilSink;
use html5ever::{parse_fragment, QualName};
use markup5ever::{local_name, namespace_url, ns};
use markup5ever_rcdom::{Handle, RcDom, SerializableHandle};
use thiserror::Error;

use crate::filter::strip_and_clean;
use crate::normalize::collapse_whitespace;

/// Processing configuration adjustments.
#[derive(Debug, Default, Clone, Copy)]
pub struct SieveConfig {
    /// Keep whitespace and newlines in the output.
    pub keep_whitespace: bool,
}

/// Failures surfaced while re-serializing the filtered tree. Parsing and
/// filtering themselves have no failure modes.
#[derive(Debug, Error)]
pub enum SieveError {
    #[error("failed to serialize the filtered document: {0}")]
    Serialize(#[from] std::io::Error),
    #[error("serializer produced invalid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Filter raw HTML into the minimal safe subset: parse, drop disallowed
/// nodes and attributes at every depth, serialize, and optionally collapse
/// whitespace. Deterministic for a given input and configuration.
pub fn process_html(html: &str, config: &SieveConfig) -> Result<String, SieveError> {
    // the dom owns every node: dropping it clears all child vectors, so it
    // has to stay alive until serialization is done
    let dom = parse_fragment_dom(html);
    let root = fragment_root(&dom);

    strip_and_clean(&mut root.children.borrow_mut());

    let serialized = serialize_children(&root)?;

    Ok(if config.keep_whitespace {
        serialized
    } else {
        collapse_whitespace(&serialized)
    })
}

/// Parse input as a body-context fragment so that plain snippets round-trip
/// without synthesized `<html>`/`<head>`/`<body>` wrappers.
fn parse_fragment_dom(html: &str) -> RcDom {
    parse_fragment(
        RcDom::default(),
        ParseOpts::default(),
        QualName::new(None, ns!(html), local_name!("body")),
        Vec::new(),
    )
    .one(html)
}

/// The fragment root whose children are the top-level forest.
fn fragment_root(dom: &RcDom) -> Handle {
    let children = dom.document.children.borrow();

    match children.first() {
        Some(root) => root.clone(),
        None => dom.document.clone(),
    }
}

/// Serialize the children of the fragment root back into HTML text.
fn serialize_children(root: &Handle) -> Result<String, SieveError> {
    let mut output = Vec::new();
    let serializable: SerializableHandle = root.clone().into();

    serialize(
        &mut output,
        &serializable,
        SerializeOpts {
            traversal_scope: TraversalScope::ChildrenOnly(None),
            ..Default::default()
        },
    )?;

    Ok(String::from_utf8(output)?)
}
