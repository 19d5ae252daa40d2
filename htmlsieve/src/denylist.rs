use phf::phf_set;

/// Tag names that are always removed together with their entire subtree.
/// Matched case-insensitively against the lower-cased element name.
pub static DISALLOWED_TAGS: phf::Set<&'static str> = phf_set! {
    // security sensitive embeds
    "iframe",
    "object",
    "embed",
    "applet",
    // metadata and document structure
    "meta",
    "link",
    "head",
    "title",
    "base",
    // frames
    "frame",
    "frameset",
    "noframes",
    // media
    "img",
    "picture",
    "source",
    "video",
    "audio",
    "track",
    // graphics and interactive graphics
    "svg",
    "canvas",
    "map",
    "area",
};
