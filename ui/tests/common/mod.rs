#![allow(dead_code)]

use dioxus::prelude::*;
use ui::components::NavBar;

/// Server-render `NavBar` to an HTML string.
pub fn render_navbar() -> String {
    let mut dom = VirtualDom::new(NavBar);
    dom.rebuild_in_place();
    strip_comments(&dioxus_ssr::render(&dom))
}

fn strip_comments(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(start) = rest.find("<!--") {
        out.push_str(&rest[..start]);
        match rest[start..].find("-->") {
            Some(end) => rest = &rest[start + end + 3..],
            None => {
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// An `<a ...>` element split into its opening tag and inner HTML.
pub struct Anchor {
    pub open: String,
    pub inner: String,
}

/// Byte offset of the `>` closing a tag, skipping any inside quoted
/// attribute values.
fn tag_end(tag: &str) -> Option<usize> {
    let mut quoted = false;
    for (i, c) in tag.char_indices() {
        match c {
            '"' => quoted = !quoted,
            '>' if !quoted => return Some(i),
            _ => {}
        }
    }
    None
}

/// Every `<a ...>...</a>` element, in document order.
pub fn anchors(html: &str) -> Vec<Anchor> {
    html.split("<a ")
        .skip(1)
        .filter_map(|chunk| {
            let end = tag_end(chunk)?;
            let (inner, _) = chunk[end + 1..].split_once("</a>")?;
            Some(Anchor {
                open: chunk[..end].to_string(),
                inner: inner.to_string(),
            })
        })
        .collect()
}

/// The opening tag of the first `<tag ...>` element.
pub fn open_tag<'a>(html: &'a str, tag: &str) -> Option<&'a str> {
    let start = html.find(&format!("<{tag} "))?;
    let end = tag_end(&html[start..])?;
    Some(&html[start..start + end + 1])
}
