//! Shared checks on generated style text.

#![allow(dead_code)]

use tilecss::style::declarations::{find_declaration, parse_style_text};

/// Every `background-*` layer list has the same number of entries.
pub fn assert_layer_parity(id: &str, css: &str) {
    let items = parse_style_text(css).unwrap_or_else(|e| panic!("{id}: {e}\n{css}"));
    let color = find_declaration(&items, "background-color");
    assert!(color.is_some(), "{id}: missing background-color");

    let Some(images) = find_declaration(&items, "background-image") else {
        return;
    };
    let count = images.layers().len();
    for property in ["background-size", "background-position"] {
        let decl = find_declaration(&items, property)
            .unwrap_or_else(|| panic!("{id}: missing {property}"));
        assert_eq!(decl.layers().len(), count, "{id}: {property} parity\n{css}");
    }
}

/// No `NaN`/`inf` numbers, no negative pixel lengths and no zero-sized tiles.
pub fn assert_lengths_sane(id: &str, css: &str) {
    let words = css.split(|c: char| !(c.is_ascii_alphanumeric() || c == '.'));
    for word in words {
        assert!(!matches!(word, "NaN" | "inf"), "{id}: non-finite number\n{css}");
    }

    for (idx, _) in css.match_indices('-') {
        let rest = &css[idx + 1..];
        let digits = rest.find(|c: char| !(c.is_ascii_digit() || c == '.')).unwrap_or(rest.len());
        let negative_px = digits > 0 && rest[digits..].starts_with("px");
        assert!(!negative_px, "{id}: negative length near {:?}\n{css}", &css[idx..]);
    }

    let items = parse_style_text(css).unwrap_or_else(|e| panic!("{id}: {e}\n{css}"));
    if let Some(sizes) = find_declaration(&items, "background-size") {
        for size in sizes.layers() {
            let zero = size.split_whitespace().any(|part| part == "0" || part.starts_with("0px"));
            assert!(!zero, "{id}: zero-sized layer {size:?}\n{css}");
        }
    }
}
