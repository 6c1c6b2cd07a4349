//! Wrapping generated style text into stylesheet rules.
//!
//! ```
//! use tessera::export::to_rule_block;
//!
//! let rule = to_rule_block(".hero", "background-color: #000;").unwrap();
//! assert_eq!(rule, ".hero {\n  background-color: #000;\n}\n");
//! ```

use tilecss::PatternSettings;
use tilecss::style::declarations::{StyleItem, parse_style_text};

use crate::Result;

/// Re-emits `css` as a rule for `selector`, one indented item per line.
/// Comments are kept.
pub fn to_rule_block(selector: &str, css: &str) -> Result<String> {
    let items = parse_style_text(css)?;

    let mut out = format!("{selector} {{\n");
    for item in items {
        match item {
            StyleItem::Comment(body) => out.push_str(&format!("  /* {body} */\n")),
            StyleItem::Declaration(decl) => {
                out.push_str(&format!("  {}: {};\n", decl.property, decl.value))
            }
        }
    }
    out.push_str("}\n");
    Ok(out)
}

/// A self-contained stylesheet for `settings`: a header comment naming the
/// pattern, then a `.class_name` rule.
pub fn to_stylesheet(class_name: &str, settings: &PatternSettings) -> Result<String> {
    let name = tilecss::registry::find(&settings.pattern_type)
        .map(|descriptor| descriptor.name)
        .unwrap_or("Unknown pattern");
    let css = tilecss::generate(settings);

    let rule = to_rule_block(&format!(".{class_name}"), &css)?;
    Ok(format!(
        "/* {name} ({}) */\n{rule}",
        settings.pattern_type.replace("*/", "* /")
    ))
}
