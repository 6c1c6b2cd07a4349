//! Parsing of generated style text.
//!
//! Style text is a flat list of `property: value;` declarations, optionally
//! interleaved with `/* ... */` comments (the dispatcher uses a comment to
//! carry its error diagnostic). Values may contain parentheses and quoted
//! strings, e.g. `url("data:image/svg+xml,...")` or nested gradients, so the
//! value scanner only stops at a `;` outside of both.
//!
//! ```
//! use tilecss::style::declarations::{parse_style_text, StyleItem};
//!
//! let items = parse_style_text("background-color: #000;\nbackground-size: 8px 8px, auto;").unwrap();
//! let StyleItem::Declaration(size) = &items[1] else { panic!() };
//! assert_eq!(size.property, "background-size");
//! assert_eq!(size.layers(), vec!["8px 8px", "auto"]);
//! ```

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_until, take_while1},
    character::complete::{char, multispace0},
    combinator::map,
    multi::many0,
    sequence::{delimited, preceded, tuple},
};

use crate::PatternError;

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    /// Splits the value on commas that are outside parentheses and quotes.
    ///
    /// For `background-*` properties each entry is one layer.
    pub fn layers(&self) -> Vec<&str> {
        split_top_level(&self.value)
    }
}

/// One item of style text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleItem {
    /// Comment body, trimmed, without the delimiters.
    Comment(String),
    Declaration(Declaration),
}

/// Parses style text into comments and declarations, in source order.
pub fn parse_style_text(source: &str) -> Result<Vec<StyleItem>, PatternError> {
    let (remaining, items) =
        many0(parse_item)(source).map_err(|e| PatternError::InvalidStyle(e.to_string()))?;

    if !remaining.trim().is_empty() {
        return Err(PatternError::InvalidStyle(format!(
            "unexpected input: {}",
            remaining.trim()
        )));
    }

    Ok(items)
}

/// Returns the declaration for `property`, if present.
pub fn find_declaration<'a>(items: &'a [StyleItem], property: &str) -> Option<&'a Declaration> {
    items.iter().find_map(|item| match item {
        StyleItem::Declaration(decl) if decl.property == property => Some(decl),
        _ => None,
    })
}

fn parse_item(input: &str) -> IResult<&str, StyleItem> {
    preceded(
        multispace0,
        alt((
            map(parse_comment, |body: &str| StyleItem::Comment(body.trim().to_string())),
            map(parse_declaration, StyleItem::Declaration),
        )),
    )(input)
}

fn parse_comment(input: &str) -> IResult<&str, &str> {
    delimited(tag("/*"), take_until("*/"), tag("*/"))(input)
}

fn parse_property(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_')(input)
}

fn parse_declaration(input: &str) -> IResult<&str, Declaration> {
    let (input, property) = parse_property(input)?;
    let (input, _) = tuple((multispace0, char(':'), multispace0))(input)?;
    let (input, value) = parse_value(input)?;
    let (input, _) = char(';')(input)?;

    Ok((
        input,
        Declaration {
            property: property.to_string(),
            value: value.trim_end().to_string(),
        },
    ))
}

/// Consumes a value up to (not including) the terminating `;`.
fn parse_value(input: &str) -> IResult<&str, &str> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;

    for (idx, c) in input.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, ';') if depth == 0 => {
                if idx == 0 {
                    break;
                }
                return Ok((&input[idx..], &input[..idx]));
            }
            _ => {}
        }
    }

    Err(nom::Err::Error(nom::error::Error::new(
        input,
        nom::error::ErrorKind::TakeUntil,
    )))
}

/// Splits `value` on commas at nesting depth zero, trimming each part.
pub fn split_top_level(value: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (idx, c) in value.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, ',') if depth == 0 => {
                parts.push(value[start..idx].trim());
                start = idx + 1;
            }
            _ => {}
        }
    }

    let last = value[start..].trim();
    if !last.is_empty() || !parts.is_empty() {
        parts.push(last);
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_declarations() {
        let items = parse_style_text("background-color: #fff;\nbackground-size: 4px 4px;").unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(
            items[0],
            StyleItem::Declaration(Declaration {
                property: "background-color".into(),
                value: "#fff".into(),
            })
        );
    }

    #[test]
    fn test_parse_comment() {
        let items = parse_style_text("/* tilecss-error: boom */\nbackground-color: red;").unwrap();
        assert_eq!(items[0], StyleItem::Comment("tilecss-error: boom".into()));
    }

    #[test]
    fn test_semicolon_inside_quotes_and_parens() {
        let items =
            parse_style_text("background-image: url(\"data:a;b\"), linear-gradient(red, blue);").unwrap();
        let decl = find_declaration(&items, "background-image").unwrap();
        assert_eq!(decl.layers().len(), 2);
        assert_eq!(decl.layers()[0], "url(\"data:a;b\")");
    }

    #[test]
    fn test_split_top_level_ignores_nested_commas() {
        assert_eq!(
            split_top_level("radial-gradient(circle, red 1px, transparent 2px), auto"),
            vec!["radial-gradient(circle, red 1px, transparent 2px)", "auto"]
        );
        assert_eq!(split_top_level("0 0"), vec!["0 0"]);
        assert!(split_top_level("").is_empty());
    }

    #[test]
    fn test_rejects_missing_semicolon() {
        assert!(parse_style_text("background-color: red").is_err());
    }

    #[test]
    fn test_rejects_empty_value() {
        assert!(parse_style_text("background-color: ;").is_err());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_style_text("}").is_err());
    }

    #[test]
    fn test_empty_input_is_empty_list() {
        assert_eq!(parse_style_text("  \n ").unwrap(), Vec::new());
    }
}
