#![forbid(unsafe_code)]

//! Sanitizers: the trust boundary between user content and generated
//! HTML.
//!
//! Every function here either returns a safe value or a well-defined
//! "invalid" signal (`None`, or the `"#"` placeholder for URLs).
//! Callers treat "invalid" as "omit this property" — raw input never
//! reaches the output. No sanitizer panics on malformed input;
//! malformed input is data, not a program error.
//!
//! # The five contracts
//!
//! - [`escape_html`]: plain text destined for a text node. The five
//!   metacharacters are escaped unconditionally — no whitelisting is
//!   attempted for content that should never contain markup.
//! - [`sanitize_url`]: `http:`/`https:`/`mailto:` and same-document
//!   relative paths pass; everything else (notably `javascript:` and
//!   `data:`) becomes `"#"`.
//! - [`sanitize_color`]: 3/6-digit hex, `rgb()`/`rgba()` with numeric
//!   arguments, or a short named list. Anything carrying CSS-breakout
//!   characters is invalid — no guessing.
//! - [`sanitize_length`]: `<number><px|em|rem|%|pt>` or bare `0`.
//! - [`sanitize_rich_text`]: a small fixed tag and attribute
//!   whitelist; `<script>`/`<style>` bodies are dropped entirely,
//!   unknown tags are stripped but keep their inner text, event
//!   handler attributes never survive.

use std::fmt::Write as _;

/// Tags allowed through the rich-text sanitizer.
const ALLOWED_TAGS: &[&str] = &["a", "b", "br", "em", "i", "p", "span", "strong", "u"];

/// Tags whose entire content is dropped, not just the markup.
const DROP_CONTENT_TAGS: &[&str] = &["script", "style"];

/// `rel` tokens allowed on anchors.
const ALLOWED_REL_TOKENS: &[&str] = &["nofollow", "noopener", "noreferrer"];

/// Named colors accepted verbatim (lowercased).
const NAMED_COLORS: &[&str] = &[
    "black", "blue", "gray", "green", "grey", "navy", "orange", "purple", "red", "silver",
    "teal", "transparent", "white", "yellow",
];

// ---------------------------------------------------------------------------
// Plain text
// ---------------------------------------------------------------------------

/// Escape the five HTML metacharacters, unconditionally.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    escape_html_into(&mut out, s);
    out
}

/// [`escape_html`] into an existing buffer.
pub fn escape_html_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

// ---------------------------------------------------------------------------
// URLs
// ---------------------------------------------------------------------------

/// Reduce a URL to something safe to interpolate into `href`.
///
/// Returns the cleaned URL, or `"#"` when the scheme is not
/// whitelisted. Embedded ASCII whitespace and control characters are
/// removed before the scheme check — `"jav\tascript:"` is still
/// `javascript:`.
#[must_use]
pub fn sanitize_url(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_ascii_control() && !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return "#".into();
    }

    // A colon appearing before any path/query/fragment character marks
    // a scheme.
    let scheme_end = cleaned
        .find(|c| matches!(c, ':' | '/' | '?' | '#'))
        .filter(|&i| cleaned[i..].starts_with(':'));

    match scheme_end {
        Some(end) => {
            let scheme = &cleaned[..end];
            let allowed = scheme.eq_ignore_ascii_case("http")
                || scheme.eq_ignore_ascii_case("https")
                || scheme.eq_ignore_ascii_case("mailto");
            if allowed { cleaned } else { "#".into() }
        }
        // No scheme: only same-document relative forms pass.
        None if cleaned.starts_with('/')
            || cleaned.starts_with('#')
            || cleaned.starts_with('?') =>
        {
            cleaned
        }
        None => "#".into(),
    }
}

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

/// Validate a CSS color value. Returns the normalized value, or `None`.
#[must_use]
pub fn sanitize_color(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.chars().any(is_css_breakout) {
        return None;
    }

    if let Some(hex) = trimmed.strip_prefix('#') {
        let valid_len = hex.len() == 3 || hex.len() == 6;
        if valid_len && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Some(format!("#{}", hex.to_ascii_lowercase()));
        }
        return None;
    }

    let lower = trimmed.to_ascii_lowercase();
    if NAMED_COLORS.contains(&lower.as_str()) {
        return Some(lower);
    }

    if let Some(args) = strip_function(&lower, "rgb") {
        return sanitize_rgb_args(args, 3).map(|args| format!("rgb({args})"));
    }
    if let Some(args) = strip_function(&lower, "rgba") {
        return sanitize_rgb_args(args, 4).map(|args| format!("rgba({args})"));
    }

    None
}

/// Characters that could break out of a CSS declaration or attribute.
fn is_css_breakout(c: char) -> bool {
    matches!(c, ';' | '{' | '}' | '<' | '>' | '"' | '\'' | '\\' | '`') || c.is_control()
}

fn strip_function<'a>(value: &'a str, name: &str) -> Option<&'a str> {
    value
        .strip_prefix(name)?
        .strip_prefix('(')?
        .strip_suffix(')')
}

/// Validate `r, g, b[, a]` arguments: channels are 0-255 integers,
/// alpha is a 0-1 decimal. Returns the canonical comma-joined list.
fn sanitize_rgb_args(args: &str, expected: usize) -> Option<String> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != expected {
        return None;
    }
    for (index, part) in parts.iter().enumerate() {
        if index < 3 {
            part.parse::<u8>().ok()?;
        } else {
            let alpha = part.parse::<f32>().ok()?;
            if !(0.0..=1.0).contains(&alpha) {
                return None;
            }
        }
    }
    Some(parts.join(","))
}

// ---------------------------------------------------------------------------
// Lengths
// ---------------------------------------------------------------------------

/// Validate a CSS length: `<number><px|em|rem|%|pt>` or bare `0`.
#[must_use]
pub fn sanitize_length(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed == "0" {
        return Some("0".into());
    }

    let digits_end = trimmed
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit() || *c == '.')
        .map(|(i, c)| i + c.len_utf8())
        .last()?;

    let (number, unit) = trimmed.split_at(digits_end);
    number.parse::<f64>().ok()?;

    let unit = unit.to_ascii_lowercase();
    match unit.as_str() {
        "px" | "em" | "rem" | "%" | "pt" => Some(format!("{number}{unit}")),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Font stacks
// ---------------------------------------------------------------------------

/// Validate a font-family stack with a conservative character
/// whitelist (letters, digits, spaces, commas, hyphens).
#[must_use]
pub fn sanitize_font_stack(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let ok = trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | ',' | '-'));
    ok.then(|| trimmed.to_string())
}

// ---------------------------------------------------------------------------
// Rich text
// ---------------------------------------------------------------------------

/// Sanitize user rich text to the fixed tag/attribute whitelist.
///
/// Unknown tags are stripped but their inner text survives;
/// `<script>`/`<style>` lose their content too. Attributes other than
/// `href`, `style`, `target`, `rel` never survive, and those four are
/// themselves re-validated (`href` through [`sanitize_url`], `style`
/// through a per-property filter).
#[must_use]
pub fn sanitize_rich_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let bytes = raw.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        let Some(open) = raw[pos..].find('<').map(|i| pos + i) else {
            escape_text_into(&mut out, &raw[pos..]);
            break;
        };

        escape_text_into(&mut out, &raw[pos..open]);

        match parse_tag(&raw[open..]) {
            Some(tag) => {
                let after_tag = open + tag.consumed;
                if DROP_CONTENT_TAGS.contains(&tag.name.as_str()) && !tag.closing {
                    // Skip everything up to and including the matching
                    // close tag; unterminated means drop the rest.
                    pos = skip_dropped_content(raw, after_tag, &tag.name);
                } else {
                    if ALLOWED_TAGS.contains(&tag.name.as_str()) {
                        emit_tag(&mut out, &tag);
                    }
                    pos = after_tag;
                }
            }
            None => {
                // Not parseable as a tag: treat the `<` as text.
                out.push_str("&lt;");
                pos = open + 1;
            }
        }
    }

    out
}

/// Escape a text run, preserving pre-existing character entities.
fn escape_text_into(out: &mut String, text: &str) {
    for (index, c) in text.char_indices() {
        match c {
            '&' if is_entity_start(&text[index..]) => out.push('&'),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// Whether `s` (starting with `&`) begins a character entity like
/// `&amp;` or `&#8212;`.
fn is_entity_start(s: &str) -> bool {
    let rest = &s[1..];
    let Some(semi) = rest.find(';') else {
        return false;
    };
    let body = &rest[..semi];
    if body.is_empty() || body.len() > 10 {
        return false;
    }
    if let Some(digits) = body.strip_prefix('#') {
        !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
    } else {
        body.chars().all(|c| c.is_ascii_alphanumeric())
    }
}

struct ParsedTag {
    name: String,
    closing: bool,
    /// Bytes consumed from the input, `<` through `>` inclusive.
    consumed: usize,
    href: Option<String>,
    target: Option<String>,
    rel: Option<String>,
    style: Option<String>,
}

/// Parse one tag starting at `input[0] == '<'`. Returns `None` when
/// the input is not a well-formed tag (no name, or no closing `>`).
fn parse_tag(input: &str) -> Option<ParsedTag> {
    let mut rest = &input[1..];
    let closing = if let Some(stripped) = rest.strip_prefix('/') {
        rest = stripped;
        true
    } else {
        false
    };

    let name_len = rest
        .char_indices()
        .take_while(|(i, c)| {
            if *i == 0 {
                c.is_ascii_alphabetic()
            } else {
                c.is_ascii_alphanumeric()
            }
        })
        .count();
    if name_len == 0 {
        return None;
    }
    let name = rest[..name_len].to_ascii_lowercase();
    rest = &rest[name_len..];

    let mut tag = ParsedTag {
        name,
        closing,
        consumed: 0,
        href: None,
        target: None,
        rel: None,
        style: None,
    };

    // Attribute scan until `>`; quoted values may contain `>`.
    loop {
        rest = rest.trim_start();
        if let Some(after) = rest.strip_prefix("/>").or_else(|| rest.strip_prefix('>')) {
            tag.consumed = input.len() - after.len();
            return Some(tag);
        }
        if rest.is_empty() {
            return None;
        }

        let attr_len = rest
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
            .count();
        if attr_len == 0 {
            // Junk we cannot attribute-parse; treat the tag as invalid.
            return None;
        }
        let attr_name = rest[..attr_len].to_ascii_lowercase();
        rest = &rest[attr_len..];

        let value = if let Some(stripped) = rest.trim_start().strip_prefix('=') {
            let (value, remaining) = parse_attr_value(stripped.trim_start())?;
            rest = remaining;
            value
        } else {
            String::new()
        };

        match attr_name.as_str() {
            "href" => tag.href = Some(sanitize_url(&value)),
            "target" => {
                if value == "_blank" {
                    tag.target = Some(value);
                }
            }
            "rel" => {
                let tokens: Vec<&str> = value
                    .split_ascii_whitespace()
                    .filter(|t| ALLOWED_REL_TOKENS.contains(&t.to_ascii_lowercase().as_str()))
                    .collect();
                if !tokens.is_empty() {
                    tag.rel = Some(tokens.join(" "));
                }
            }
            "style" => {
                let filtered = sanitize_style_attr(&value);
                if !filtered.is_empty() {
                    tag.style = Some(filtered);
                }
            }
            // Everything else — class, id, on* handlers — is dropped.
            _ => {}
        }
    }
}

/// Parse an attribute value (quoted or bare). Returns the value and
/// the remaining input.
fn parse_attr_value(input: &str) -> Option<(String, &str)> {
    let mut chars = input.chars();
    match chars.next()? {
        quote @ ('"' | '\'') => {
            let body = chars.as_str();
            let end = body.find(quote)?;
            Some((body[..end].to_string(), &body[end + 1..]))
        }
        _ => {
            let end = input
                .find(|c: char| c.is_ascii_whitespace() || c == '>')
                .unwrap_or(input.len());
            Some((input[..end].to_string(), &input[end..]))
        }
    }
}

/// Re-emit a whitelisted tag with its surviving attributes in a fixed
/// canonical order.
fn emit_tag(out: &mut String, tag: &ParsedTag) {
    if tag.closing {
        // Void elements have no close tag worth keeping.
        if tag.name != "br" {
            write!(out, "</{}>", tag.name).unwrap();
        }
        return;
    }

    write!(out, "<{}", tag.name).unwrap();
    if let Some(href) = &tag.href {
        write!(out, " href=\"{}\"", escape_html(href)).unwrap();
    }
    if let Some(target) = &tag.target {
        write!(out, " target=\"{target}\"").unwrap();
    }
    if let Some(rel) = &tag.rel {
        write!(out, " rel=\"{rel}\"").unwrap();
    }
    if let Some(style) = &tag.style {
        write!(out, " style=\"{style}\"").unwrap();
    }
    out.push('>');
}

/// Skip past the matching close tag of a content-dropping element.
fn skip_dropped_content(input: &str, from: usize, name: &str) -> usize {
    let lower = input.to_ascii_lowercase();
    let close = format!("</{name}");
    match lower[from..].find(&close) {
        Some(offset) => {
            let tag_start = from + offset;
            match input[tag_start..].find('>') {
                Some(end) => tag_start + end + 1,
                None => input.len(),
            }
        }
        None => input.len(),
    }
}

/// Filter an inline `style` attribute to a fixed per-property
/// whitelist, each value re-validated by the matching sanitizer.
fn sanitize_style_attr(value: &str) -> String {
    let mut kept: Vec<String> = Vec::new();
    for declaration in value.split(';') {
        let Some((property, raw_value)) = declaration.split_once(':') else {
            continue;
        };
        let property = property.trim().to_ascii_lowercase();
        let raw_value = raw_value.trim();

        let sanitized = match property.as_str() {
            "color" | "background-color" => sanitize_color(raw_value),
            "font-size" => sanitize_length(raw_value),
            "font-weight" => match raw_value.to_ascii_lowercase().as_str() {
                "normal" | "bold" | "400" | "700" => Some(raw_value.to_ascii_lowercase()),
                _ => None,
            },
            "font-style" => match raw_value.to_ascii_lowercase().as_str() {
                "normal" | "italic" => Some(raw_value.to_ascii_lowercase()),
                _ => None,
            },
            "text-decoration" => match raw_value.to_ascii_lowercase().as_str() {
                "underline" | "line-through" | "none" => Some(raw_value.to_ascii_lowercase()),
                _ => None,
            },
            "text-align" => match raw_value.to_ascii_lowercase().as_str() {
                "left" | "center" | "right" => Some(raw_value.to_ascii_lowercase()),
                _ => None,
            },
            _ => None,
        };

        if let Some(value) = sanitized {
            kept.push(format!("{property}: {value}"));
        }
    }
    kept.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- escape_html -------------------------------------------------------

    #[test]
    fn escapes_all_five_metacharacters() {
        assert_eq!(
            escape_html("&<>\"'"),
            "&amp;&lt;&gt;&quot;&#39;"
        );
    }

    #[test]
    fn escape_html_script_literal() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
    }

    #[test]
    fn escape_html_passes_plain_text() {
        assert_eq!(escape_html("Hello, world"), "Hello, world");
    }

    // --- sanitize_url ------------------------------------------------------

    #[test]
    fn url_allows_http_https_mailto() {
        assert_eq!(sanitize_url("http://example.com"), "http://example.com");
        assert_eq!(sanitize_url("https://example.com/a?b=c"), "https://example.com/a?b=c");
        assert_eq!(sanitize_url("mailto:hi@example.com"), "mailto:hi@example.com");
        assert_eq!(sanitize_url("HTTPS://EXAMPLE.COM"), "HTTPS://EXAMPLE.COM");
    }

    #[test]
    fn url_allows_relative_forms() {
        assert_eq!(sanitize_url("/unsubscribe"), "/unsubscribe");
        assert_eq!(sanitize_url("#top"), "#top");
        assert_eq!(sanitize_url("?page=2"), "?page=2");
    }

    #[test]
    fn url_rejects_javascript() {
        assert_eq!(sanitize_url("javascript:alert(1)"), "#");
    }

    #[test]
    fn url_rejects_data() {
        assert_eq!(sanitize_url("data:text/html,<script>"), "#");
    }

    #[test]
    fn url_rejects_embedded_whitespace_scheme() {
        assert_eq!(sanitize_url("jav\tascript:alert(1)"), "#");
        assert_eq!(sanitize_url(" java\nscript:alert(1)"), "#");
    }

    #[test]
    fn url_rejects_bare_words_and_empty() {
        assert_eq!(sanitize_url("page.html"), "#");
        assert_eq!(sanitize_url(""), "#");
        assert_eq!(sanitize_url("   "), "#");
    }

    #[test]
    fn url_colon_after_path_is_not_a_scheme() {
        assert_eq!(sanitize_url("/path:with:colons"), "/path:with:colons");
    }

    // --- sanitize_color ----------------------------------------------------

    #[test]
    fn color_accepts_hex() {
        assert_eq!(sanitize_color("#fff").as_deref(), Some("#fff"));
        assert_eq!(sanitize_color("#1A2b3C").as_deref(), Some("#1a2b3c"));
    }

    #[test]
    fn color_rejects_malformed_hex() {
        assert_eq!(sanitize_color("#ffff"), None);
        assert_eq!(sanitize_color("#ggg"), None);
    }

    #[test]
    fn color_accepts_rgb_forms() {
        assert_eq!(
            sanitize_color("rgb(255, 0, 10)").as_deref(),
            Some("rgb(255,0,10)")
        );
        assert_eq!(
            sanitize_color("rgba(0,0,0,0.5)").as_deref(),
            Some("rgba(0,0,0,0.5)")
        );
    }

    #[test]
    fn color_rejects_non_numeric_rgb() {
        assert_eq!(sanitize_color("rgb(a,b,c)"), None);
        assert_eq!(sanitize_color("rgb(256,0,0)"), None);
        assert_eq!(sanitize_color("rgba(0,0,0,2)"), None);
        assert_eq!(sanitize_color("rgb(0,0)"), None);
    }

    #[test]
    fn color_accepts_named() {
        assert_eq!(sanitize_color("red").as_deref(), Some("red"));
        assert_eq!(sanitize_color("Transparent").as_deref(), Some("transparent"));
    }

    #[test]
    fn color_rejects_breakout_characters() {
        assert_eq!(sanitize_color("red; position:fixed;"), None);
        assert_eq!(sanitize_color("#fff}body{"), None);
        assert_eq!(sanitize_color("expression(alert(1))"), None);
    }

    // --- sanitize_length ---------------------------------------------------

    #[test]
    fn length_accepts_units() {
        assert_eq!(sanitize_length("16px").as_deref(), Some("16px"));
        assert_eq!(sanitize_length("1.5em").as_deref(), Some("1.5em"));
        assert_eq!(sanitize_length("2rem").as_deref(), Some("2rem"));
        assert_eq!(sanitize_length("100%").as_deref(), Some("100%"));
        assert_eq!(sanitize_length("12pt").as_deref(), Some("12pt"));
        assert_eq!(sanitize_length("0").as_deref(), Some("0"));
    }

    #[test]
    fn length_rejects_breakout() {
        assert_eq!(sanitize_length("16px; position:fixed;"), None);
    }

    #[test]
    fn length_rejects_unknown_units_and_junk() {
        assert_eq!(sanitize_length("16vw"), None);
        assert_eq!(sanitize_length("px"), None);
        assert_eq!(sanitize_length("auto"), None);
        assert_eq!(sanitize_length(""), None);
        assert_eq!(sanitize_length("-16px"), None);
    }

    // --- sanitize_font_stack -----------------------------------------------

    #[test]
    fn font_stack_accepts_common_stacks() {
        assert_eq!(
            sanitize_font_stack("Arial, Helvetica, sans-serif").as_deref(),
            Some("Arial, Helvetica, sans-serif")
        );
    }

    #[test]
    fn font_stack_rejects_breakout() {
        assert_eq!(sanitize_font_stack("Arial\"; background:url(x)"), None);
        assert_eq!(sanitize_font_stack(""), None);
    }

    // --- sanitize_rich_text ------------------------------------------------

    #[test]
    fn rich_text_keeps_whitelisted_tags() {
        assert_eq!(
            sanitize_rich_text("<strong>bold</strong> and <em>italic</em>"),
            "<strong>bold</strong> and <em>italic</em>"
        );
    }

    #[test]
    fn rich_text_strips_script_with_content() {
        assert_eq!(
            sanitize_rich_text("before<script>alert(1)</script>after"),
            "beforeafter"
        );
    }

    #[test]
    fn rich_text_strips_style_with_content() {
        assert_eq!(
            sanitize_rich_text("a<style>body{display:none}</style>b"),
            "ab"
        );
    }

    #[test]
    fn rich_text_unterminated_script_drops_rest() {
        assert_eq!(sanitize_rich_text("a<script>alert(1)"), "a");
    }

    #[test]
    fn rich_text_strips_unknown_tags_keeps_content() {
        assert_eq!(
            sanitize_rich_text("<div class=\"x\">keep me</div>"),
            "keep me"
        );
    }

    #[test]
    fn rich_text_drops_event_handlers() {
        let out = sanitize_rich_text("<a href=\"https://x.com\" onclick=\"evil()\">go</a>");
        assert_eq!(out, "<a href=\"https://x.com\">go</a>");
    }

    #[test]
    fn rich_text_rewrites_hostile_href() {
        let out = sanitize_rich_text("<a href=\"javascript:evil()\">go</a>");
        assert_eq!(out, "<a href=\"#\">go</a>");
    }

    #[test]
    fn rich_text_filters_style_declarations() {
        let out = sanitize_rich_text(
            "<span style=\"color:#ff0000;position:fixed;font-weight:bold\">x</span>",
        );
        assert_eq!(
            out,
            "<span style=\"color: #ff0000; font-weight: bold\">x</span>"
        );
    }

    #[test]
    fn rich_text_escapes_loose_angle_brackets() {
        assert_eq!(sanitize_rich_text("1 < 2 and 3 > 2"), "1 &lt; 2 and 3 &gt; 2");
    }

    #[test]
    fn rich_text_preserves_existing_entities() {
        assert_eq!(sanitize_rich_text("fish &amp; chips"), "fish &amp; chips");
        assert_eq!(sanitize_rich_text("dash &#8212; here"), "dash &#8212; here");
        assert_eq!(sanitize_rich_text("a & b"), "a &amp; b");
    }

    #[test]
    fn rich_text_canonicalizes_br() {
        assert_eq!(sanitize_rich_text("a<br/>b<br />c"), "a<br>b<br>c");
    }

    #[test]
    fn rich_text_keeps_blank_target_drops_others() {
        assert_eq!(
            sanitize_rich_text("<a href=\"/x\" target=\"_blank\">y</a>"),
            "<a href=\"/x\" target=\"_blank\">y</a>"
        );
        assert_eq!(
            sanitize_rich_text("<a href=\"/x\" target=\"_top\">y</a>"),
            "<a href=\"/x\">y</a>"
        );
    }

    #[test]
    fn rich_text_filters_rel_tokens() {
        assert_eq!(
            sanitize_rich_text("<a href=\"/x\" rel=\"noopener evil noreferrer\">y</a>"),
            "<a href=\"/x\" rel=\"noopener noreferrer\">y</a>"
        );
    }

    #[test]
    fn rich_text_handles_unclosed_tag_as_text() {
        assert_eq!(sanitize_rich_text("a < b"), "a &lt; b");
        assert_eq!(sanitize_rich_text("oops <"), "oops &lt;");
    }

    #[test]
    fn rich_text_empty_input() {
        assert_eq!(sanitize_rich_text(""), "");
    }

    #[test]
    fn rich_text_nested_whitelisted_structure() {
        let input = "<p>Hello <strong>brave <u>new</u></strong> world</p>";
        assert_eq!(sanitize_rich_text(input), input);
    }
}
