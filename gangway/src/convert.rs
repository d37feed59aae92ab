use std::collections::HashSet;

use indexmap::IndexMap;

use crate::error::{DuplicateParameterError, DuplicateParameterSnafu};

/// Maps a declared OpenAPI parameter type to the route converter
/// understood by the target router.
///
/// See <https://werkzeug.palletsprojects.com/en/stable/routing/#builtin-converters>
pub fn converter_token(declared_type: &str) -> Option<&'static str> {
    match declared_type {
        "integer" => Some("int"),
        "number" => Some("float"),
        "path" => Some("path"),
        _ => None,
    }
}

/// Converts an OpenAPI path template to route syntax, leaving every
/// parameter untyped.
pub fn convert_path(template: &str) -> String {
    convert_path_with_types(template, &IndexMap::new())
}

/// Converts an OpenAPI path template to route syntax.
///
/// Each `{name}` placeholder becomes `<name>`, or `<converter:name>` when
/// `types` declares a type for it that has a route converter. Hyphens in
/// emitted parameter names become underscores, routers do not accept them
/// in identifiers. Everything outside placeholders is passed through
/// unchanged, including an unclosed `{`.
pub fn convert_path_with_types(template: &str, types: &IndexMap<String, String>) -> String {
    let mut converted = String::with_capacity(template.len());
    let mut tail = 0;

    for placeholder in placeholders(template) {
        converted.push_str(&template[tail..placeholder.start]);
        write_placeholder(&mut converted, placeholder.name, types);
        tail = placeholder.end;
    }

    converted.push_str(&template[tail..]);
    converted
}

/// Rejects templates that bind the same parameter twice.
///
/// Names are compared after hyphen flattening because `{a-b}` and `{a_b}`
/// collide once converted.
pub fn ensure_distinct_parameters(template: &str) -> Result<(), DuplicateParameterError> {
    let mut seen = HashSet::new();

    for placeholder in placeholders(template) {
        let flattened = placeholder.name.replace('-', "_");

        if seen.contains(flattened.as_str()) {
            return DuplicateParameterSnafu {
                name: flattened,
                template,
            }
            .fail();
        }

        seen.insert(flattened);
    }

    Ok(())
}

fn write_placeholder(out: &mut String, name: &str, types: &IndexMap<String, String>) {
    let converter = types.get(name).and_then(|declared| {
        let token = converter_token(declared);

        if token.is_none() {
            tracing::debug!(
                "no route converter for declared type `{declared}`, parameter `{name}` stays untyped"
            );
        }

        token
    });

    out.push('<');

    if let Some(converter) = converter {
        out.push_str(converter);
        out.push(':');
    }

    for c in name.chars() {
        out.push(if c == '-' { '_' } else { c });
    }

    out.push('>');
}

struct Placeholder<'a> {
    name: &'a str,
    /// Byte offset of the opening brace.
    start: usize,
    /// Byte offset just past the closing brace.
    end: usize,
}

/// Iterates over `{...}` spans left-to-right, non-nested: a name runs from
/// a `{` to the first `}` after it.
fn placeholders(template: &str) -> Placeholders<'_> {
    Placeholders { template, pos: 0 }
}

struct Placeholders<'a> {
    template: &'a str,
    pos: usize,
}

impl<'a> Iterator for Placeholders<'a> {
    type Item = Placeholder<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.template.as_bytes();

        let open = self.pos + memchr::memchr(b'{', &bytes[self.pos..])?;
        let close = open + 1 + memchr::memchr(b'}', &bytes[open + 1..])?;

        self.pos = close + 1;

        Some(Placeholder {
            name: &self.template[open + 1..close],
            start: open,
            end: close + 1,
        })
    }
}
