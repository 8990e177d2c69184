//! Untrusted model output -> canonical [`RoadmapDocument`].
//!
//! Providers return prose, markdown fences, half-followed instructions. The
//! sanitizer extracts the first balanced JSON object from the raw text,
//! parses it, and normalizes the result field by field. Every recoverable
//! problem is repaired with a default; only a missing or unparseable object
//! escalates as a [`SanitizeError`]. Dangling edge references are kept here
//! and resolved by the graph builder, which owns referential integrity.
//!
//! The pass is pure and idempotent: serializing a sanitized document and
//! sanitizing it again yields a structurally identical document.

use crate::error::{Result, SanitizeError};
use crate::model::{
    DEFAULT_DESCRIPTION, DEFAULT_DURATION, DEFAULT_EDGE_KIND, DEFAULT_INDUSTRY, DEFAULT_TITLE,
    EdgeSpec, Level, NodeSpec, RoadmapDocument,
};
use rustc_hash::FxHashSet;
use serde_json::Value;

pub fn sanitize(raw_text: &str) -> Result<RoadmapDocument> {
    let json = extract_json_object(raw_text).ok_or(SanitizeError::NoJsonFound)?;
    let value: Value = serde_json::from_str(json).map_err(|e| SanitizeError::MalformedJson {
        message: e.to_string(),
        source_text: json.to_string(),
    })?;
    Ok(normalize(&value))
}

/// Returns the substring spanning the first `{` and its balancing `}`,
/// skipping braces inside JSON string literals.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in text.as_bytes().iter().enumerate().skip(start) {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=i]);
                }
            }
            _ => {}
        }
    }
    None
}

fn normalize(value: &Value) -> RoadmapDocument {
    let nodes = normalize_nodes(array_field(value, &["initialNodes", "nodes"]));
    let edges = normalize_edges(array_field(value, &["initialEdges", "edges"]));

    RoadmapDocument {
        industry: text_field(value, &["industry"], DEFAULT_INDUSTRY),
        title: text_field(value, &["roadmapTitle", "title"], DEFAULT_TITLE),
        description: text_field(value, &["description"], DEFAULT_DESCRIPTION),
        duration: text_field(value, &["duration"], DEFAULT_DURATION),
        nodes,
        edges,
    }
}

fn normalize_nodes(entries: &[Value]) -> Vec<NodeSpec> {
    let mut used: FxHashSet<String> = FxHashSet::default();
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let data = entry.get("data").unwrap_or(&Value::Null);
            let id = unique_id("node", i, coerce_id(entry.get("id")), &mut used);
            let label = field_str(data, &["title", "label"])
                .or_else(|| field_str(entry, &["title", "label"]))
                .map(str::to_string)
                .unwrap_or_else(|| format!("Node {}", i + 1));
            let description = field_str(data, &["description"])
                .or_else(|| field_str(entry, &["description"]))
                .unwrap_or("")
                .to_string();
            let link = data
                .get("link")
                .and_then(Value::as_str)
                .or_else(|| entry.get("link").and_then(Value::as_str))
                .map(str::to_string);
            let level = field_str(data, &["level"])
                .or_else(|| field_str(entry, &["level"]))
                .map(Level::parse_or_default)
                .unwrap_or_default();

            NodeSpec {
                id,
                label,
                description,
                link,
                level,
            }
        })
        .collect()
}

fn normalize_edges(entries: &[Value]) -> Vec<EdgeSpec> {
    let mut used: FxHashSet<String> = FxHashSet::default();
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let id = unique_id("edge", i, coerce_id(entry.get("id")), &mut used);
            let kind = field_str(entry, &["type"])
                .unwrap_or(DEFAULT_EDGE_KIND)
                .to_string();
            let animated = entry
                .get("animated")
                .and_then(Value::as_bool)
                .unwrap_or(false);

            EdgeSpec {
                id,
                // Endpoints are coerced, never validated: edges pointing at
                // nothing survive sanitization and are dropped by the builder.
                source: coerce_id(entry.get("source")).unwrap_or_default(),
                target: coerce_id(entry.get("target")).unwrap_or_default(),
                kind,
                animated,
            }
        })
        .collect()
}

/// First non-empty string under any of `keys`.
fn field_str<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .find_map(|k| value.get(k).and_then(Value::as_str).filter(|s| !s.is_empty()))
}

fn text_field(value: &Value, keys: &[&str], default: &str) -> String {
    field_str(value, keys).unwrap_or(default).to_string()
}

fn array_field<'a>(value: &'a Value, keys: &[&str]) -> &'a [Value] {
    keys.iter()
        .find_map(|k| value.get(k).and_then(Value::as_array))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// String or numeric ids are accepted; anything else is treated as absent.
fn coerce_id(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Keeps `explicit` when it is unused, otherwise synthesizes a positional id,
/// probing `<prefix>-<i>-2`, `-3`, ... past any remaining collisions.
fn unique_id(
    prefix: &str,
    i: usize,
    explicit: Option<String>,
    used: &mut FxHashSet<String>,
) -> String {
    if let Some(id) = explicit {
        if used.insert(id.clone()) {
            return id;
        }
    }
    let mut candidate = format!("{prefix}-{i}");
    let mut n = 2;
    while !used.insert(candidate.clone()) {
        candidate = format!("{prefix}-{i}-{n}");
        n += 1;
    }
    candidate
}
