//! URL extraction: walk a parsed save file and group URLs by the JSON key
//! under which they occur (`MeshURL`, `DiffuseURL`, ...).
//!
//! Groups key on the raw JSON key string, verbatim. A URL directly inside an
//! array has no key and is not captured; this matches the original tool and
//! is relied on by downstream stages.

use serde_json::Value;
use std::collections::HashMap;

/// Insertion-ordered map from group name to the URLs found under that key.
/// Discovery order is preserved, duplicates and all.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UrlGroups {
    names: Vec<String>,
    by_name: HashMap<String, Vec<String>>,
}

impl UrlGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `url` to `group`, creating the group on first sight.
    pub fn push(&mut self, group: &str, url: String) {
        match self.by_name.get_mut(group) {
            Some(urls) => urls.push(url),
            None => {
                self.names.push(group.to_string());
                self.by_name.insert(group.to_string(), vec![url]);
            }
        }
    }

    pub fn get(&self, group: &str) -> Option<&[String]> {
        self.by_name.get(group).map(Vec::as_slice)
    }

    /// Groups in discovery order, each with its URLs in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.names
            .iter()
            .map(move |name| (name.as_str(), self.by_name[name].as_slice()))
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Total URL count across all groups (duplicates included).
    pub fn total_urls(&self) -> usize {
        self.by_name.values().map(Vec::len).sum()
    }
}

/// True for strings that start with `http://` or `https://` followed by at
/// least one non-whitespace character. Only the prefix is validated.
fn is_http_url(s: &str) -> bool {
    let rest = s
        .strip_prefix("http://")
        .or_else(|| s.strip_prefix("https://"));
    matches!(rest.and_then(|r| r.chars().next()), Some(c) if !c.is_whitespace())
}

/// Walks `value` depth-first and collects every URL string that is the direct
/// value of an object key, grouped under that key.
pub fn extract_urls(value: &Value) -> UrlGroups {
    let mut groups = UrlGroups::new();
    walk(value, &mut groups);
    groups
}

fn walk(value: &Value, groups: &mut UrlGroups) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                if let Value::String(s) = child {
                    if is_http_url(s) {
                        groups.push(key, s.clone());
                    }
                }
                walk(child, groups);
            }
        }
        Value::Array(items) => {
            for item in items {
                walk(item, groups);
            }
        }
        // Strings are matched at their parent object; scalars carry no URLs.
        _ => {}
    }
}
