//! Resolve one dot-separated field path against one record.

use serde_json::Value;
use ticketforge_domain::{FieldDescriptor, Member, Projectable};
use tracing::debug;

/// Maximum number of path segments followed before giving up.
///
/// Record graphs here are acyclic, but paths are caller-supplied.
const MAX_DEPTH: usize = 16;

/// Resolve `path` against `record`.
///
/// Returns `None` when any segment fails to match, an optional
/// reference along the way is absent, or a terminal value is reached
/// with path segments remaining. `Some(Value::Null)` means the path
/// resolved to a value that is present but null.
pub fn resolve_path(record: &dyn Projectable, path: &str) -> Option<Value> {
    debug!(path, "resolving field path");
    let segments: Vec<&str> = path.split('.').collect();
    resolve_member(Member::Record(record), &segments, 0)
}

fn resolve_member(current: Member<'_>, segments: &[&str], depth: usize) -> Option<Value> {
    if depth > MAX_DEPTH {
        return None;
    }

    match current {
        // Absent optional reference: ordinary not-found, whether or
        // not segments remain.
        Member::Absent => None,

        Member::Record(record) => {
            let Some((segment, rest)) = segments.split_first() else {
                return Some(record.to_value());
            };
            let index = lookup(record.descriptors(), segment)?;
            resolve_member(record.member(index), rest, depth + 1)
        }

        Member::Value(value) => {
            let Some((segment, rest)) = segments.split_first() else {
                return Some(value);
            };
            match value {
                // String-keyed dictionary: exact key first, then a
                // case-insensitive scan.
                Value::Object(map) => {
                    let entry = map.get(*segment).cloned().or_else(|| {
                        map.iter()
                            .find(|(key, _)| key.eq_ignore_ascii_case(segment))
                            .map(|(_, nested)| nested.clone())
                    })?;
                    resolve_member(Member::Value(entry), rest, depth + 1)
                }
                // Terminal value with path remaining.
                _ => None,
            }
        }
    }
}

/// Two-phase descriptor lookup: declared names first, serialization
/// aliases second, both case-insensitive. A name match on one member
/// beats an alias match on another. Skipped members are invisible to
/// both phases.
fn lookup(descriptors: &[FieldDescriptor], segment: &str) -> Option<usize> {
    descriptors
        .iter()
        .position(|d| !d.skip && d.name.eq_ignore_ascii_case(segment))
        .or_else(|| {
            descriptors
                .iter()
                .position(|d| !d.skip && d.alias.eq_ignore_ascii_case(segment))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use serde_json::json;

    /// A record with an alias that differs from its declared name, a
    /// skipped member, an optional nested record, and a dictionary.
    #[derive(Serialize)]
    struct Ticket {
        key: String,
        #[serde(rename = "self")]
        self_url: String,
        #[serde(skip)]
        token: String,
        nested: Option<Nested>,
        properties: serde_json::Map<String, Value>,
    }

    #[derive(Serialize)]
    struct Nested {
        value: String,
    }

    const TICKET_DESCRIPTORS: &[FieldDescriptor] = &[
        FieldDescriptor::new("key", "key"),
        FieldDescriptor::new("self_url", "self"),
        FieldDescriptor::skipped("token", "token"),
        FieldDescriptor::new("nested", "nested"),
        FieldDescriptor::new("properties", "properties"),
    ];

    impl Projectable for Ticket {
        fn descriptors(&self) -> &'static [FieldDescriptor] {
            TICKET_DESCRIPTORS
        }

        fn member(&self, index: usize) -> Member<'_> {
            match index {
                0 => Member::Value(Value::String(self.key.clone())),
                1 => Member::Value(Value::String(self.self_url.clone())),
                2 => Member::Value(Value::String(self.token.clone())),
                3 => match &self.nested {
                    Some(nested) => Member::Record(nested),
                    None => Member::Absent,
                },
                4 => Member::Value(Value::Object(self.properties.clone())),
                _ => Member::Absent,
            }
        }

        fn to_value(&self) -> Value {
            serde_json::to_value(self).unwrap()
        }
    }

    const NESTED_DESCRIPTORS: &[FieldDescriptor] = &[FieldDescriptor::new("value", "value")];

    impl Projectable for Nested {
        fn descriptors(&self) -> &'static [FieldDescriptor] {
            NESTED_DESCRIPTORS
        }

        fn member(&self, index: usize) -> Member<'_> {
            match index {
                0 => Member::Value(Value::String(self.value.clone())),
                _ => Member::Absent,
            }
        }

        fn to_value(&self) -> Value {
            serde_json::to_value(self).unwrap()
        }
    }

    fn ticket(nested: Option<Nested>) -> Ticket {
        let mut properties = serde_json::Map::new();
        properties.insert("Team".to_string(), json!("platform"));
        properties.insert("points".to_string(), json!(5));
        Ticket {
            key: "WEB-7".to_string(),
            self_url: "https://tickets.example.com/issue/7".to_string(),
            token: "secret".to_string(),
            nested,
            properties,
        }
    }

    #[test]
    fn test_resolve_by_name_case_insensitive() {
        let t = ticket(None);
        assert_eq!(resolve_path(&t, "KEY"), Some(json!("WEB-7")));
    }

    #[test]
    fn test_resolve_by_alias() {
        // "self" differs case-insensitively from the declared name
        let t = ticket(None);
        assert_eq!(
            resolve_path(&t, "self"),
            Some(json!("https://tickets.example.com/issue/7"))
        );
        assert_eq!(
            resolve_path(&t, "Self_Url"),
            Some(json!("https://tickets.example.com/issue/7"))
        );
    }

    #[test]
    fn test_skipped_member_unresolvable_by_name_or_alias() {
        let t = ticket(None);
        assert_eq!(resolve_path(&t, "token"), None);
    }

    #[test]
    fn test_absent_nested_reference_is_not_found() {
        let t = ticket(None);
        assert_eq!(resolve_path(&t, "Nested.Value"), None);
    }

    #[test]
    fn test_present_nested_reference_resolves() {
        let t = ticket(Some(Nested {
            value: "inner".to_string(),
        }));
        assert_eq!(resolve_path(&t, "nested.value"), Some(json!("inner")));
    }

    #[test]
    fn test_path_ending_on_record_yields_encoded_record() {
        let t = ticket(Some(Nested {
            value: "inner".to_string(),
        }));
        assert_eq!(resolve_path(&t, "nested"), Some(json!({"value": "inner"})));
    }

    #[test]
    fn test_dictionary_exact_then_case_insensitive() {
        let t = ticket(None);
        assert_eq!(resolve_path(&t, "properties.Team"), Some(json!("platform")));
        assert_eq!(resolve_path(&t, "properties.team"), Some(json!("platform")));
        assert_eq!(resolve_path(&t, "properties.POINTS"), Some(json!(5)));
    }

    #[test]
    fn test_dictionary_exact_match_wins_over_scan() {
        let mut t = ticket(None);
        t.properties.insert("team".to_string(), json!("exact"));
        assert_eq!(resolve_path(&t, "properties.team"), Some(json!("exact")));
    }

    #[test]
    fn test_terminal_with_remaining_path_is_not_found() {
        let t = ticket(None);
        assert_eq!(resolve_path(&t, "key.anything"), None);
    }

    #[test]
    fn test_unknown_segment_is_not_found() {
        let t = ticket(None);
        assert_eq!(resolve_path(&t, "missingField"), None);
    }

    #[test]
    fn test_name_match_beats_alias_match_on_other_member() {
        // "beta" is the declared name of one member and the alias of
        // another; the declared name must win.
        #[derive(Serialize)]
        struct Clash {
            alpha: String,
            beta: String,
        }

        const CLASH_DESCRIPTORS: &[FieldDescriptor] = &[
            FieldDescriptor::new("alpha", "beta"),
            FieldDescriptor::new("beta", "gamma"),
        ];

        impl Projectable for Clash {
            fn descriptors(&self) -> &'static [FieldDescriptor] {
                CLASH_DESCRIPTORS
            }

            fn member(&self, index: usize) -> Member<'_> {
                match index {
                    0 => Member::Value(Value::String(self.alpha.clone())),
                    1 => Member::Value(Value::String(self.beta.clone())),
                    _ => Member::Absent,
                }
            }

            fn to_value(&self) -> Value {
                serde_json::to_value(self).unwrap()
            }
        }

        let clash = Clash {
            alpha: "from-alias".to_string(),
            beta: "from-name".to_string(),
        };
        assert_eq!(resolve_path(&clash, "beta"), Some(json!("from-name")));
        assert_eq!(resolve_path(&clash, "gamma"), Some(json!("from-name")));
    }

    #[test]
    fn test_depth_limit_stops_runaway_paths() {
        let mut deep = json!("leaf");
        for _ in 0..40 {
            deep = json!({ "next": deep });
        }
        let mut t = ticket(None);
        t.properties.insert("deep".to_string(), deep);

        let path = format!("properties.deep.{}", vec!["next"; 40].join("."));
        assert_eq!(resolve_path(&t, &path), None);

        let shallow = format!("properties.deep.{}", vec!["next"; 5].join("."));
        assert!(resolve_path(&t, &shallow).is_some());
    }
}
