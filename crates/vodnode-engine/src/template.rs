//! URL template substitution.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{AsRefStr, Display, EnumString};
use vodnode_catalog::template::placeholders;

use crate::error::{DispatchError, DispatchResult};

/// Handling of `{name?}` placeholders without a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(Serialize, Deserialize, AsRefStr, Display, EnumString)]
#[cfg_attr(feature = "config", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OptionalSegments {
    /// The value is required like any other placeholder.
    #[default]
    Require,
    /// The placeholder and its leading `/` are dropped from the URL.
    Omit,
}

/// Replaces every `{name}` in `template` with the percent-encoded value of
/// `values[name]`.
///
/// # Errors
///
/// Returns [`DispatchError::MissingPathParameter`] when a value is undefined,
/// `null` or an empty string, unless the placeholder is optional and
/// `segments` is [`OptionalSegments::Omit`].
pub fn substitute(
    template: &str,
    values: &Map<String, Value>,
    segments: OptionalSegments,
) -> DispatchResult<String> {
    let mut endpoint = String::with_capacity(template.len());
    let mut copied = 0;

    for placeholder in placeholders(template) {
        let literal = &template[copied..placeholder.span.start];
        copied = placeholder.span.end;

        match values.get(placeholder.name).and_then(segment_text) {
            Some(text) => {
                endpoint.push_str(literal);
                endpoint.push_str(&urlencoding::encode(&text));
            }
            None if placeholder.optional && segments == OptionalSegments::Omit => {
                endpoint.push_str(literal.strip_suffix('/').unwrap_or(literal));
            }
            None => {
                return Err(DispatchError::MissingPathParameter(
                    placeholder.name.to_owned(),
                ));
            }
        }
    }

    endpoint.push_str(&template[copied..]);
    Ok(endpoint)
}

fn segment_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::Null => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(Cow::Borrowed(text)),
        value => Some(Cow::Owned(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn values(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_substitute_encodes_values() {
        let endpoint = substitute(
            "/a/{x}/b/{y}",
            &values(json!({"x": "1", "y": "two words"})),
            OptionalSegments::Require,
        )
        .unwrap();
        assert_eq!(endpoint, "/a/1/b/two%20words");
    }

    #[test]
    fn test_substitute_scalar_text() {
        let endpoint = substitute(
            "/n/{n}/b/{b}",
            &values(json!({"n": 42, "b": true})),
            OptionalSegments::Require,
        )
        .unwrap();
        assert_eq!(endpoint, "/n/42/b/true");
    }

    #[test]
    fn test_substitute_reserved_characters() {
        let endpoint = substitute(
            "/media/{id}",
            &values(json!({"id": "a/b?c"})),
            OptionalSegments::Require,
        )
        .unwrap();
        assert_eq!(endpoint, "/media/a%2Fb%3Fc");
    }

    #[test]
    fn test_missing_values() {
        for row in [json!({"x": "1"}), json!({"x": "1", "y": null}), json!({"x": "1", "y": ""})] {
            let error =
                substitute("/a/{x}/b/{y}", &values(row), OptionalSegments::Require).unwrap_err();
            assert!(matches!(error, DispatchError::MissingPathParameter(name) if name == "y"));
        }
    }

    #[test]
    fn test_optional_placeholder() {
        let template = "/media/{media_id}/files/{file?}";

        let endpoint = substitute(
            template,
            &values(json!({"media_id": "m1", "file": "hd"})),
            OptionalSegments::Require,
        )
        .unwrap();
        assert_eq!(endpoint, "/media/m1/files/hd");

        let error = substitute(
            template,
            &values(json!({"media_id": "m1"})),
            OptionalSegments::Require,
        )
        .unwrap_err();
        assert!(matches!(error, DispatchError::MissingPathParameter(name) if name == "file"));

        let endpoint = substitute(
            template,
            &values(json!({"media_id": "m1"})),
            OptionalSegments::Omit,
        )
        .unwrap();
        assert_eq!(endpoint, "/media/m1/files");
    }

    #[test]
    fn test_no_placeholders_and_unterminated_brace() {
        let empty = Map::new();
        assert_eq!(
            substitute("/channels", &empty, OptionalSegments::Require).unwrap(),
            "/channels"
        );
        assert_eq!(
            substitute("/odd/{", &empty, OptionalSegments::Require).unwrap(),
            "/odd/{"
        );
    }

    #[test]
    fn test_optional_segments_strings() {
        assert_eq!(OptionalSegments::default().to_string(), "require");
        assert_eq!("omit".parse::<OptionalSegments>().unwrap(), OptionalSegments::Omit);
    }
}
