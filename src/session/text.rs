//! # Text Rendering
//!
//! Serializes assembled results to JSON with `serde_json`. A failed fetch or
//! a failed encoding yields the operation's empty text paired with the
//! error, so callers always receive parseable output.

use crate::config::{EMPTY_COLLECTION_TEXT, EMPTY_RECORD_TEXT};
use crate::error::{MappingError, Result, TextError};
use serde::Serialize;

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

pub(super) fn render_all<R: Serialize>(
    fetched: Result<Vec<R>>,
    pretty: bool,
) -> Result<String, TextError> {
    let records = fetched.map_err(|e| TextError::new(EMPTY_COLLECTION_TEXT, e))?;
    to_json(records.as_slice(), pretty)
        .map_err(|e| TextError::new(EMPTY_COLLECTION_TEXT, MappingError::from(e)))
}

pub(super) fn render_one<R: Serialize>(
    fetched: Result<Option<R>>,
    pretty: bool,
) -> Result<String, TextError> {
    match fetched {
        Ok(Some(record)) => to_json(&record, pretty)
            .map_err(|e| TextError::new(EMPTY_RECORD_TEXT, MappingError::from(e))),
        Ok(None) => Ok(EMPTY_RECORD_TEXT.to_string()),
        Err(e) => Err(TextError::new(EMPTY_RECORD_TEXT, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::Error as _;
    use std::collections::HashMap;

    #[derive(Serialize)]
    struct Row {
        id: i64,
        name: &'static str,
    }

    fn unmatched() -> MappingError {
        MappingError::UnmatchedColumn {
            position: 0,
            name: "x".to_string(),
        }
    }

    #[test]
    fn rows_render_as_json_array() {
        let text = render_all(
            Ok(vec![Row { id: 1, name: "a" }, Row { id: 2, name: "b" }]),
            false,
        )
        .unwrap();
        assert_eq!(text, r#"[{"id":1,"name":"a"},{"id":2,"name":"b"}]"#);
    }

    #[test]
    fn no_rows_render_as_empty_array() {
        let text = render_all::<Row>(Ok(vec![]), false).unwrap();
        assert_eq!(text, "[]");
    }

    #[test]
    fn failed_fetch_renders_empty_array_with_error() {
        let err = render_all::<Row>(Err(unmatched()), false).unwrap_err();
        assert_eq!(err.text(), "[]");
        assert!(matches!(err.error(), MappingError::UnmatchedColumn { .. }));
    }

    #[test]
    fn single_row_renders_as_object() {
        let text = render_one(Ok(Some(Row { id: 7, name: "z" })), false).unwrap();
        assert_eq!(text, r#"{"id":7,"name":"z"}"#);
    }

    #[test]
    fn missing_row_and_failure_both_render_empty_text() {
        assert_eq!(render_one::<Row>(Ok(None), false).unwrap(), "");

        let err = render_one::<Row>(Err(unmatched()), false).unwrap_err();
        assert_eq!(err.text(), "");
    }

    #[test]
    fn pretty_output_is_indented() {
        let text = render_one(Ok(Some(Row { id: 1, name: "a" })), true).unwrap();
        assert_eq!(text, "{\n  \"id\": 1,\n  \"name\": \"a\"\n}");
    }

    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> std::result::Result<S::Ok, S::Error> {
            Err(S::Error::custom("not encodable"))
        }
    }

    #[test]
    fn encoding_failure_keeps_fallback_text() {
        let err = render_all(Ok(vec![Unencodable]), false).unwrap_err();
        assert_eq!(err.text(), "[]");
        assert!(matches!(err.error(), MappingError::Serialization(_)));

        let err = render_one(Ok(Some(Unencodable)), false).unwrap_err();
        assert_eq!(err.text(), "");
    }

    #[test]
    fn non_string_map_keys_fail_to_encode() {
        let mut map = HashMap::new();
        map.insert(vec![1u8], 1);
        let err = render_one(Ok(Some(map)), false).unwrap_err();
        assert!(matches!(err.error(), MappingError::Serialization(_)));
    }
}
