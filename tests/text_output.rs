//! # Integration Tests for JSON Text Output
//!
//! Exercises `fetch_all_as_text` and `fetch_one_as_text` against SQLite,
//! including the fallback text every failure carries.
//!
//! ## Running Tests
//!
//! ```sh
//! cargo test --test text_output
//! ```

use serde::Serialize;
use turmap::driver::SqliteConnection;
use turmap::{impl_record, MapperConfig, MappingError, Session};

#[derive(Debug, Default, Serialize)]
#[allow(non_snake_case)]
struct Person {
    Id: i64,
    Name: String,
}

impl_record!(Person { Id, Name });

#[derive(Debug, Default, Serialize)]
struct Note {
    id: i64,
    #[serde(rename = "body")]
    text: Option<String>,
}

impl_record!(Note { id, text => "content" });

fn session() -> Session {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE people (id INTEGER, name TEXT, nickname TEXT);
         INSERT INTO people VALUES (1, 'a', 'ay');
         INSERT INTO people VALUES (2, 'b', 'bee');
         CREATE TABLE notes (id INTEGER, content TEXT);
         INSERT INTO notes VALUES (1, 'hello');
         INSERT INTO notes VALUES (2, NULL);",
    )
    .unwrap();
    Session::from_connection(Box::new(SqliteConnection::new(conn)), "sqlite", ":memory:")
}

mod fetch_all_as_text_tests {
    use super::*;

    #[test]
    fn rows_render_as_json_array() {
        let text = session()
            .fetch_all_as_text::<Person>("SELECT id, name FROM people ORDER BY id")
            .unwrap();
        assert_eq!(text, r#"[{"Id":1,"Name":"a"},{"Id":2,"Name":"b"}]"#);
    }

    #[test]
    fn empty_result_renders_empty_array() {
        let text = session()
            .fetch_all_as_text::<Person>("SELECT id, name FROM people WHERE id < 0")
            .unwrap();
        assert_eq!(text, "[]");
    }

    #[test]
    fn failure_carries_empty_array_text() {
        let err = session()
            .fetch_all_as_text::<Person>("SELECT id, nickname FROM people")
            .unwrap_err();

        assert_eq!(err.text(), "[]");
        assert_eq!(err.to_string(), "No match for column 1: nickname");

        let (text, error) = err.into_parts();
        assert_eq!(text, "[]");
        assert!(matches!(error, MappingError::UnmatchedColumn { position: 1, .. }));
    }

    #[test]
    fn serde_attributes_shape_the_output() {
        let text = session()
            .fetch_all_as_text::<Note>("SELECT id, content FROM notes ORDER BY id")
            .unwrap();
        assert_eq!(text, r#"[{"id":1,"body":"hello"},{"id":2,"body":null}]"#);
    }

    #[test]
    fn output_parses_back_as_json() {
        let text = session()
            .fetch_all_as_text::<Person>("SELECT id, name FROM people ORDER BY id")
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.as_array().map(Vec::len), Some(2));
        assert_eq!(parsed[1]["Name"], "b");
    }
}

mod fetch_one_as_text_tests {
    use super::*;

    #[test]
    fn first_row_renders_as_object() {
        let text = session()
            .fetch_one_as_text::<Person>("SELECT id, name FROM people ORDER BY id DESC")
            .unwrap();
        assert_eq!(text, r#"{"Id":2,"Name":"b"}"#);
    }

    #[test]
    fn missing_row_renders_empty_string() {
        let text = session()
            .fetch_one_as_text::<Person>("SELECT id, name FROM people WHERE id = 99")
            .unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn failure_carries_empty_string() {
        let err = session()
            .fetch_one_as_text::<Person>("SELECT nickname FROM people")
            .unwrap_err();
        assert_eq!(err.text(), "");
        assert!(matches!(err.error(), MappingError::UnmatchedColumn { position: 0, .. }));
    }

    #[test]
    fn query_failure_carries_empty_string() {
        let err = session()
            .fetch_one_as_text::<Person>("SELEC id FROM people")
            .unwrap_err();
        assert_eq!(err.text(), "");
        assert!(matches!(err.error(), MappingError::QueryExecution { .. }));
    }

    #[test]
    fn pretty_config_indents_output() {
        let session = session().with_config(MapperConfig::default().with_pretty_text(true));
        let text = session
            .fetch_one_as_text::<Person>("SELECT id, name FROM people ORDER BY id")
            .unwrap();
        assert_eq!(text, "{\n  \"Id\": 1,\n  \"Name\": \"a\"\n}");
    }
}
