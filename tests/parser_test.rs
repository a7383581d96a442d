//! Response parser integration tests

mod common;

use newsdesk::models::Article;
use newsdesk::parser::{parse_articles, parse_file, parse_reader};
use newsdesk::utils::error::ParseError;
use proptest::prelude::*;
use serde_json::{json, Value};

// ============================================================================
// Fixture Response
// ============================================================================

#[test]
fn test_fixture_response() {
    let body = common::load_fixture("search_response.json");
    let articles = parse_articles(&body).unwrap();

    assert_eq!(articles.len(), 3);

    assert_eq!(
        articles[0].title(),
        "Android P beta: hands-on with Google's next big update"
    );
    assert_eq!(articles[0].author_name(), Some("Samuel Gibbs"));
    assert_eq!(articles[0].section_name(), Some("Technology"));
    assert_eq!(articles[0].published_at(), Some("2018-05-27T08:00:20Z"));
    assert_eq!(
        articles[0].url(),
        "https://www.theguardian.com/technology/2018/may/27/android-p-beta-hands-on"
    );

    // Two contributors: the last one is kept
    assert_eq!(articles[1].author_name(), Some("Samuel Gibbs"));

    // No tags at all
    assert_eq!(articles[2].author_name(), None);
    assert_eq!(articles[2].section_name(), Some("Opinion"));
}

#[test]
fn test_parse_file_matches_parse_articles() {
    let path = std::path::Path::new(common::FIXTURES_DIR).join("search_response.json");
    let from_file = parse_file(&path).unwrap();
    let from_str = parse_articles(&common::load_fixture("search_response.json")).unwrap();
    assert_eq!(from_file, from_str);
}

#[test]
fn test_parse_missing_file() {
    let err = parse_file(std::path::Path::new("tests/fixtures/missing.json")).unwrap_err();
    assert!(matches!(err, ParseError::Io(_)));
}

// ============================================================================
// Documented Examples
// ============================================================================

#[test]
fn test_end_to_end_example() {
    let body = r#"{"response":{"results":[{"webTitle":"A|B","sectionName":"Tech","webPublicationDate":"2018-05-27T08:00:20Z","webUrl":"http://x","tags":[{"webTitle":"B"}]}]}}"#;
    let articles = parse_articles(body).unwrap();

    assert_eq!(articles.len(), 1);
    let article = &articles[0];
    assert_eq!(article.title(), "A|B");
    assert_eq!(article.author_name(), Some("B"));
    assert_eq!(article.section_name(), Some("Tech"));
    assert_eq!(article.published_at(), Some("2018-05-27T08:00:20Z"));
    assert_eq!(article.url(), "http://x");
}

#[test]
fn test_round_trip_fixtures() {
    let fixtures = common::fixture_articles();
    let payload = common::search_payload(fixtures.iter().map(common::article_json).collect());

    let parsed = parse_articles(&payload).unwrap();
    assert_eq!(parsed, fixtures);
}

#[test]
fn test_order_preserved() {
    let results: Vec<Value> = (0..20)
        .map(|i| json!({ "webTitle": format!("Article {i}"), "webUrl": format!("http://x/{i}") }))
        .collect();
    let articles = parse_articles(&common::search_payload(results)).unwrap();

    assert_eq!(articles.len(), 20);
    for (i, article) in articles.iter().enumerate() {
        assert_eq!(article.title(), format!("Article {i}"));
    }
}

// ============================================================================
// Author Tags
// ============================================================================

#[test]
fn test_no_tags_means_no_author() {
    let body = r#"{"response":{"results":[{"webTitle":"T","webUrl":"u"}]}}"#;
    assert_eq!(parse_articles(body).unwrap()[0].author_name(), None);
}

#[test]
fn test_empty_tags_means_no_author() {
    let body = r#"{"response":{"results":[{"webTitle":"T","webUrl":"u","tags":[]}]}}"#;
    assert_eq!(parse_articles(body).unwrap()[0].author_name(), None);
}

#[test]
fn test_last_tag_wins() {
    let body = r#"{"response":{"results":[{"webTitle":"T","webUrl":"u","tags":[
        {"webTitle":"First"},
        {"webTitle":"Second"},
        {"webTitle":"Third"}
    ]}]}}"#;
    assert_eq!(parse_articles(body).unwrap()[0].author_name(), Some("Third"));
}

#[test]
fn test_tag_without_title_does_not_clear_author() {
    let body = r#"{"response":{"results":[{"webTitle":"T","webUrl":"u","tags":[
        {"webTitle":"First"},
        {"id":"keyword/android","type":"keyword"}
    ]}]}}"#;
    assert_eq!(parse_articles(body).unwrap()[0].author_name(), Some("First"));
}

#[test]
fn test_tags_do_not_leak_between_articles() {
    let body = r#"{"response":{"results":[
        {"webTitle":"One","webUrl":"u1","tags":[{"webTitle":"Author One"}]},
        {"webTitle":"Two","webUrl":"u2"}
    ]}}"#;
    let articles = parse_articles(body).unwrap();
    assert_eq!(articles[0].author_name(), Some("Author One"));
    assert_eq!(articles[1].author_name(), None);
}

#[test]
fn test_tag_title_does_not_override_article_title() {
    let body = r#"{"response":{"results":[{"tags":[{"webTitle":"Author"}],"webTitle":"Headline","webUrl":"u"}]}}"#;
    let article = &parse_articles(body).unwrap()[0];
    assert_eq!(article.title(), "Headline");
    assert_eq!(article.author_name(), Some("Author"));
}

// ============================================================================
// Unknown Fields
// ============================================================================

#[test]
fn test_unknown_keys_of_every_shape_are_skipped() {
    let body = r#"{
        "meta": {"nested": [1, 2, {"deep": [true, null]}]},
        "response": {
            "status": "ok",
            "pages": 7,
            "leadContent": [{"webTitle": "Not an article"}],
            "results": [
                {
                    "webTitle": "T",
                    "webUrl": "u",
                    "fields": {"headline": "Other", "webTitle": "ignored"},
                    "blocks": [[], [{}]],
                    "score": 1.5e3,
                    "tags": [{"webTitle": "A", "references": [{"id": "x"}], "extra": {"webTitle": "no"}}]
                }
            ],
            "edition": {"id": "uk"}
        },
        "trailer": "done"
    }"#;

    let articles = parse_articles(body).unwrap();
    assert_eq!(articles, vec![Article::new("T", "u").with_author(Some("A".to_string()))]);
}

#[test]
fn test_results_outside_response_ignored() {
    let body = r#"{"results":[{"webTitle":"T","webUrl":"u"}],"response":{"total":0}}"#;
    assert!(parse_articles(body).unwrap().is_empty());
}

// ============================================================================
// Empty and Malformed Input
// ============================================================================

#[test]
fn test_empty_payload_is_empty_list() {
    assert!(parse_articles("").unwrap().is_empty());
    assert!(parse_reader(std::io::empty()).unwrap().is_empty());
}

#[test]
fn test_empty_results_is_empty_list() {
    assert!(parse_articles(r#"{"response":{"results":[]}}"#).unwrap().is_empty());
    assert!(parse_articles(r#"{"response":{}}"#).unwrap().is_empty());
}

#[test]
fn test_truncated_payload_is_error() {
    let err = parse_articles(r#"{"response":"#).unwrap_err();
    assert!(matches!(err, ParseError::Malformed { .. }), "got {err:?}");
}

#[test]
fn test_truncated_fixture_is_error_not_partial_list() {
    let body = common::load_fixture("search_response.json");
    let truncated = &body[..body.len() / 2];
    assert!(parse_articles(truncated).is_err());
}

#[test]
fn test_unbalanced_structure_is_error() {
    let err = parse_articles(r#"{"response":{"results":[{"webTitle":"T"}}}"#).unwrap_err();
    assert!(matches!(err, ParseError::Malformed { .. }), "got {err:?}");
}

#[test]
fn test_trailing_garbage_is_error() {
    let err = parse_articles(r#"{"response":{"results":[]}} extra"#).unwrap_err();
    assert!(matches!(err, ParseError::Malformed { .. }), "got {err:?}");
}

#[test]
fn test_results_not_array_is_error() {
    let err = parse_articles(r#"{"response":{"results":{"webTitle":"T"}}}"#).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedShape { .. }), "got {err:?}");
}

#[test]
fn test_wrong_type_for_known_key_is_error() {
    let err = parse_articles(r#"{"response":{"results":[{"webTitle":42,"webUrl":"u"}]}}"#)
        .unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedShape { .. }), "got {err:?}");
}

#[test]
fn test_tag_entry_not_object_is_error() {
    let err = parse_articles(r#"{"response":{"results":[{"webTitle":"T","webUrl":"u","tags":["Author"]}]}}"#)
        .unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedShape { .. }), "got {err:?}");
}

#[test]
fn test_root_not_object_is_error() {
    let err = parse_articles(r#"[{"response":{}}]"#).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedShape { .. }), "got {err:?}");
}

// ============================================================================
// Properties
// ============================================================================

fn unknown_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        "[a-z ]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-zA-Z]{1,8}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn prop_unknown_keys_do_not_change_output(
        key in "x[A-Za-z]{0,10}",
        value in unknown_value(),
        level in 0usize..4,
    ) {
        let fixtures = common::fixture_articles();
        let results: Vec<Value> = fixtures.iter().map(common::article_json).collect();
        let baseline = common::search_payload(results);

        let mut doc: Value = serde_json::from_str(&baseline).unwrap();
        let target = match level {
            0 => doc.as_object_mut().unwrap(),
            1 => doc["response"].as_object_mut().unwrap(),
            2 => doc["response"]["results"][0].as_object_mut().unwrap(),
            _ => doc["response"]["results"][0]["tags"][0].as_object_mut().unwrap(),
        };
        target.insert(key, value);

        let parsed = parse_articles(&doc.to_string()).unwrap();
        prop_assert_eq!(parsed, parse_articles(&baseline).unwrap());
    }

    #[test]
    fn prop_count_matches_results(n in 0usize..30) {
        let results: Vec<Value> = (0..n)
            .map(|i| json!({ "webTitle": format!("t{i}"), "webUrl": format!("u{i}") }))
            .collect();
        let parsed = parse_articles(&common::search_payload(results)).unwrap();
        prop_assert_eq!(parsed.len(), n);
    }
}
