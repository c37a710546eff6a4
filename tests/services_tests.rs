use chat_relay::services::inference::{InferenceBackend, InferenceError, LmStudioClient};
use chat_relay::services::search::{ElasticsearchIndex, SearchError, SearchIndex, SearchOutcome};

use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn search_hits(answers: &[&str]) -> serde_json::Value {
    let hits: Vec<_> = answers
        .iter()
        .enumerate()
        .map(|(i, a)| {
            json!({
                "_index": "chatbot",
                "_id": i.to_string(),
                "_score": 2.0 - i as f64,
                "_source": { "question": "q", "answer": a }
            })
        })
        .collect();
    json!({ "took": 1, "hits": { "total": { "value": hits.len(), "relation": "eq" }, "hits": hits } })
}

#[tokio::test]
async fn test_search_sends_match_query_and_takes_top_hit() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chatbot/_search"))
        .and(body_json(json!({ "query": { "match": { "question": "What are your hours?" } } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_hits(&["9 to 5", "never"])))
        .expect(1)
        .mount(&server)
        .await;

    let index = ElasticsearchIndex::new(reqwest::Client::new(), server.uri(), "chatbot");
    let outcome = index.best_answer("What are your hours?").await.unwrap();

    assert_eq!(outcome, SearchOutcome::Match("9 to 5".to_string()));
}

#[tokio::test]
async fn test_search_without_hits_is_no_match() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chatbot/_search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_hits(&[])))
        .mount(&server)
        .await;

    let index = ElasticsearchIndex::new(reqwest::Client::new(), server.uri(), "chatbot");
    assert_eq!(index.best_answer("anything").await.unwrap(), SearchOutcome::NoMatch);
}

#[tokio::test]
async fn test_search_error_status_is_an_error_not_a_miss() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chatbot/_search"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": { "type": "index_not_found_exception" }, "status": 404
        })))
        .mount(&server)
        .await;

    let index = ElasticsearchIndex::new(reqwest::Client::new(), server.uri(), "chatbot");
    let err = index.best_answer("anything").await.unwrap_err();

    assert!(matches!(err, SearchError::Status(s) if s.as_u16() == 404));
}

#[tokio::test]
async fn test_search_hit_without_answer_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hits": { "hits": [{ "_source": { "question": "q" } }] }
        })))
        .mount(&server)
        .await;

    let index = ElasticsearchIndex::new(reqwest::Client::new(), server.uri(), "chatbot");
    let err = index.best_answer("q").await.unwrap_err();

    assert!(matches!(err, SearchError::MissingAnswer));
}

#[tokio::test]
async fn test_search_non_string_answer_is_returned_as_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chatbot/_search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hits": { "hits": [{ "_source": { "question": "How many days a week?", "answer": 5 } }] }
        })))
        .mount(&server)
        .await;

    let index = ElasticsearchIndex::new(reqwest::Client::new(), server.uri(), "chatbot");
    let outcome = index.best_answer("How many days a week?").await.unwrap();

    assert_eq!(outcome, SearchOutcome::Match("5".to_string()));
}

#[tokio::test]
async fn test_search_unreachable_is_request_error() {
    // Nothing listens on the discard port.
    let index = ElasticsearchIndex::new(reqwest::Client::new(), "http://127.0.0.1:9", "chatbot");
    let err = index.best_answer("q").await.unwrap_err();

    assert!(matches!(err, SearchError::Request(_)));
}

#[tokio::test]
async fn test_inference_request_shape_and_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(json!({
            "model": "dolphin3.0-llama3.1-8b",
            "messages": [{ "role": "user", "content": "Capital of France?" }],
            "temperature": 0.7,
            "max_tokens": -1,
            "stream": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "Paris." },
                "finish_reason": "stop"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = LmStudioClient::new(
        reqwest::Client::new(),
        format!("{}/v1/chat/completions", server.uri()),
    );

    assert_eq!(client.complete("Capital of France?").await.unwrap(), "Paris.");
}

#[tokio::test]
async fn test_inference_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = LmStudioClient::new(reqwest::Client::new(), server.uri());
    let err = client.complete("hi").await.unwrap_err();

    assert!(matches!(err, InferenceError::Status(s) if s.as_u16() == 500));
}

#[tokio::test]
async fn test_inference_empty_choices() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let client = LmStudioClient::new(reqwest::Client::new(), server.uri());
    let err = client.complete("hi").await.unwrap_err();

    assert!(matches!(err, InferenceError::NoChoices));
}

#[tokio::test]
async fn test_inference_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = LmStudioClient::new(reqwest::Client::new(), server.uri());
    let err = client.complete("hi").await.unwrap_err();

    assert!(matches!(err, InferenceError::Request(_)));
}
