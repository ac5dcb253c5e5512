use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use movie_scout::error::AppError;
use movie_scout::models::{DetailExtras, DiscoverQuery};
use movie_scout::services::inference::{OllamaClient, ProbeOutcome};
use movie_scout::services::providers::{MetadataProvider, TmdbProvider};

const API_KEY: &str = "test_key";

fn provider(server: &MockServer) -> TmdbProvider {
    TmdbProvider::new(API_KEY.to_string(), server.uri())
}

#[tokio::test]
async fn test_list_genres() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/genre/movie/list"))
        .and(query_param("api_key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "genres": [{"id": 28, "name": "Action"}, {"id": 35, "name": "Comedy"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let genres = provider(&server).list_genres().await.unwrap();

    assert_eq!(genres.len(), 2);
    assert_eq!(genres[1].id, 35);
    assert_eq!(genres[1].name, "Comedy");
}

#[tokio::test]
async fn test_search_movies_sends_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .and(query_param("api_key", API_KEY))
        .and(query_param("query", "the matrix"))
        .and(query_param("page", "1"))
        .and(query_param("include_adult", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1,
            "results": [
                {"id": 603, "title": "The Matrix", "release_date": "1999-03-30", "vote_average": 8.2},
                {"id": 604, "title": "The Matrix Reloaded"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let movies = provider(&server).search_movies("the matrix", 1).await.unwrap();

    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].id, Some(603));
    assert_eq!(movies[1].release_date, None);
}

#[tokio::test]
async fn test_discover_preserves_service_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .and(query_param("with_genres", "35"))
        .and(query_param("sort_by", "popularity.desc"))
        .and(query_param("include_adult", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"id": 1, "title": "A", "popularity": 90.5},
                {"id": 2, "title": "B", "popularity": 70.0},
                {"id": 3, "title": "C", "popularity": 70.0},
                {"id": 4, "title": "D", "popularity": 12.25}
            ]
        })))
        .mount(&server)
        .await;

    let movies = provider(&server)
        .discover_movies(&DiscoverQuery::for_genre(35))
        .await
        .unwrap();

    let popularity: Vec<f64> = movies.iter().filter_map(|m| m.popularity).collect();
    assert_eq!(popularity, vec![90.5, 70.0, 70.0, 12.25]);
    assert!(popularity.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn test_movie_details_appends_resources() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/603"))
        .and(query_param("append_to_response", "credits,keywords"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 603,
            "title": "The Matrix",
            "credits": {"cast": [{"name": "Keanu Reeves", "character": "Neo"}]},
            "keywords": {"keywords": [{"id": 310, "name": "artificial intelligence"}]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let detail = provider(&server)
        .movie_details(603, DetailExtras::CreditsAndKeywords)
        .await
        .unwrap();

    assert_eq!(detail.cast()[0].name.as_deref(), Some("Keanu Reeves"));
    assert_eq!(detail.keywords()[0].id, 310);
}

#[tokio::test]
async fn test_non_success_status_is_reported_uniformly() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "status_message": "Invalid API key"
        })))
        .mount(&server)
        .await;

    let provider = provider(&server);

    let err = provider.list_genres().await.unwrap_err();
    assert!(matches!(err, AppError::Status(s) if s.as_u16() == 401));

    let err = provider.movie_recommendations(1).await.unwrap_err();
    assert_eq!(err.console_message(), "Error: 401");

    let err = provider
        .movie_details(1, DetailExtras::CreditsAndRecommendations)
        .await
        .unwrap_err();
    assert_eq!(err.console_message(), "Error: 401");
}

#[tokio::test]
async fn test_server_error_is_reported_like_client_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/1/recommendations"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = provider(&server).movie_recommendations(1).await.unwrap_err();
    assert_eq!(err.console_message(), "Error: 503");
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = provider(&server).search_movies("x", 1).await.unwrap_err();
    assert!(matches!(err, AppError::Decode(_)));
}

#[tokio::test]
async fn test_ollama_probe_selects_preferred_model() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "models": [{"name": "llama3:latest"}, {"name": "mistral"}]
        })))
        .mount(&server)
        .await;

    let client = OllamaClient::new(server.uri());
    assert_eq!(
        client.probe("mistral").await,
        ProbeOutcome::Ready {
            model: "mistral".to_string(),
            available: vec!["llama3:latest".to_string(), "mistral".to_string()],
        }
    );
    assert!(matches!(
        client.probe("phi3").await,
        ProbeOutcome::Ready { model, .. } if model == "llama3:latest"
    ));
}

#[tokio::test]
async fn test_ollama_probe_without_models() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"models": []})))
        .mount(&server)
        .await;

    let client = OllamaClient::new(server.uri());
    assert_eq!(client.probe("mistral").await, ProbeOutcome::NoModels);
}

#[tokio::test]
async fn test_ollama_generate_is_non_streaming() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_json(json!({"model": "mistral", "prompt": "pick three", "stream": false})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"response": "1. Airplane! - 1980"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = OllamaClient::new(server.uri());
    let text = client.generate("mistral", "pick three").await.unwrap();
    assert_eq!(text.as_deref(), Some("1. Airplane! - 1980"));
}
