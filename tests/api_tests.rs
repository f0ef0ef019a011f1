//! PokeAPI client tests against a wiremock server.

use std::time::Duration;

use pokedex::api::PokeApiClient;
use pokedex::config::ApiConfig;
use pokedex::error::ApiError;
use pokedex::repository::{PokemonRepository, RemoteRepository};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> PokeApiClient {
    let config = ApiConfig::new(format!("{}/api/v2/", server.uri()))
        .with_timeouts(Duration::from_secs(2), Duration::from_secs(2));
    PokeApiClient::new(&config).unwrap()
}

fn list_body(base: &str, next: Option<&str>) -> serde_json::Value {
    json!({
        "count": 1302,
        "next": next,
        "previous": null,
        "results": [
            { "name": "bulbasaur", "url": format!("{base}/api/v2/pokemon/1/") },
            { "name": "ivysaur", "url": format!("{base}/api/v2/pokemon/2/") },
            { "name": "pikachu", "url": format!("{base}/api/v2/pokemon/25/") }
        ]
    })
}

fn pikachu_body() -> serde_json::Value {
    json!({
        "id": 25,
        "name": "pikachu",
        "height": 4,
        "weight": 60,
        "base_experience": 112,
        "sprites": {
            "front_default": "https://example.test/front/25.png",
            "other": {
                "official-artwork": { "front_default": "https://example.test/art/25.png" }
            }
        },
        "stats": [
            { "base_stat": 35, "effort": 0, "stat": { "name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/" } },
            { "base_stat": 90, "effort": 2, "stat": { "name": "speed", "url": "https://pokeapi.co/api/v2/stat/6/" } }
        ],
        "abilities": [
            { "ability": { "name": "static", "url": "https://pokeapi.co/api/v2/ability/9/" }, "is_hidden": false, "slot": 1 },
            { "ability": { "name": "lightning-rod", "url": "https://pokeapi.co/api/v2/ability/31/" }, "is_hidden": true, "slot": 3 }
        ],
        "types": [
            { "slot": 1, "type": { "name": "electric", "url": "https://pokeapi.co/api/v2/type/13/" } }
        ]
    })
}

#[tokio::test]
async fn test_fetch_page_sends_offset_and_limit() {
    let server = MockServer::start().await;
    let base = server.uri();
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon"))
        .and(query_param("offset", "40"))
        .and(query_param("limit", "20"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(list_body(&base, Some("https://pokeapi.co/api/v2/pokemon?offset=60&limit=20"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let page = client_for(&server).fetch_page(40).await.unwrap();

    assert_eq!(page.total_count, 1302);
    assert!(!page.is_last());
    assert_eq!(page.previous_page_url, None);
    let ids: Vec<u32> = page.items.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![1, 2, 25]);
    assert_eq!(page.items[2].name, "pikachu");
}

#[tokio::test]
async fn test_fetch_page_without_next_is_last() {
    let server = MockServer::start().await;
    let base = server.uri();
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(&base, None)))
        .mount(&server)
        .await;

    let page = client_for(&server).fetch_page(1300).await.unwrap();
    assert!(page.is_last());
}

#[tokio::test]
async fn test_fetch_page_rejects_unrecognized_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "next": null,
            "previous": null,
            "results": [{ "name": "missingno", "url": "https://pokeapi.co/api/v2/pokemon/missingno/" }]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_page(0).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::ResourceUrl("https://pokeapi.co/api/v2/pokemon/missingno/".into())
    );
}

#[tokio::test]
async fn test_fetch_pokemon_maps_detail_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pikachu_body()))
        .mount(&server)
        .await;

    let record = client_for(&server).fetch_pokemon(25).await.unwrap();

    assert_eq!(record.id, 25);
    assert_eq!(record.name, "pikachu");
    assert_eq!((record.height, record.weight), (4, 60));
    assert_eq!(record.preferred_image(), Some("https://example.test/art/25.png"));
    assert_eq!(
        record.sprites.front_default.as_deref(),
        Some("https://example.test/front/25.png")
    );
    assert_eq!(record.stats.len(), 2);
    assert_eq!(record.stats[1].name, "speed");
    assert_eq!((record.stats[1].base_stat, record.stats[1].effort), (90, 2));
    assert!(record.abilities[1].is_hidden);
    assert_eq!(record.abilities[1].slot, 3);
    assert_eq!(record.types[0].name, "electric");
}

#[tokio::test]
async fn test_status_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/99999"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_pokemon(99999).await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP 404 Not Found");
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"id\": \"one\"}"))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_pokemon(1).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_remote_repository_is_a_pure_proxy() {
    let server = MockServer::start().await;
    let base = server.uri();
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(&base, None)))
        .expect(2)
        .mount(&server)
        .await;

    let repository = RemoteRepository::new(client_for(&server));
    let first = repository.fetch_page(0).await.unwrap();
    let second = repository.fetch_page(0).await.unwrap();
    assert_eq!(first, second);
}
