use std::net::SocketAddr;

use axum::Router;

use gamecatalog_infrastructure::services::ServiceRegistry;
use gamecatalog_infrastructure::settings::Settings;
use tower_http::trace::TraceLayer;

use crate::endpoints::players_endpoints::PlayersRouter;

pub struct ApplicationController;

impl ApplicationController {
    pub fn router(service_registry: ServiceRegistry) -> Router {
        Router::new()
            .nest(
                "/rest",
                Router::new().merge(PlayersRouter::new(service_registry)),
            )
            // logging so we can see whats going on
            .layer(TraceLayer::new_for_http())
    }

    pub async fn run(settings: Settings, service_registry: ServiceRegistry) {
        let router = Self::router(service_registry);

        let listener = tokio::net::TcpListener::bind(&format!(
            "{}:{}",
            settings.server.host, settings.server.port
        ))
        .await
        .expect("Could not start the TCP listener");

        tracing::info!("listening on {}", settings.server);

        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("Failed to start the server");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use chrono::{Duration, TimeZone, Utc};
    use gamecatalog_infrastructure::repositories::memory_player_repository::InMemoryPlayerRepository;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        let repository = Arc::new(InMemoryPlayerRepository::new());
        ApplicationController::router(ServiceRegistry::new(repository))
    }

    fn birthday(year: i32) -> i64 {
        Utc.with_ymd_and_hms(year, 7, 1, 12, 0, 0)
            .unwrap()
            .timestamp_millis()
    }

    fn player_body(name: &str, experience: i32) -> Value {
        json!({
            "name": name,
            "title": "Ranger of the North",
            "race": "HUMAN",
            "profession": "WARRIOR",
            "birthday": birthday(2010),
            "experience": experience,
        })
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        let request = match body {
            Some(body) => Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    fn as_json(body: &[u8]) -> Value {
        serde_json::from_slice(body).unwrap()
    }

    #[tokio::test]
    async fn create_defaults_banned_and_computes_level() {
        let app = app();

        let (status, body) = send(&app, Method::POST, "/rest/players", Some(player_body("Aragorn", 0))).await;
        assert_eq!(status, StatusCode::OK);
        let player = as_json(&body);
        assert_eq!(player["id"], 1);
        assert_eq!(player["level"], 0);
        assert_eq!(player["untilNextLevel"], 100);
        assert_eq!(player["banned"], false);

        let mut with_null_banned = player_body("Aragorn", 0);
        with_null_banned["banned"] = Value::Null;
        let (status, body) = send(&app, Method::POST, "/rest/players", Some(with_null_banned)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(as_json(&body)["banned"], false);
        assert_eq!(as_json(&body)["id"], 2);
    }

    #[tokio::test]
    async fn create_invalid_player_is_bad_request_without_body() {
        let app = app();

        let mut body = player_body("Aragorn", 0);
        body["birthday"] = json!(birthday(1999));
        let (status, response) = send(&app, Method::POST, "/rest/players", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(response.is_empty());

        let future = (Utc::now() + Duration::days(30)).timestamp_millis();
        let mut body = player_body("Aragorn", 0);
        body["birthday"] = json!(future);
        let (status, _) = send(&app, Method::POST, "/rest/players", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, Method::POST, "/rest/players", Some(player_body("Thirteen char", 0))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn get_player_status_codes() {
        let app = app();
        send(&app, Method::POST, "/rest/players", Some(player_body("Aragorn", 0))).await;

        let (status, body) = send(&app, Method::GET, "/rest/players/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(as_json(&body)["name"], "Aragorn");

        let (status, body) = send(&app, Method::GET, "/rest/players/0", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.is_empty());

        let (status, body) = send(&app, Method::GET, "/rest/players/99", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn list_and_count_with_filters() {
        let app = app();
        for (name, experience) in [("Frodo", 0), ("Sam", 50), ("Merry", 100), ("Pippin", 200)] {
            send(&app, Method::POST, "/rest/players", Some(player_body(name, experience))).await;
        }

        let (status, body) = send(
            &app,
            Method::GET,
            "/rest/players?minExperience=50&maxExperience=150&order=NAME",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<_> = as_json(&body)
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["Merry", "Sam"]);

        let (status, body) = send(&app, Method::GET, "/rest/players/count?name=&race=HUMAN", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(as_json(&body), json!(4));

        let (_, body) = send(&app, Method::GET, "/rest/players/count?race=ELF", None).await;
        assert_eq!(as_json(&body), json!(0));
    }

    #[tokio::test]
    async fn list_is_paginated_by_three() {
        let app = app();
        for i in 0..7 {
            send(&app, Method::POST, "/rest/players", Some(player_body(&format!("p{i}"), i))).await;
        }

        let mut sizes = Vec::new();
        for page in 0..4 {
            let (_, body) = send(&app, Method::GET, &format!("/rest/players?pageNumber={page}"), None).await;
            sizes.push(as_json(&body).as_array().unwrap().len());
        }
        assert_eq!(sizes, vec![3, 3, 1, 0]);

        let (status, _) = send(&app, Method::GET, "/rest/players?pageSize=-1", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_player_flow() {
        let app = app();
        send(&app, Method::POST, "/rest/players", Some(player_body("Aragorn", 0))).await;

        let (status, body) = send(&app, Method::POST, "/rest/players/1", Some(json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(as_json(&body)["name"], "Aragorn");

        let (status, body) = send(
            &app,
            Method::POST,
            "/rest/players/1",
            Some(json!({"experience": 350, "banned": true, "profession": "PALADIN"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let player = as_json(&body);
        assert_eq!(player["name"], "Aragorn");
        assert_eq!(player["profession"], "PALADIN");
        assert_eq!(player["level"], 2);
        assert_eq!(player["untilNextLevel"], 250);
        assert_eq!(player["banned"], true);

        let (status, _) = send(&app, Method::POST, "/rest/players/1", Some(json!({"experience": -1}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, Method::POST, "/rest/players/0", Some(json!({"name": "Strider"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, Method::POST, "/rest/players/8", Some(json!({"name": "Strider"}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_player_status_codes() {
        let app = app();
        send(&app, Method::POST, "/rest/players", Some(player_body("Boromir", 0))).await;

        let (status, body) = send(&app, Method::DELETE, "/rest/players/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());

        let (status, _) = send(&app, Method::DELETE, "/rest/players/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, Method::DELETE, "/rest/players/-1", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
