//! Unit tests for the hunt crate

#[cfg(test)]
mod validator_tests {
    use crate::application::config::HuntConfig;
    use crate::domain::services::{Outcome, apply, evaluate};
    use crate::domain::value_objects::{PuzzleState, RouteName, Submission};

    fn submission(entries: &[&str]) -> Submission {
        Submission::new(entries.iter().map(|s| s.to_string()).collect())
    }

    fn numbers(values: &[i64]) -> Submission {
        Submission::new(values.iter().map(|v| v.to_string()).collect())
    }

    #[test]
    fn test_middelfart_correct_sequence_solves() {
        // Scenario A
        let config = HuntConfig::default();
        let route = config.route(RouteName::Middelfart).unwrap();
        let outcome = evaluate(route, &numbers(&[17, 18, 19, 21, 14, 8, 10, 12, 13]));
        assert_eq!(outcome, Outcome::Solved);

        let state = apply(PuzzleState::new(), outcome);
        assert!(state.solved);
        assert!(!state.show_error);
    }

    #[test]
    fn test_middelfart_wrong_last_number() {
        // Scenario B
        let config = HuntConfig::default();
        let route = config.route(RouteName::Middelfart).unwrap();
        let outcome = evaluate(route, &numbers(&[17, 18, 19, 21, 14, 8, 10, 12, 99]));
        assert_eq!(outcome, Outcome::Mismatch);

        let state = apply(PuzzleState::new(), outcome);
        assert!(!state.solved);
        assert!(state.show_error);
    }

    #[test]
    fn test_aarhus_correct_sequence_solves() {
        // Scenario C
        let config = HuntConfig::default();
        let route = config.route(RouteName::Aarhus).unwrap();
        let outcome = evaluate(route, &numbers(&[9, 4, 12, 6, 8, 11, 3, 5, 7, 10, 2]));
        assert_eq!(outcome, Outcome::Solved);
    }

    #[test]
    fn test_aarhus_non_numeric_entry_is_a_mismatch() {
        // Scenario D: "abc" in any position behaves like wrong numbers
        let config = HuntConfig::default();
        let route = config.route(RouteName::Aarhus).unwrap();
        for position in 0..route.field_count() {
            let mut entries: Vec<String> = [9, 4, 12, 6, 8, 11, 3, 5, 7, 10, 2]
                .iter()
                .map(|v| v.to_string())
                .collect();
            entries[position] = "abc".to_string();
            let outcome = evaluate(route, &Submission::new(entries));
            assert_eq!(outcome, Outcome::Mismatch, "position {position}");
        }
    }

    #[test]
    fn test_any_empty_field_skips_validation() {
        let config = HuntConfig::default();
        let route = config.route(RouteName::Middelfart).unwrap();
        for position in 0..route.field_count() {
            let mut entries: Vec<String> = [17, 18, 19, 21, 14, 8, 10, 12, 13]
                .iter()
                .map(|v| v.to_string())
                .collect();
            entries[position] = String::new();
            let outcome = evaluate(route, &Submission::new(entries));
            assert_eq!(outcome, Outcome::Incomplete, "position {position}");
        }
    }

    #[test]
    fn test_whitespace_only_field_shows_error() {
        let config = HuntConfig::default();
        let route = config.route(RouteName::Middelfart).unwrap();
        let mut entries: Vec<String> = [17, 18, 19, 21, 14, 8, 10, 12, 13]
            .iter()
            .map(|v| v.to_string())
            .collect();
        entries[3] = "   ".to_string();

        let outcome = evaluate(route, &Submission::new(entries));
        assert_eq!(outcome, Outcome::Mismatch);

        let state = apply(PuzzleState::new(), outcome);
        assert!(state.show_error);
    }

    #[test]
    fn test_solved_is_monotonic() {
        let config = HuntConfig::default();
        let route = config.route(RouteName::Middelfart).unwrap();
        let solved = apply(
            PuzzleState::new(),
            evaluate(route, &numbers(&[17, 18, 19, 21, 14, 8, 10, 12, 13])),
        );
        assert!(solved.solved);

        // A wrong resubmission after solving changes nothing
        let after = apply(solved, evaluate(route, &submission(&["1"; 9])));
        assert_eq!(after, solved);
    }
}

#[cfg(test)]
mod submit_use_case_tests {
    use crate::application::config::HuntConfig;
    use crate::application::submit_numbers::{SubmitNumbersInput, SubmitNumbersUseCase};
    use crate::domain::value_objects::RouteName;
    use crate::error::HuntError;
    use crate::infra::memory::InMemorySessionRepository;
    use std::sync::Arc;

    fn use_case() -> SubmitNumbersUseCase<InMemorySessionRepository> {
        SubmitNumbersUseCase::new(
            Arc::new(InMemorySessionRepository::new()),
            Arc::new(HuntConfig::with_random_secret()),
        )
    }

    fn entries(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    const MIDDELFART_OK: [&str; 9] = ["17", "18", "19", "21", "14", "8", "10", "12", "13"];

    #[tokio::test]
    async fn test_first_submit_creates_session() {
        let uc = use_case();
        let output = uc
            .execute(
                SubmitNumbersInput {
                    route: RouteName::Middelfart,
                    entries: entries(&MIDDELFART_OK),
                },
                None,
            )
            .await
            .unwrap();

        assert!(output.session_token.is_some());
        assert!(output.state.solved);
    }

    #[tokio::test]
    async fn test_resubmit_reuses_session_and_keeps_solved() {
        let uc = use_case();
        let first = uc
            .execute(
                SubmitNumbersInput {
                    route: RouteName::Middelfart,
                    entries: entries(&MIDDELFART_OK),
                },
                None,
            )
            .await
            .unwrap();

        // Wrong numbers after solving: solved stays, no token reissued
        let second = uc
            .execute(
                SubmitNumbersInput {
                    route: RouteName::Middelfart,
                    entries: entries(&["1", "2", "3", "4", "5", "6", "7", "8", "9"]),
                },
                Some(first.session_id),
            )
            .await
            .unwrap();

        assert_eq!(second.session_id, first.session_id);
        assert!(second.session_token.is_none());
        assert!(second.state.solved);
        assert!(!second.state.show_error);
    }

    #[tokio::test]
    async fn test_mismatch_then_incomplete_clears_error() {
        let uc = use_case();
        let wrong = uc
            .execute(
                SubmitNumbersInput {
                    route: RouteName::Middelfart,
                    entries: entries(&["1", "2", "3", "4", "5", "6", "7", "8", "9"]),
                },
                None,
            )
            .await
            .unwrap();
        assert!(wrong.state.show_error);

        let incomplete = uc
            .execute(
                SubmitNumbersInput {
                    route: RouteName::Middelfart,
                    entries: entries(&["17", "", "", "", "", "", "", "", ""]),
                },
                Some(wrong.session_id),
            )
            .await
            .unwrap();
        assert!(!incomplete.state.show_error);
        assert!(!incomplete.state.solved);
    }

    #[tokio::test]
    async fn test_wrong_entry_count_is_rejected() {
        let uc = use_case();
        let err = uc
            .execute(
                SubmitNumbersInput {
                    route: RouteName::Aarhus,
                    entries: entries(&MIDDELFART_OK), // 9 entries, Aarhus has 11
                },
                None,
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            HuntError::WrongEntryCount {
                expected: 11,
                actual: 9
            }
        ));
    }

    #[tokio::test]
    async fn test_stale_session_id_starts_fresh() {
        let uc = use_case();
        let output = uc
            .execute(
                SubmitNumbersInput {
                    route: RouteName::Middelfart,
                    entries: entries(&MIDDELFART_OK),
                },
                Some(uuid::Uuid::new_v4()),
            )
            .await
            .unwrap();

        // Unknown id: new session, new token
        assert!(output.session_token.is_some());
        assert!(output.state.solved);
    }
}

#[cfg(test)]
mod check_puzzle_tests {
    use crate::application::check_puzzle::CheckPuzzleUseCase;
    use crate::application::config::HuntConfig;
    use crate::application::session_token;
    use crate::domain::entities::HuntSession;
    use crate::domain::repository::SessionRepository;
    use crate::domain::value_objects::PuzzleState;
    use crate::error::HuntError;
    use crate::infra::memory::InMemorySessionRepository;
    use std::sync::Arc;

    fn setup() -> (
        Arc<InMemorySessionRepository>,
        Arc<HuntConfig>,
        CheckPuzzleUseCase<InMemorySessionRepository>,
    ) {
        let repo = Arc::new(InMemorySessionRepository::new());
        let config = Arc::new(HuntConfig::with_random_secret());
        let uc = CheckPuzzleUseCase::new(repo.clone(), config.clone());
        (repo, config, uc)
    }

    #[tokio::test]
    async fn test_no_token_reads_as_initial_state() {
        let (_, _, uc) = setup();
        assert_eq!(uc.state(None).await.unwrap(), PuzzleState::new());
    }

    #[tokio::test]
    async fn test_forged_token_reads_as_initial_state() {
        let (_, _, uc) = setup();
        assert_eq!(
            uc.state(Some("bm90IGEgdG9rZW4=")).await.unwrap(),
            PuzzleState::new()
        );
    }

    #[tokio::test]
    async fn test_wishlist_locked_before_solve() {
        let (repo, config, uc) = setup();
        let session = HuntSession::new(config.session_ttl_ms());
        repo.create(&session).await.unwrap();
        let token = session_token::sign(&session.id, &config.session_secret);

        let err = uc.wishlist(Some(&token)).await.unwrap_err();
        assert!(matches!(err, HuntError::WishlistLocked));
    }

    #[tokio::test]
    async fn test_wishlist_revealed_after_solve() {
        let (repo, config, uc) = setup();
        let session = HuntSession::new(config.session_ttl_ms());
        repo.create(&session).await.unwrap();
        repo.save_state(
            session.id,
            PuzzleState {
                solved: true,
                show_error: false,
            },
        )
        .await
        .unwrap();
        let token = session_token::sign(&session.id, &config.session_secret);

        let items = uc.wishlist(Some(&token)).await.unwrap();
        assert_eq!(items, config.wishlist);
        assert!(!items.is_empty());
    }
}

#[cfg(test)]
mod config_tests {
    use crate::application::config::{DEFAULT_MAP_BASE_URL, HuntConfig, SameSite};
    use crate::domain::value_objects::RouteName;

    #[test]
    fn test_default_routes() {
        let config = HuntConfig::default();
        assert_eq!(config.routes.len(), 2);
        assert_eq!(
            config.route(RouteName::Middelfart).unwrap().field_count(),
            9
        );
        assert_eq!(config.route(RouteName::Aarhus).unwrap().field_count(), 11);
        assert_eq!(config.map_base_url, DEFAULT_MAP_BASE_URL);
        assert_eq!(config.session_cookie_name, "hunt_session");
        assert!(config.cookie_secure);
        assert_eq!(config.cookie_same_site, SameSite::Lax);
    }

    #[test]
    fn test_with_random_secret() {
        let a = HuntConfig::with_random_secret();
        let b = HuntConfig::with_random_secret();
        assert_ne!(a.session_secret, b.session_secret);
        assert!(a.session_secret.iter().any(|&byte| byte != 0));
    }

    #[test]
    fn test_development_config() {
        let config = HuntConfig::development();
        assert!(!config.cookie_secure);
        assert!(config.session_secret.iter().any(|&byte| byte != 0));
    }
}

#[cfg(test)]
mod models_tests {
    use crate::domain::value_objects::PuzzleState;
    use crate::presentation::dto::*;

    #[test]
    fn test_state_response_casing() {
        let response = PuzzleStateResponse::from(PuzzleState {
            solved: false,
            show_error: true,
        });
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""solved":false"#));
        assert!(json.contains(r#""showError":true"#));
    }

    #[test]
    fn test_submit_request_deserialization() {
        let json = r#"{"route":"Middelfart","entries":["17","18"]}"#;
        let request: SubmitRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.route, "Middelfart");
        assert_eq!(request.entries, vec!["17", "18"]);
    }

    #[test]
    fn test_submit_request_accepts_any_route_string() {
        // Unknown names deserialize fine; the handler turns them into 404
        let json = r#"{"route":"Odense","entries":[]}"#;
        let request: SubmitRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.route, "Odense");
    }

    #[test]
    fn test_route_summary_serialization() {
        let config = crate::application::config::HuntConfig::default();
        let summary = RouteSummary::from(config.routes.first().unwrap());
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains(r#""name":"Middelfart""#));
        assert!(json.contains(r#""fieldCount":9"#));
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_error_status_codes() {
        let cases: Vec<(HuntError, StatusCode)> = vec![
            (HuntError::RouteNotFound, StatusCode::NOT_FOUND),
            (
                HuntError::WrongEntryCount {
                    expected: 9,
                    actual: 3,
                },
                StatusCode::BAD_REQUEST,
            ),
            (HuntError::WishlistLocked, StatusCode::FORBIDDEN),
            (
                HuntError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn test_error_display() {
        assert!(HuntError::RouteNotFound.to_string().contains("Route"));
        assert!(
            HuntError::WrongEntryCount {
                expected: 11,
                actual: 2
            }
            .to_string()
            .contains("11")
        );
    }
}

#[cfg(test)]
mod router_tests {
    use crate::application::config::HuntConfig;
    use crate::domain::entities::Route;
    use crate::domain::repository::SheetFetcher;
    use crate::error::HuntResult;
    use crate::infra::memory::InMemorySessionRepository;
    use crate::presentation::router::hunt_router_generic;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    /// Canned fetcher so router tests never touch the network
    #[derive(Clone)]
    struct StubFetcher;

    impl SheetFetcher for StubFetcher {
        async fn fetch(&self, _route: &Route) -> HuntResult<Vec<u8>> {
            Ok(b"%PDF-1.4 stub".to_vec())
        }
    }

    fn app() -> Router {
        hunt_router_generic(
            InMemorySessionRepository::new(),
            StubFetcher,
            HuntConfig::development(),
        )
    }

    fn submit_body(entries: &[&str]) -> Body {
        let entries: Vec<String> = entries.iter().map(|s| s.to_string()).collect();
        Body::from(
            serde_json::to_vec(&serde_json::json!({
                "route": "Middelfart",
                "entries": entries,
            }))
            .unwrap(),
        )
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn session_cookie(response: &axum::response::Response) -> String {
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("Set-Cookie present")
            .to_str()
            .unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_list_routes() {
        let response = app()
            .oneshot(Request::get("/routes").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json[0]["name"], "Middelfart");
        assert_eq!(json[0]["fieldCount"], 9);
        assert_eq!(json[1]["name"], "Aarhus");
        assert_eq!(json[1]["fieldCount"], 11);
    }

    #[tokio::test]
    async fn test_sheet_download_headers() {
        let response = app()
            .oneshot(
                Request::get("/routes/Middelfart/sheet")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/pdf"
        );
        assert_eq!(
            response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
            "attachment; filename=\"Middelfart.pdf\""
        );
    }

    #[tokio::test]
    async fn test_sheet_download_unknown_route() {
        let response = app()
            .oneshot(
                Request::get("/routes/Odense/sheet")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_submit_solve_and_read_wishlist() {
        let app = app();

        let response = app
            .clone()
            .oneshot(
                Request::post("/submit")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(submit_body(&[
                        "17", "18", "19", "21", "14", "8", "10", "12", "13",
                    ]))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let cookie = session_cookie(&response);
        let json = body_json(response).await;
        assert_eq!(json["solved"], true);
        assert_eq!(json["showError"], false);

        let response = app
            .oneshot(
                Request::get("/wishlist")
                    .header(header::COOKIE, cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["items"].as_array().unwrap().len() > 0);
    }

    #[tokio::test]
    async fn test_submit_wrong_numbers_shows_error() {
        let response = app()
            .oneshot(
                Request::post("/submit")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(submit_body(&[
                        "17", "18", "19", "21", "14", "8", "10", "12", "99",
                    ]))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["solved"], false);
        assert_eq!(json["showError"], true);
    }

    #[tokio::test]
    async fn test_submit_unknown_route() {
        let body = Body::from(
            serde_json::to_vec(&serde_json::json!({
                "route": "Odense",
                "entries": ["1", "2", "3"],
            }))
            .unwrap(),
        );

        let response = app()
            .oneshot(
                Request::post("/submit")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(body)
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_submit_wrong_entry_count() {
        let response = app()
            .oneshot(
                Request::post("/submit")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(submit_body(&["17", "18"]))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_state_without_session() {
        let response = app()
            .oneshot(Request::get("/state").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["solved"], false);
        assert_eq!(json["showError"], false);
    }

    #[tokio::test]
    async fn test_wishlist_locked_without_solve() {
        let response = app()
            .oneshot(Request::get("/wishlist").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
