mod common;

use axum::http::{Method, StatusCode};
use common::{
    assert_error_envelope, croqueta, send_empty, send_json, test_app, test_app_with_limit,
};
use serde_json::json;

#[tokio::test]
async fn list_on_empty_table_is_ok_and_empty() {
    let app = test_app();
    let (status, body) = send_empty(&app, Method::GET, "/api/croquetas").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "ok": true, "datos": [], "mensaje": "Croquetas recuperadas correctamente" })
    );
}

#[tokio::test]
async fn full_lifecycle() {
    let app = test_app();
    let payload = json!({ "name": "A", "createdOn": "2024-01-01", "price": "1.00", "recipeId": 1 });

    let (status, body) = send_json(&app, Method::POST, "/api/croquetas", payload.clone()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["ok"], true);
    assert_eq!(body["mensaje"], "Croqueta creada correctamente");
    assert_eq!(body["datos"], payload);

    let (status, body) = send_empty(&app, Method::GET, "/api/croquetas/A").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["datos"], payload);

    let (status, body) =
        send_json(&app, Method::PUT, "/api/croquetas/A", json!({ "price": "2.00" })).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (_, body) = send_empty(&app, Method::GET, "/api/croquetas/A").await;
    assert_eq!(body["datos"]["price"], "2.00");
    assert_eq!(body["datos"]["name"], "A");
    assert_eq!(body["datos"]["createdOn"], "2024-01-01");
    assert_eq!(body["datos"]["recipeId"], 1);

    let (status, body) = send_empty(&app, Method::DELETE, "/api/croquetas/A").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, body) = send_empty(&app, Method::GET, "/api/croquetas/A").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_envelope(&body);
}

#[tokio::test]
async fn price_is_compared_by_value() {
    let app = test_app();
    let (status, body) =
        send_json(&app, Method::POST, "/api/croquetas", croqueta("Jamón", "2.5", 5)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["datos"]["price"], "2.50");
}

#[tokio::test]
async fn duplicate_name_is_a_server_error() {
    let app = test_app();
    let (status, _) = send_json(&app, Method::POST, "/api/croquetas", croqueta("A", "1.00", 1)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send_json(&app, Method::POST, "/api/croquetas", croqueta("A", "3.00", 2)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_error_envelope(&body);
    assert_eq!(body["mensaje"], "Error al crear una croqueta");
}

#[tokio::test]
async fn incomplete_or_malformed_body_is_a_server_error() {
    let app = test_app();
    let (status, body) =
        send_json(&app, Method::POST, "/api/croquetas", json!({ "name": "sin precio" })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_error_envelope(&body);

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/croquetas",
        json!({ "name": "X", "createdOn": "2024-01-01", "price": "caro", "recipeId": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_error_envelope(&body);

    let (status, _) = send_empty(&app, Method::POST, "/api/croquetas").await;
    assert_ne!(status, StatusCode::CREATED);

    let (_, body) = send_empty(&app, Method::GET, "/api/croquetas").await;
    assert_eq!(body["datos"], json!([]));
}

#[tokio::test]
async fn missing_key_is_404_with_key_in_message() {
    let app = test_app();
    for (method, payload) in [
        (Method::GET, None),
        (Method::PUT, Some(json!({ "price": "9.99" }))),
        (Method::DELETE, None),
    ] {
        let (status, body) = match payload {
            Some(p) => send_json(&app, method.clone(), "/api/croquetas/Fantasma", p).await,
            None => send_empty(&app, method.clone(), "/api/croquetas/Fantasma").await,
        };
        assert_eq!(status, StatusCode::NOT_FOUND, "{method}");
        assert_error_envelope(&body);
        assert_eq!(body["mensaje"], "Croqueta no encontrada: Fantasma");
    }
}

#[tokio::test]
async fn second_delete_is_404() {
    let app = test_app();
    send_json(&app, Method::POST, "/api/croquetas", croqueta("A", "1.00", 1)).await;
    let (status, _) = send_empty(&app, Method::DELETE, "/api/croquetas/A").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, body) = send_empty(&app, Method::DELETE, "/api/croquetas/A").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_envelope(&body);
}

#[tokio::test]
async fn update_never_changes_the_key() {
    let app = test_app();
    send_json(&app, Method::POST, "/api/croquetas", croqueta("A", "1.00", 1)).await;
    let (status, _) = send_json(
        &app,
        Method::PUT,
        "/api/croquetas/A",
        json!({ "name": "B", "createdOn": "2024-03-02", "recipeId": 7 }),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send_empty(&app, Method::GET, "/api/croquetas/A").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["datos"]["createdOn"], "2024-03-02");
    assert_eq!(body["datos"]["recipeId"], 7);
    assert_eq!(body["datos"]["price"], "1.00");

    let (status, _) = send_empty(&app, Method::GET, "/api/croquetas/B").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn names_with_spaces_are_percent_decoded() {
    let app = test_app();
    send_json(
        &app,
        Method::POST,
        "/api/croquetas",
        croqueta("Croqueta Test Unitaria", "2.50", 5),
    )
    .await;
    let (status, body) =
        send_empty(&app, Method::GET, "/api/croquetas/Croqueta%20Test%20Unitaria").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["datos"]["name"], "Croqueta Test Unitaria");

    let (status, _) =
        send_empty(&app, Method::GET, "/api/croquetas/croqueta%20test%20unitaria").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_returns_every_croqueta_and_delete_spares_the_rest() {
    let app = test_app();
    send_json(&app, Method::POST, "/api/croquetas", croqueta("A", "1.00", 1)).await;
    send_json(&app, Method::POST, "/api/croquetas", croqueta("B", "3.00", 2)).await;

    let (_, body) = send_empty(&app, Method::GET, "/api/croquetas").await;
    assert_eq!(body["datos"].as_array().map(Vec::len), Some(2));

    send_empty(&app, Method::DELETE, "/api/croquetas/A").await;
    let (status, body) = send_empty(&app, Method::GET, "/api/croquetas/B").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["datos"]["price"], "3.00");
}

#[tokio::test]
async fn duplicate_recipe_id_is_a_server_error() {
    let app = test_app();
    send_json(&app, Method::POST, "/api/croquetas", croqueta("A", "1.00", 1)).await;
    let (status, body) = send_json(&app, Method::POST, "/api/croquetas", croqueta("B", "1.00", 1)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_error_envelope(&body);
}

#[tokio::test]
async fn list_path_accepts_trailing_slash() {
    let app = test_app();
    let (status, body) =
        send_json(&app, Method::POST, "/api/croquetas/", croqueta("Bacalao", "2.00", 11)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["datos"]["name"], "Bacalao");

    let (status, body) = send_empty(&app, Method::GET, "/api/croquetas/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mensaje"], "Croquetas recuperadas correctamente");
    assert_eq!(body["datos"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn undecodable_key_gets_the_operation_envelope() {
    let app = test_app();
    let (status, body) = send_empty(&app, Method::GET, "/api/croquetas/%FF").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_error_envelope(&body);
    assert_eq!(body["mensaje"], "Error al recuperar una croqueta");

    let (status, body) = send_json(&app, Method::PUT, "/api/croquetas/%FF", json!({})).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["mensaje"], "Error al editar una croqueta");
}

#[tokio::test]
async fn oversized_body_gets_the_create_envelope() {
    let app = test_app_with_limit(64);
    let mut payload = croqueta("Larga", "1.00", 12);
    payload["name"] = json!("x".repeat(200));
    let (status, body) = send_json(&app, Method::POST, "/api/croquetas", payload).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_error_envelope(&body);
    assert_eq!(body["mensaje"], "Error al crear una croqueta");

    let (_, body) = send_empty(&app, Method::GET, "/api/croquetas").await;
    assert_eq!(body["datos"], json!([]));
}
