#![allow(dead_code)]

use axum::Router;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tokio::net::TcpListener;

/// Spawns a stand-in for the upstream endpoint on a random local port.
///
/// Every request is answered with the given status code, plus a
/// `content-type` header when one is provided. Returns the base URL
/// of the server.
pub async fn spawn_upstream(status: StatusCode, content_type: Option<&'static str>) -> String {
    let app = Router::new().route(
        "/",
        get(move || async move { canned_response(status, content_type) }),
    );

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://127.0.0.1:{port}")
}

fn canned_response(status: StatusCode, content_type: Option<&'static str>) -> Response {
    let mut response = status.into_response();
    if let Some(value) = content_type {
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static(value));
    }
    response
}
