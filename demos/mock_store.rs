//! A tiny stand-in object store for local development.
//!
//! Serves a couple of objects under `/web-hosting/static/` with the
//! metadata headers the gateway propagates. Run the gateway with its
//! default config against this to see the full pipeline locally.

use std::net::SocketAddr;

use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

async fn serve_object(Path(path): Path<String>) -> Response {
    let (content_type, body) = match path.as_str() {
        "static/index.html" => ("text/html", "<html><body>hello</body></html>"),
        "static/css/app.css" => ("text/css", "body { margin: 0; }"),
        _ => return StatusCode::NOT_FOUND.into_response(),
    };

    (
        [
            (header::CONTENT_TYPE, content_type),
            (header::DATE, "Tue, 04 Aug 2026 10:00:00 GMT"),
        ],
        body,
    )
        .into_response()
}

#[tokio::main]
async fn main() {
    let app = Router::new().route("/web-hosting/{*path}", get(serve_object));

    let addr = SocketAddr::from(([127, 0, 0, 1], 9000));
    println!("Mock object store listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
