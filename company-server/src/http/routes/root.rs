//! Informational root endpoint

use axum::{routing::get, Json, Router};

use super::MessageResponse;

/// GET /
async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Company Management API",
    })
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(root))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn greets() {
        let Json(body) = root().await;
        assert_eq!(body.message, "Company Management API");
    }
}
