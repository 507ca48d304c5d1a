use axum::response::{Html, IntoResponse, Response};

use crate::modules::students::adapters::inbound::html::render_error;
use crate::modules::students::core::errors::StudentError;

impl IntoResponse for StudentError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let reason = self.to_string();
        tracing::warn!(%kind, %reason, "students request rejected");
        (kind.status_code(), Html(render_error(kind, &reason))).into_response()
    }
}

#[cfg(test)]
mod student_error_response_tests {
    use super::*;
    use crate::modules::students::core::ports::RegistryError;
    use axum::http::StatusCode;
    use axum::http::header::CONTENT_TYPE;
    use http_body_util::BodyExt;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_set_the_status_and_write_the_html_body() {
        let error: StudentError = RegistryError::AlreadyExists {
            name: "alice".into(),
        }
        .into();

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(
            std::str::from_utf8(&bytes).unwrap(),
            "<h2>ERROR 400: Bad request</h2>\n<p>student alice already exists; choose a unique name</p>\n"
        );
    }
}
