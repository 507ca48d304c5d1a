use axum::{extract::State, response::Html};

use crate::modules::students::adapters::inbound::params::StudentParams;
use crate::modules::students::adapters::inbound::path_info::PathInfo;
use crate::modules::students::core::errors::StudentError;
use crate::modules::students::use_cases::update_student::command::UpdateStudent;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    PathInfo(path): PathInfo,
    params: StudentParams,
) -> Result<Html<&'static str>, StudentError> {
    tracing::debug!(%path, "PUT");
    let command = UpdateStudent {
        path,
        group: params.group,
    };
    state.update_handler.handle(command).await?;
    Ok(Html(""))
}

#[cfg(test)]
mod update_student_http_inbound_tests {
    use axum::http::StatusCode;
    use rstest::rstest;

    use crate::modules::students::core::ports::StudentRegistry;
    use crate::modules::students::core::student::Student;
    use crate::test_support::fixtures::app::{TestApp, put};

    #[rstest]
    #[tokio::test]
    async fn it_should_return_200_and_change_the_group() {
        let app = TestApp::new();
        app.registry.insert(Student::new("alice", "101")).await.unwrap();

        let response = app.send(put("/students/alice?group=202")).await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(app.registry.list().await, vec![Student::new("alice", "202")]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_404_without_a_student_name() {
        let response = TestApp::new().send(put("/students?group=202")).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert!(response.body.contains("student name not specified"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_400_without_a_group() {
        let response = TestApp::new().send(put("/students/alice")).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert!(response.body.contains("'group' parameter missing"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_student() {
        let app = TestApp::new();

        let response = app.send(put("/students/bob?group=202")).await;

        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(
            response.body,
            "<h2>ERROR 404: Not found</h2>\n<p>student bob does not exist</p>\n"
        );
        assert!(app.registry.list().await.is_empty());
    }
}
