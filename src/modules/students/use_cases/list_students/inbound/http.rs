use axum::{extract::State, response::Html};

use crate::modules::students::adapters::inbound::html::render_student_list;
use crate::modules::students::adapters::inbound::path_info::PathInfo;
use crate::modules::students::core::errors::StudentError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    PathInfo(path): PathInfo,
) -> Result<Html<String>, StudentError> {
    tracing::debug!(%path, "GET");
    let students = state.list_handler.handle(&path).await?;
    Ok(Html(render_student_list(&students)))
}
