use axum::{extract::State, response::Html};

use crate::modules::students::adapters::inbound::path_info::PathInfo;
use crate::modules::students::core::errors::StudentError;
use crate::modules::students::use_cases::delete_student::command::DeleteStudent;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    PathInfo(path): PathInfo,
) -> Result<Html<&'static str>, StudentError> {
    tracing::debug!(%path, "DELETE");
    state.delete_handler.handle(DeleteStudent { path }).await?;
    Ok(Html(""))
}
