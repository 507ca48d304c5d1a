use axum::{extract::State, response::Html};

use crate::modules::students::adapters::inbound::params::StudentParams;
use crate::modules::students::adapters::inbound::path_info::PathInfo;
use crate::modules::students::core::errors::StudentError;
use crate::modules::students::use_cases::create_student::command::CreateStudent;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    PathInfo(path): PathInfo,
    params: StudentParams,
) -> Result<Html<&'static str>, StudentError> {
    tracing::debug!(%path, "POST");
    let command = CreateStudent {
        path,
        name: params.name,
        group: params.group,
    };
    state.create_handler.handle(command).await?;
    Ok(Html(""))
}
