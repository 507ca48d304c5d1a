use axum::{Router, routing::get};

use crate::modules::students::use_cases::create_student::inbound::http as create_http;
use crate::modules::students::use_cases::delete_student::inbound::http as delete_http;
use crate::modules::students::use_cases::list_students::inbound::http as list_http;
use crate::modules::students::use_cases::update_student::inbound::http as update_http;
use crate::shell::state::AppState;

/// Mounts the students resource at the base path held by `state`.
///
/// The base path, the base path with a trailing separator, and anything below it
/// all reach the same four verbs; the handlers classify the sub-path themselves.
pub fn router(state: AppState) -> Router {
    let base = state.base_path.to_string();
    let resource = get(list_http::handle)
        .post(create_http::handle)
        .put(update_http::handle)
        .delete(delete_http::handle);

    Router::new()
        .route(&base, resource.clone())
        .route(&format!("{base}/"), resource.clone())
        .route(&format!("{base}/{{*rest}}"), resource)
        .with_state(state)
}
