use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use percent_encoding::percent_decode_str;
use std::borrow::Cow;
use std::convert::Infallible;

use crate::modules::students::core::resource_path::ResourcePath;
use crate::shell::state::AppState;

/// The part of the request path below the students base path, percent-decoded once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathInfo(pub ResourcePath);

impl FromRequestParts<AppState> for PathInfo {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self(resource_path(parts.uri.path(), &state.base_path)))
    }
}

pub fn resource_path(request_path: &str, base_path: &str) -> ResourcePath {
    let path_info = request_path.strip_prefix(base_path).map(decode);
    ResourcePath::from_path_info(path_info.as_deref())
}

/// Bytes that are not valid UTF-8 once decoded are kept as received.
fn decode(raw: &str) -> Cow<'_, str> {
    percent_decode_str(raw)
        .decode_utf8()
        .unwrap_or(Cow::Borrowed(raw))
}

#[cfg(test)]
mod path_info_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/students", ResourcePath::Absent)]
    #[case("/students/", ResourcePath::Present("/".into()))]
    #[case("/students/alice", ResourcePath::Present("/alice".into()))]
    #[case("/students/a%20b", ResourcePath::Present("/a b".into()))]
    #[case("/students/%D0%98%D0%B2%D0%B0%D0%BD", ResourcePath::Present("/Иван".into()))]
    #[case("/students/a%2520b", ResourcePath::Present("/a%20b".into()))]
    #[case("/students/%FF", ResourcePath::Present("/%FF".into()))]
    #[case("/students/x/y", ResourcePath::Present("/x/y".into()))]
    #[case("/students/%20x%20", ResourcePath::Present("/ x ".into()))]
    fn it_should_strip_the_base_path_and_decode_once(
        #[case] request_path: &str,
        #[case] expected: ResourcePath,
    ) {
        assert_eq!(resource_path(request_path, "/students"), expected);
    }

    #[rstest]
    fn it_should_treat_a_foreign_path_as_absent() {
        assert_eq!(resource_path("/other", "/students"), ResourcePath::Absent);
    }
}
