// Request parameters of the students resource.
//
// `name` and `group` are read from the query string and, for requests with a body,
// from an application/x-www-form-urlencoded form. The query string wins and the
// first occurrence of a repeated key is used. A source that cannot be decoded is
// treated as carrying no parameters.

use axum::extract::rejection::FormRejection;
use axum::extract::{Form, FromRequest, Query, Request};
use axum::http::Method;
use std::convert::Infallible;

type Pairs = Vec<(String, String)>;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StudentParams {
    pub name: Option<String>,
    pub group: Option<String>,
}

impl StudentParams {
    fn from_pairs(pairs: &[(String, String)]) -> Self {
        let first = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        };
        Self {
            name: first("name"),
            group: first("group"),
        }
    }

    fn or(self, fallback: Self) -> Self {
        Self {
            name: self.name.or(fallback.name),
            group: self.group.or(fallback.group),
        }
    }
}

impl<S> FromRequest<S> for StudentParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query = match Query::<Pairs>::try_from_uri(req.uri()) {
            Ok(Query(pairs)) => Self::from_pairs(&pairs),
            Err(rejection) => {
                tracing::warn!(%rejection, "ignoring undecodable query string");
                Self::default()
            }
        };

        if matches!(*req.method(), Method::GET | Method::HEAD) {
            return Ok(query);
        }

        let form = match Form::<Pairs>::from_request(req, state).await {
            Ok(Form(pairs)) => Self::from_pairs(&pairs),
            Err(FormRejection::InvalidFormContentType(_)) => {
                tracing::debug!("request body is not a form; using query parameters only");
                Self::default()
            }
            Err(rejection) => {
                tracing::warn!(%rejection, "ignoring undecodable form body");
                Self::default()
            }
        };

        Ok(query.or(form))
    }
}
