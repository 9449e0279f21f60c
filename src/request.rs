//! A single planned request against the Auto API.

use goose::goose::GooseResponse;
use goose::prelude::*;
use url::form_urlencoded;

/// Base path of the Auto resource.
pub const REST_PATH: &str = "/rest";

/// One GET request issued by a task.
///
/// `path` is relative to the configured host and carries the query string, if
/// any. `name` is the label goose aggregates metrics under, so all requests of
/// one kind share a single row in the report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AutoRequest {
    pub path: String,
    pub name: &'static str,
}

impl AutoRequest {
    /// `GET /rest/{id}`, without query string.
    pub fn by_id(id: u32) -> Self {
        AutoRequest {
            path: format!("{}/{}", REST_PATH, id),
            name: "/rest/{id}",
        }
    }

    /// `GET /rest?<key>=<value>`.
    ///
    /// The pair is form-urlencoded. Values made of unreserved characters, such
    /// as chassis numbers, are sent exactly as given.
    pub fn by_query(key: &str, value: &str, name: &'static str) -> Self {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair(key, value)
            .finish();
        AutoRequest {
            path: format!("{}?{}", REST_PATH, query),
            name,
        }
    }

    /// The query string, without the leading `?`, if the request has one.
    pub fn query(&self) -> Option<&str> {
        self.path.split_once('?').map(|(_, query)| query)
    }

    /// Send the request as the given user. Success and failure are recorded by
    /// goose; the response is not validated here.
    pub async fn send(&self, user: &mut GooseUser) -> Result<GooseResponse, Box<TransactionError>> {
        user.get_named(&self.path, self.name).await
    }
}
