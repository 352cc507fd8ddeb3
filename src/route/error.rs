use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RouteError {
    #[error("path enumeration exceeded the limit of {limit} path(s)")]
    SearchTruncated { limit: usize },
}
