use axum::extract::{FromRequest, Request};
use bytes::Bytes;

use crate::application::http::server::api_entities::api_error::ApiError;

/// Raw form fields in submission order, repeated keys included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields(pub Vec<(String, String)>);

impl FormFields {
    pub fn values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn first<'a>(&'a self, name: &'a str) -> Option<&'a str> {
        self.values(name).next()
    }
}

impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        let fields: Vec<(String, String)> = serde_urlencoded::from_bytes(&body)
            .map_err(|e| ApiError::BadRequest(format!("Invalid form body: {e}")))?;

        Ok(FormFields(fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_returns_every_occurrence() {
        let fields: Vec<(String, String)> =
            serde_urlencoded::from_str("flags=veg&flags=iron&other=1").unwrap();
        let form = FormFields(fields);

        assert_eq!(form.values("flags").collect::<Vec<_>>(), vec!["veg", "iron"]);
        assert_eq!(form.first("other"), Some("1"));
        assert_eq!(form.first("missing"), None);
    }
}
