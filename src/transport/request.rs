use url::Url;

pub use reqwest::Method;

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("base URL cannot be a base for resource paths")]
    BaseUrlCannotBeABase,

    #[error("resource template references unbound path parameter: {name}")]
    MissingPathParam { name: String },

    #[error("path parameter has no placeholder in the resource template: {name}")]
    UnusedPathParam { name: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
/// One REST call before URL rendering: a resource template such as
/// `messages/{id}` plus the parameters to bind into it.
pub struct RestRequest {
    resource: &'static str,
    method: Method,
    path_params: Vec<(&'static str, String)>,
    query_params: Vec<(&'static str, String)>,
    body_params: Vec<(&'static str, String)>,
}

impl RestRequest {
    pub fn new(method: Method, resource: &'static str) -> Self {
        Self {
            resource,
            method,
            path_params: Vec::new(),
            query_params: Vec::new(),
            body_params: Vec::new(),
        }
    }

    pub fn get(resource: &'static str) -> Self {
        Self::new(Method::GET, resource)
    }

    pub fn delete(resource: &'static str) -> Self {
        Self::new(Method::DELETE, resource)
    }

    pub fn post(resource: &'static str) -> Self {
        Self::new(Method::POST, resource)
    }

    /// Bind a `{name}` placeholder in the resource template.
    pub fn with_path_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.path_params.push((name, value.into()));
        self
    }

    pub fn with_query_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.query_params.push((name, value.into()));
        self
    }

    pub fn with_body_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.body_params.push((name, value.into()));
        self
    }

    pub fn resource(&self) -> &'static str {
        self.resource
    }

    pub fn method(&self) -> Method {
        self.method.clone()
    }

    pub fn query_params(&self) -> &[(&'static str, String)] {
        &self.query_params
    }

    pub fn body_params(&self) -> &[(&'static str, String)] {
        &self.body_params
    }

    /// Total number of bound parameters, across path, query, and body.
    pub fn param_count(&self) -> usize {
        self.path_params.len() + self.query_params.len() + self.body_params.len()
    }

    /// Look up a bound parameter by name, regardless of where it is bound.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.path_params
            .iter()
            .chain(&self.query_params)
            .chain(&self.body_params)
            .find(|(param, _)| *param == name)
            .map(|(_, value)| value.as_str())
    }

    /// Substitute path parameters into the template, segment by segment.
    ///
    /// Placeholders always span a whole segment in this API, so values can
    /// never smuggle extra `/` separators into the path.
    fn render_segments(&self) -> Result<Vec<&str>, RequestError> {
        let mut used = vec![false; self.path_params.len()];
        let mut segments = Vec::new();

        for segment in self.resource.split('/') {
            let placeholder = segment
                .strip_prefix('{')
                .and_then(|rest| rest.strip_suffix('}'));
            match placeholder {
                Some(name) => {
                    let position = self
                        .path_params
                        .iter()
                        .position(|(param, _)| *param == name)
                        .ok_or_else(|| RequestError::MissingPathParam {
                            name: name.to_owned(),
                        })?;
                    used[position] = true;
                    segments.push(self.path_params[position].1.as_str());
                }
                None => segments.push(segment),
            }
        }

        if let Some(position) = used.iter().position(|bound| !bound) {
            return Err(RequestError::UnusedPathParam {
                name: self.path_params[position].0,
            });
        }
        Ok(segments)
    }
}

/// Render the full request URL: base URL, substituted resource path, and
/// URL-encoded query parameters.
pub fn build_url(base_url: &str, request: &RestRequest) -> Result<Url, RequestError> {
    let segments = request.render_segments()?;

    let mut url = Url::parse(base_url)?;
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| RequestError::BaseUrlCannotBeABase)?;
        path.pop_if_empty();
        for segment in segments {
            path.push(segment);
        }
    }

    if !request.query_params().is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (name, value) in request.query_params() {
            pairs.append_pair(name, value);
        }
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_path_placeholders() {
        let request = RestRequest::get("messages/{id}").with_path_param("id", "49575710");
        let url = build_url("https://example.invalid/api/v2", &request).unwrap();
        assert_eq!(url.as_str(), "https://example.invalid/api/v2/messages/49575710");
    }

    #[test]
    fn substitutes_nested_templates() {
        let request = RestRequest::get("sessions/{id}/messages")
            .with_path_param("id", "34436259")
            .with_query_param("page", "2")
            .with_query_param("limit", "3");
        let url = build_url("https://example.invalid/api/v2", &request).unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.invalid/api/v2/sessions/34436259/messages?page=2&limit=3"
        );
    }

    #[test]
    fn percent_encodes_path_values() {
        let request = RestRequest::get("chats/{phone}").with_path_param("phone", "+999 123");
        let url = build_url("https://example.invalid/api/v2", &request).unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.invalid/api/v2/chats/+999%20123"
        );
    }

    #[test]
    fn url_encodes_query_parameters() {
        let request = RestRequest::get("messages").with_query_param("page", "a&b=c");
        let url = build_url("https://example.invalid/api/v2", &request).unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.invalid/api/v2/messages?page=a%26b%3Dc"
        );
    }

    #[test]
    fn trailing_slash_in_base_url_is_tolerated() {
        let request = RestRequest::get("messages");
        let url = build_url("https://example.invalid/api/v2/", &request).unwrap();
        assert_eq!(url.as_str(), "https://example.invalid/api/v2/messages");
    }

    #[test]
    fn unbound_placeholder_is_an_error() {
        let request = RestRequest::get("messages/{id}");
        let err = build_url("https://example.invalid/api/v2", &request).unwrap_err();
        assert!(matches!(err, RequestError::MissingPathParam { name } if name == "id"));
    }

    #[test]
    fn extra_path_param_is_an_error() {
        let request = RestRequest::get("messages").with_path_param("id", "1");
        let err = build_url("https://example.invalid/api/v2", &request).unwrap_err();
        assert!(matches!(err, RequestError::UnusedPathParam { name: "id" }));
    }

    #[test]
    fn invalid_base_url_is_an_error() {
        let request = RestRequest::get("messages");
        assert!(matches!(
            build_url("not a url", &request),
            Err(RequestError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn param_lookup_spans_path_query_and_body() {
        let request = RestRequest::post("messages")
            .with_body_param("text", "hello")
            .with_query_param("page", "2");
        assert_eq!(request.param("text"), Some("hello"));
        assert_eq!(request.param("page"), Some("2"));
        assert_eq!(request.param("limit"), None);
        assert_eq!(request.param_count(), 2);
    }
}
