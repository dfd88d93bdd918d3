//! Request descriptors and the path-template request builder.

use serde_json::{Map, Value};

use crate::{prelude::*, Error};

/// HTTP methods used by the venue's REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

/// Whether an endpoint requires authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiClass {
    Public,
    Private,
}

/// A fully resolved request, ready for the transport.
///
/// Immutable once built; signing consumes the descriptor and returns a new
/// one with authentication headers appended.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute URL, `{base_url}{path}`.
    pub url: String,
    /// Resolved path including the version segment and query string.
    /// This is the string covered by the request signature.
    pub path: String,
    pub headers: Vec<(String, String)>,
    /// Serialized JSON body, present only for private POST requests.
    pub body: Option<String>,
}

/// Builds [`ApiRequest`] values from path templates and parameters.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    base_url: String,
    version: String,
}

/// Render a parameter value for use in a path or query string.
fn param_str(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Join parameters into a query string, `key=value` pairs separated by `&`.
fn build_query_string(params: &[(&str, Value)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, param_str(v)))
        .collect::<Vec<_>>()
        .join("&")
}

impl RequestBuilder {
    pub fn new(base_url: impl Into<String>, version: impl Into<String>) -> Self {
        RequestBuilder {
            base_url: base_url.into(),
            version: version.into(),
        }
    }

    /// Build a request from a path template and parameters.
    ///
    /// `{name}` placeholders in the template are substituted from `params`
    /// and the consumed entries dropped. Leftover parameters go to the query
    /// string, except for private POST requests where they form the JSON
    /// body and are deliberately kept out of the URL.
    ///
    /// Fails with [`Error::Argument`] when a placeholder has no value.
    pub fn build(
        &self,
        method: Method,
        path_template: &str,
        params: &[(&str, Value)],
        api: ApiClass,
    ) -> Result<ApiRequest> {
        let (resolved, consumed) = self.interpolate(path_template, params)?;
        let leftover: Vec<(&str, Value)> = params
            .iter()
            .filter(|(k, _)| !consumed.contains(k))
            .map(|(k, v)| (*k, v.clone()))
            .collect();

        let mut path = format!("/{}/{}", self.version, resolved.trim_start_matches('/'));
        let mut body = None;

        let in_body = api == ApiClass::Private && method == Method::Post;
        if in_body {
            if !leftover.is_empty() {
                let mut object = Map::new();
                for (k, v) in leftover {
                    object.insert(k.to_string(), v);
                }
                body = Some(
                    serde_json::to_string(&Value::Object(object))
                        .map_err(|e| Error::JsonParse(e.to_string()))?,
                );
            }
        } else if !leftover.is_empty() {
            path.push('?');
            path.push_str(&build_query_string(&leftover));
        }

        Ok(ApiRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            path,
            headers: Vec::new(),
            body,
        })
    }

    /// Substitute `{name}` placeholders, returning the resolved path and the
    /// names of the consumed parameters.
    fn interpolate<'a>(
        &self,
        path_template: &'a str,
        params: &[(&str, Value)],
    ) -> Result<(String, Vec<&'a str>)> {
        let mut resolved = String::with_capacity(path_template.len());
        let mut consumed = Vec::new();
        let mut rest = path_template;

        while let Some(start) = rest.find('{') {
            resolved.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let end = after.find('}').ok_or_else(|| {
                Error::Argument(format!("unclosed placeholder in path: {path_template}"))
            })?;
            let name = &after[..end];
            let value = params
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v)
                .ok_or_else(|| {
                    Error::Argument(format!("missing value for path parameter: {name}"))
                })?;
            resolved.push_str(&param_str(value));
            consumed.push(name);
            rest = &after[end + 1..];
        }
        resolved.push_str(rest);

        Ok((resolved, consumed))
    }
}
