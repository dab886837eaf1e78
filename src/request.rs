//! Parsing of API Gateway proxy events into GraphQL requests.

use std::collections::HashMap;

use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use failure::Error as Failure;
use http::{method::Method, status::StatusCode};
use juniper::http::{GraphQLBatchRequest, GraphQLRequest as SingleRequest};
use juniper::InputValue;

use crate::error::Error;
use crate::response::json;
use crate::schema::{Context, Schema};

/// The parts of a proxy event a GraphQL request is built from.
#[derive(Clone, Copy, Debug)]
pub struct ProxyRequest<'a> {
    pub method: Option<&'a str>,
    pub query_parameters: &'a HashMap<String, Vec<String>>,
    pub body: Option<&'a str>,
}

impl<'a> From<&'a ApiGatewayProxyRequest> for ProxyRequest<'a> {
    fn from(req: &'a ApiGatewayProxyRequest) -> Self {
        Self {
            method: req.http_method.as_deref(),
            query_parameters: &req.multi_value_query_string_parameters,
            body: req.body.as_deref(),
        }
    }
}

impl<'a> ProxyRequest<'a> {
    pub fn method(&self) -> Result<Method, Failure> {
        let raw_method = self.method.unwrap_or_default();
        Method::try_from(raw_method).map_err(|_| Error::UnknownMethod(raw_method.to_owned()).into())
    }

    /// GET without a `query` parameter, which is answered with the IDE page.
    pub fn is_ide_request(&self) -> bool {
        self.method == Some("GET") && !self.query_parameters.contains_key("query")
    }
}

/// Returns the single value of a query string parameter.
fn single<'p>(name: &'static str, values: &'p [String]) -> Result<Option<&'p String>, Failure> {
    match values {
        [] => Ok(None),
        [value] => Ok(Some(value)),
        _ => Err(Error::MultipleParameter(name).into()),
    }
}

/// Simple wrapper around an incoming GraphQL request
///
/// Both single and batched requests are supported for POST; GET carries a
/// single request in its query string.
#[derive(Debug)]
pub struct GraphQLRequest(GraphQLBatchRequest);

impl GraphQLRequest {
    pub fn from_get(parameters: &HashMap<String, Vec<String>>) -> Result<Self, Failure> {
        let mut query = None;
        let mut operation_name = None;
        let mut variables = None;
        for (key, values) in parameters {
            match key.as_str() {
                "query" => query = single("query", values)?,
                "operationName" => operation_name = single("operationName", values)?,
                "variables" => variables = single("variables", values)?,
                _ => return Err(Error::ProhibitExtraField(key.to_owned()).into()),
            }
        }
        let query = match query {
            Some(query) if !query.is_empty() => query.to_owned(),
            _ => return Err(Error::MissingQuery.into()),
        };
        let variables = match variables {
            Some(variables) => Some(
                serde_json::from_str::<InputValue>(variables)
                    .map_err(|_| Error::InvalidVariables)?,
            ),
            None => None,
        };
        Ok(Self(GraphQLBatchRequest::Single(SingleRequest::new(
            query,
            operation_name.cloned(),
            variables,
        ))))
    }

    pub fn from_post(body: Option<&str>) -> Result<Self, Failure> {
        let body = body.ok_or(Error::MissingPostBody)?;
        let request = serde_json::from_str(body).map_err(|_| Error::InvalidBody)?;
        Ok(Self(request))
    }

    /// Execute an incoming GraphQL query
    pub fn execute(
        &self,
        root_node: &Schema,
        context: &Context,
    ) -> Result<ApiGatewayProxyResponse, Failure> {
        let response = self.0.execute_sync(root_node, context);
        let status_code = if response.is_ok() {
            StatusCode::OK
        } else {
            StatusCode::BAD_REQUEST
        };
        let body = serde_json::to_string(&response)?;
        Ok(json(status_code, body))
    }

    /// Returns the operation names associated with this request.
    ///
    /// For batch requests there will be multiple names.
    pub fn operation_names(&self) -> Vec<Option<&str>> {
        self.0.operation_names()
    }

    pub fn is_batch(&self) -> bool {
        matches!(self.0, GraphQLBatchRequest::Batch(_))
    }
}

impl<'a> TryFrom<ProxyRequest<'a>> for GraphQLRequest {
    type Error = Failure;

    fn try_from(req: ProxyRequest<'a>) -> Result<Self, Self::Error> {
        match req.method()? {
            Method::GET => Self::from_get(req.query_parameters),
            Method::POST => Self::from_post(req.body),
            method => Err(Error::InvalidMethod(method).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        let mut parameters: HashMap<String, Vec<String>> = HashMap::new();
        for (key, value) in pairs {
            parameters
                .entry(key.to_string())
                .or_default()
                .push(value.to_string());
        }
        parameters
    }

    fn error_of(result: Result<GraphQLRequest, Failure>) -> Error {
        result
            .unwrap_err()
            .downcast::<Error>()
            .expect("crate error")
    }

    #[test]
    fn get_with_all_parameters() {
        let parameters = params(&[
            ("query", "query Shelf($g: String) { books(gender: $g) { title } }"),
            ("operationName", "Shelf"),
            ("variables", r#"{"g": "F"}"#),
        ]);
        let request = GraphQLRequest::from_get(&parameters).unwrap();
        assert_eq!(request.operation_names(), vec![Some("Shelf")]);
        assert!(!request.is_batch());
    }

    #[test]
    fn get_requires_query() {
        assert_eq!(
            error_of(GraphQLRequest::from_get(&HashMap::new())),
            Error::MissingQuery
        );
        assert_eq!(
            error_of(GraphQLRequest::from_get(&params(&[("query", "")]))),
            Error::MissingQuery
        );
    }

    #[test]
    fn get_rejects_repeated_parameters() {
        let parameters = params(&[("query", "{ a }"), ("query", "{ b }")]);
        assert_eq!(
            error_of(GraphQLRequest::from_get(&parameters)),
            Error::MultipleParameter("query")
        );
    }

    #[test]
    fn get_rejects_unknown_parameters() {
        let parameters = params(&[("query", "{ a }"), ("extra", "1")]);
        assert_eq!(
            error_of(GraphQLRequest::from_get(&parameters)),
            Error::ProhibitExtraField("extra".into())
        );
    }

    #[test]
    fn get_rejects_invalid_variables() {
        let parameters = params(&[("query", "{ a }"), ("variables", "{")]);
        assert_eq!(
            error_of(GraphQLRequest::from_get(&parameters)),
            Error::InvalidVariables
        );
    }

    #[test]
    fn post_single_and_batch() {
        let single = GraphQLRequest::from_post(Some(r#"{"query": "{ apiVersion }"}"#)).unwrap();
        assert!(!single.is_batch());

        let batch = GraphQLRequest::from_post(Some(
            r#"[{"query": "{ apiVersion }"}, {"query": "{ search { __typename } }"}]"#,
        ))
        .unwrap();
        assert!(batch.is_batch());
        assert_eq!(batch.operation_names(), vec![None, None]);
    }

    #[test]
    fn post_rejects_missing_or_invalid_body() {
        assert_eq!(error_of(GraphQLRequest::from_post(None)), Error::MissingPostBody);
        assert_eq!(
            error_of(GraphQLRequest::from_post(Some("not json"))),
            Error::InvalidBody
        );
    }

    #[test]
    fn dispatches_on_method() {
        let empty: HashMap<String, Vec<String>> = HashMap::new();
        let query = hashmap! { "query".to_owned() => vec!["{ apiVersion }".to_owned()] };
        let req = |method, query_parameters| ProxyRequest {
            method,
            query_parameters,
            body: None,
        };

        assert!(GraphQLRequest::try_from(req(Some("GET"), &query)).is_ok());
        assert_eq!(
            error_of(GraphQLRequest::try_from(req(Some("POST"), &empty))),
            Error::MissingPostBody
        );
        assert_eq!(
            error_of(GraphQLRequest::try_from(req(Some("DELETE"), &empty))),
            Error::InvalidMethod(Method::DELETE)
        );
        assert_eq!(
            error_of(GraphQLRequest::try_from(req(Some("BAD METHOD"), &empty))),
            Error::UnknownMethod("BAD METHOD".into())
        );
        assert_eq!(
            error_of(GraphQLRequest::try_from(req(None, &empty))),
            Error::UnknownMethod(String::new())
        );
    }

    #[test]
    fn ide_request_is_get_without_query() {
        let empty: HashMap<String, Vec<String>> = HashMap::new();
        let get = ProxyRequest {
            method: Some("GET"),
            query_parameters: &empty,
            body: None,
        };
        assert!(get.is_ide_request());
        assert!(!ProxyRequest {
            method: Some("POST"),
            ..get
        }
        .is_ide_request());
    }
}
