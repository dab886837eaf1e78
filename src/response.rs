//! Proxy responses built outside of the normal execution flow.

use std::collections::HashMap;

use aws_lambda_events::event::apigw::ApiGatewayProxyResponse;
use failure::Error as Failure;
use http::{header, status::StatusCode};
use juniper::{http as juniper_http, FieldError, Value};
use maplit::hashmap;

fn response(status_code: StatusCode, content_type: &str, body: String) -> ApiGatewayProxyResponse {
    ApiGatewayProxyResponse {
        status_code: i64::from(status_code.as_u16()),
        multi_value_headers: HashMap::with_capacity(0),
        headers: hashmap! {header::CONTENT_TYPE.to_string() => content_type.to_owned()},
        is_base64_encoded: Some(false),
        body: Some(body),
    }
}

pub(crate) fn html(body: String) -> ApiGatewayProxyResponse {
    response(StatusCode::OK, "text/html", body)
}

pub(crate) fn json(status_code: StatusCode, body: String) -> ApiGatewayProxyResponse {
    response(status_code, "application/json", body)
}

/// Constructs an error response outside of the normal execution flow
pub fn error(error: FieldError) -> Result<ApiGatewayProxyResponse, Failure> {
    let response = juniper_http::GraphQLResponse::error(error);
    let body = serde_json::to_string(&response)?;
    Ok(json(StatusCode::BAD_REQUEST, body))
}

/// Error response for a request that never reached the executor.
pub fn rejected(reason: &Failure) -> Result<ApiGatewayProxyResponse, Failure> {
    error(FieldError::new(reason, Value::null()))
}

/// Generate an HTML page containing GraphiQL
pub fn graphiql_source(graphql_endpoint_url: &str) -> ApiGatewayProxyResponse {
    html(juniper_http::graphiql::graphiql_source(
        graphql_endpoint_url,
        None,
    ))
}

/// Generate an HTML page containing GraphQL Playground
pub fn playground_source(graphql_endpoint_url: &str) -> ApiGatewayProxyResponse {
    html(juniper_http::playground::playground_source(
        graphql_endpoint_url,
        None,
    ))
}
