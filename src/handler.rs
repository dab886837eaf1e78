use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context as TaskContext, Poll};

use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use failure::Error as Failure;
use lambda_runtime::{LambdaEvent, Service};

use crate::config::Ide;
use crate::request::{GraphQLRequest, ProxyRequest};
use crate::response;
use crate::schema::{Context, Schema};

/// Aws Api Gateway GraphQL Handler for GET and POST requests
#[derive(Clone)]
pub struct GraphQLHandler {
    root_node: Arc<Schema>,
    context: Arc<Context>,
    ide: Ide,
    graphql_endpoint: Arc<str>,
}

impl GraphQLHandler {
    pub fn new(root_node: Schema, context: Context) -> Self {
        Self {
            root_node: Arc::new(root_node),
            context: Arc::new(context),
            ide: Ide::Disabled,
            graphql_endpoint: Arc::from("/graphql"),
        }
    }

    /// Serves `ide` for GET requests without a query, pointed at `graphql_endpoint`.
    pub fn with_ide<S: Into<String>>(mut self, ide: Ide, graphql_endpoint: S) -> Self {
        self.ide = ide;
        self.graphql_endpoint = Arc::from(graphql_endpoint.into());
        self
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Answers one proxy request.
    ///
    /// Requests that cannot be parsed get a `400` GraphQL error response;
    /// only a failure to encode a response is returned as an error.
    pub fn handle(&self, req: ProxyRequest<'_>) -> Result<ApiGatewayProxyResponse, Failure> {
        if req.is_ide_request() {
            match self.ide {
                Ide::Graphiql => return Ok(response::graphiql_source(&self.graphql_endpoint)),
                Ide::Playground => return Ok(response::playground_source(&self.graphql_endpoint)),
                Ide::Disabled => {}
            }
        }
        let gql_req = match GraphQLRequest::try_from(req) {
            Ok(gql_req) => gql_req,
            Err(err) => {
                tracing::warn!(method = ?req.method, error = %err, "rejected GraphQL request");
                return response::rejected(&err);
            }
        };
        tracing::debug!(
            operations = ?gql_req.operation_names(),
            batch = gql_req.is_batch(),
            "executing GraphQL request"
        );
        gql_req.execute(&self.root_node, &self.context)
    }
}

impl Service<LambdaEvent<ApiGatewayProxyRequest>> for GraphQLHandler {
    type Response = ApiGatewayProxyResponse;
    type Error = lambda_runtime::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, event: LambdaEvent<ApiGatewayProxyRequest>) -> Self::Future {
        let handler = self.clone();
        Box::pin(async move {
            let req = ProxyRequest::from(&event.payload);
            handler
                .handle(req)
                .map_err(|err| lambda_runtime::Error::from(err.compat()))
        })
    }
}
