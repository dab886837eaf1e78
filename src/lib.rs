/*!

# juniper_bookshelf

A sample bookshelf [GraphQL][GraphQL] schema built with [Juniper][Juniper] and
served from the [AWS Lambda Runtime][AWS Lambda Runtime] behind
[AWS Api Gateway][AWS Api Gateway].

The schema shows off three GraphQL features over a small in-memory shelf:

* the `Author` interface and the `SearchResult` union, both resolving an
  author record to `Human` or `Robot`,
* the `Date` custom scalar, exchanged as epoch milliseconds,
* the `addBook` mutation, which appends to the shelf.

## Example

```no_run
use juniper_bookshelf::{schema, BookCollection, Context, GraphQLHandler};

# async fn run() -> Result<(), lambda_runtime::Error> {
let handler = GraphQLHandler::new(schema(), Context::new(BookCollection::seeded()));
lambda_runtime::run(handler).await
# }
```

## Links

* [Juniper][Juniper]
* [AWS Lambda Runtime][AWS Lambda Runtime]

[AWS Api Gateway]: https://aws.amazon.com/api-gateway/
[AWS Lambda Runtime]: https://github.com/awslabs/aws-lambda-rust-runtime
[Juniper]: https://github.com/graphql-rust/juniper
[GraphQL]: http://graphql.org

*/

pub mod config;
pub mod error;
pub mod handler;
pub mod model;
pub mod request;
pub mod response;
pub mod schema;
pub mod store;

pub use crate::config::{Ide, Settings};
pub use crate::error::Error;
pub use crate::handler::GraphQLHandler;
pub use crate::model::{AuthorKind, AuthorRecord, Book};
pub use crate::request::{GraphQLRequest, ProxyRequest};
pub use crate::schema::{resolve_variant, schema, Context, Date, Schema};
pub use crate::store::BookCollection;
