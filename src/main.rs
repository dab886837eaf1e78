use failure::Error as Failure;
use juniper_bookshelf::{schema, BookCollection, Context, GraphQLHandler, Settings};
use tracing_subscriber::EnvFilter;

type Error = lambda_runtime::Error;

fn books(settings: &Settings) -> Result<BookCollection, Failure> {
    match &settings.seed_file {
        Some(path) => BookCollection::from_file(path),
        None => Ok(BookCollection::seeded()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let settings = Settings::load()?;

    // CloudWatch stamps every line already.
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.log)?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time()
        .init();

    let books = books(&settings).map_err(|err| Error::from(err.compat()))?;
    tracing::info!(
        books = books.len(),
        ide = ?settings.ide,
        endpoint = %settings.graphql_endpoint,
        "starting bookshelf"
    );

    let handler = GraphQLHandler::new(schema(), Context::new(books))
        .with_ide(settings.ide, settings.graphql_endpoint);
    lambda_runtime::run(handler).await
}
