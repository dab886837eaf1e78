use failure::Fail;
use http::Method;

#[derive(Debug, Fail, PartialEq)]
pub enum Error {
    #[fail(display = "Unknown method: {}", _0)]
    UnknownMethod(String),
    #[fail(display = "Invalid method: {}", _0)]
    InvalidMethod(Method),
    #[fail(display = "Missing query argument")]
    MissingQuery,
    #[fail(display = "Missing post body")]
    MissingPostBody,
    #[fail(display = "Invalid body")]
    InvalidBody,
    #[fail(display = "Prohibit extra field: {}", _0)]
    ProhibitExtraField(String),
    #[fail(display = "{} parameter must not occur more than once", _0)]
    MultipleParameter(&'static str),
    #[fail(display = "Invalid variables parameter")]
    InvalidVariables,
    #[fail(display = "Cannot read seed file {}: {}", path, reason)]
    SeedIo { path: String, reason: String },
    #[fail(display = "Invalid seed data: {}", _0)]
    SeedFormat(String),
}
