//! The `Date` scalar and its codec.
//!
//! Dates travel as epoch milliseconds on every path: variables, inline
//! literals and output. Juniper's default scalar value only carries 32-bit
//! integers, so a value outside `i32` is written as an integral float.

use chrono::{DateTime, Utc};
use juniper::{
    GraphQLScalar, InputValue, ParseScalarResult, ParseScalarValue, ScalarToken, ScalarValue,
    Value,
};

/// Largest integer an `f64` holds exactly.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

///
/// Point in time, exchanged as milliseconds since the Unix epoch
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, GraphQLScalar)]
#[graphql(with = wire)]
pub struct Date(DateTime<Utc>);

impl Date {
    pub fn epoch() -> Self {
        Self(DateTime::UNIX_EPOCH)
    }

    /// `None` when the value is outside the range chrono can represent.
    pub fn from_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(Self)
    }

    pub fn millis(&self) -> i64 {
        self.0.timestamp_millis()
    }
}

impl From<DateTime<Utc>> for Date {
    fn from(timestamp: DateTime<Utc>) -> Self {
        Self(timestamp)
    }
}

impl From<Date> for DateTime<Utc> {
    fn from(date: Date) -> Self {
        date.0
    }
}

/// Converts a client-supplied variable into a date.
///
/// Accepts an integer, or a float without a fractional part for values that
/// do not fit GraphQL's 32-bit `Int`.
pub fn parse_value<S: ScalarValue>(input: &InputValue<S>) -> Result<Date, String> {
    let millis = if let Some(int) = input.as_int_value() {
        i64::from(int)
    } else if let Some(float) = input.as_float_value() {
        if float.fract() != 0.0 || float.abs() > MAX_EXACT_FLOAT {
            return Err(format!("Expected epoch milliseconds, found: {float}"));
        }
        float as i64
    } else {
        return Err(format!("Expected epoch milliseconds, found: {input}"));
    };
    Date::from_millis(millis).ok_or_else(|| format!("Timestamp out of range: {millis}"))
}

/// Epoch milliseconds sent back to the client.
pub fn serialize(date: &Date) -> i64 {
    date.millis()
}

/// Parses an inline literal. Only integer tokens are dates.
pub fn parse_literal(token: &ScalarToken<'_>) -> Option<Date> {
    match token {
        ScalarToken::Int(raw) => raw.parse::<i64>().ok().and_then(Date::from_millis),
        _ => {
            tracing::trace!(?token, "Date literal is not an integer");
            None
        }
    }
}

fn millis_scalar<S: ScalarValue>(millis: i64) -> S {
    match i32::try_from(millis) {
        Ok(int) => S::from(int),
        Err(_) => S::from(millis as f64),
    }
}

mod wire {
    use super::*;

    pub(super) fn to_output<S: ScalarValue>(date: &Date) -> Value<S> {
        Value::Scalar(millis_scalar(serialize(date)))
    }

    pub(super) fn from_input<S: ScalarValue>(input: &InputValue<S>) -> Result<Date, String> {
        parse_value(input)
    }

    // Token parsing has no null result: a `null` literal never reaches this
    // function and is the only way to pass a null `Date` argument. Any other
    // unsupported literal fails the whole document.
    pub(super) fn parse_token<S: ScalarValue>(token: ScalarToken<'_>) -> ParseScalarResult<S> {
        match parse_literal(&token) {
            Some(date) => Ok(millis_scalar(serialize(&date))),
            // Let juniper report the token with its usual error.
            None => <i32 as ParseScalarValue<S>>::from_str(token),
        }
    }
}
