//! Arithmetic endpoints.
//!
//! Every route takes a JSON body, runs one function from [`crate::arith`] and
//! answers `{"result": ...}`. Bodies that do not match the expected shape are
//! rejected by [`Payload`] before any arithmetic runs.

use axum::{extract::FromRequest, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::arith::{self, Number, Quotient};
use crate::error::ApiError;

/// JSON body extractor whose rejection renders as an [`ApiError`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct Payload<T>(pub T);

/// Request body for the two-operand routes.
#[derive(Debug, Deserialize)]
pub struct PairOperands {
    pub a: i64,
    pub b: i64,
}

/// Request body for `POST /average`.
#[derive(Debug, Deserialize)]
pub struct OperandList {
    pub numbers: Vec<i64>,
}

/// Response body shared by every arithmetic route.
#[derive(Debug, Serialize)]
pub struct MathResponse<T> {
    pub result: T,
}

type MathResult<T> = Result<Json<MathResponse<T>>, ApiError>;

fn respond<T>(result: T) -> Json<MathResponse<T>> {
    Json(MathResponse { result })
}

/// `POST /add`
pub async fn add(Payload(op): Payload<PairOperands>) -> MathResult<i64> {
    Ok(respond(arith::add(op.a, op.b)?))
}

/// `POST /multiply`
pub async fn multiply(Payload(op): Payload<PairOperands>) -> MathResult<i64> {
    Ok(respond(arith::multiply(op.a, op.b)?))
}

/// `POST /subtract` — `a - b`.
pub async fn subtract(Payload(op): Payload<PairOperands>) -> MathResult<i64> {
    Ok(respond(arith::subtract(op.a, op.b)?))
}

/// `POST /divide` — `a / b` as a real number.
///
/// A zero divisor still answers `200 OK`, with the string
/// `"Cannot divide by zero"` as the result.
pub async fn divide(Payload(op): Payload<PairOperands>) -> Json<MathResponse<Quotient>> {
    let quotient = arith::divide(op.a, op.b);
    if quotient == Quotient::DivisionByZero {
        debug!("Division by zero requested (a = {})", op.a);
    }
    respond(quotient)
}

/// `POST /exponentiate` — `a` raised to `b`.
pub async fn exponentiate(Payload(op): Payload<PairOperands>) -> MathResult<Number> {
    Ok(respond(arith::exponentiate(op.a, op.b)?))
}

/// `POST /average`
pub async fn average(Payload(list): Payload<OperandList>) -> MathResult<f64> {
    Ok(respond(arith::average(&list.numbers)?))
}

/// `POST /factorial` — `a!`. `b` must be present but is ignored.
pub async fn factorial(Payload(op): Payload<PairOperands>) -> MathResult<i64> {
    Ok(respond(arith::factorial(op.a)?))
}

/// `POST /new_function` — placeholder route for the next operation.
pub async fn new_function(Payload(op): Payload<PairOperands>) -> MathResult<i64> {
    Ok(respond(arith::new_function(op.a, op.b)?))
}
