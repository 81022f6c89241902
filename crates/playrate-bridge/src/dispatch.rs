//! Answers parsed control requests against the speed authority.

use playrate_core::errors::SpeedError;
use playrate_core::protocol::{requested_amount, Request, Response};
use playrate_engine::SpeedAuthority;

/// Answer one request.
///
/// `getSpeed` is a pure read and cannot fail. The mutations report
/// application failures through the legacy `{success: false, error}` shape;
/// by the time that reply is built the authoritative value has already
/// moved, exactly as callers of the original surface expect.
pub fn dispatch(authority: &SpeedAuthority, request: Request) -> Response {
    match request {
        Request::GetSpeed => Response::speed(authority.speed()),
        Request::ChangeSpeed { delta, value } => {
            mutation_reply(authority.adjust(requested_amount(delta, value)))
        }
        Request::SetSpeed { delta, value } => {
            mutation_reply(authority.set(requested_amount(delta, value)))
        }
    }
}

fn mutation_reply(outcome: Result<f64, SpeedError>) -> Response {
    match outcome {
        Ok(speed) => Response::applied(speed),
        Err(error) => Response::rejected(error.to_string()),
    }
}

/// Parse and answer a raw wire value. `None` means the message was not a
/// recognizable request and must be ignored without any reply at all.
pub fn handle_raw(authority: &SpeedAuthority, raw: &serde_json::Value) -> Option<Response> {
    let request: Request = serde_json::from_value(raw.clone()).ok()?;
    Some(dispatch(authority, request))
}
