// src/web/signed_body.rs
use crate::line::{verify_signature, SIGNATURE_HEADER};
use crate::web::types::ServerState;
use rocket::data::{self, Data, FromData, ToByteUnit};
use rocket::http::Status;
use rocket::outcome::Outcome;
use rocket::{Request, State};
use tracing::{error, warn};

/// Raw webhook body whose `X-Line-Signature` matched the channel secret.
pub struct SignedBody(pub String);

impl SignedBody {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug)]
pub enum SignatureError {
    MissingSignature,
    InvalidSignature,
    TooLarge,
    Io(std::io::Error),
    MissingState,
}

impl SignatureError {
    pub fn message(&self) -> &'static str {
        match self {
            SignatureError::MissingSignature => "X-Line-Signature header required",
            SignatureError::InvalidSignature => "Invalid signature",
            SignatureError::TooLarge => "Webhook body too large",
            SignatureError::Io(_) => "Failed to read webhook body",
            SignatureError::MissingState => "Server state not configured",
        }
    }
}

fn reject<'r>(status: Status, reason: SignatureError) -> data::Outcome<'r, SignedBody> {
    match &reason {
        SignatureError::Io(e) => error!("Rejected webhook call: {}: {}", reason.message(), e),
        SignatureError::MissingState => error!("Rejected webhook call: {}", reason.message()),
        _ => warn!("Rejected webhook call: {}", reason.message()),
    }
    Outcome::Error((status, reason))
}

#[rocket::async_trait]
impl<'r> FromData<'r> for SignedBody {
    type Error = SignatureError;

    async fn from_data(req: &'r Request<'_>, data: Data<'r>) -> data::Outcome<'r, Self> {
        let state = match req.guard::<&State<ServerState>>().await {
            Outcome::Success(state) => state,
            _ => return reject(Status::InternalServerError, SignatureError::MissingState),
        };

        let signature = match req.headers().get_one(SIGNATURE_HEADER) {
            Some(signature) => signature.to_string(),
            None => return reject(Status::BadRequest, SignatureError::MissingSignature),
        };

        let limit = req.limits().get("string").unwrap_or_else(|| 1.mebibytes());
        let body = match data.open(limit).into_string().await {
            Ok(body) if body.is_complete() => body.into_inner(),
            Ok(_) => return reject(Status::PayloadTooLarge, SignatureError::TooLarge),
            Err(e) => return reject(Status::BadRequest, SignatureError::Io(e)),
        };

        if !verify_signature(&state.channel_secret, body.as_bytes(), &signature) {
            return reject(Status::BadRequest, SignatureError::InvalidSignature);
        }

        Outcome::Success(SignedBody(body))
    }
}
