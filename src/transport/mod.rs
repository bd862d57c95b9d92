//! Transport layer: wire-format details (request bodies and response
//! classification).

mod approval;
mod build;
mod classify;
mod message;
mod payload;

pub(crate) use approval::{encode_approval_request, encode_approval_update};
pub(crate) use build::encode_build_request;
pub(crate) use classify::{Classified, classify_response, classify_transport_failure};
pub(crate) use message::{encode_new_message, encode_resend};
