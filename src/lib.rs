//! Typed Rust client for the iliveit Messaging HTTP API.
//!
//! The crate is layered the same way the wire contract is: a domain layer of
//! strong types with validation, a transport layer for wire-format quirks
//! (JSON envelopes, the double-encoded build payloads, response
//! classification), and a small client layer orchestrating one HTTP call per
//! operation. Validation and configuration problems fail fast as errors;
//! everything that happens after a request is sent is normalized into
//! [`ApiResult`] so callers have one place to check the outcome.
//!
//! ```rust,no_run
//! use messagingapi::{
//!     AccessToken, MessageAction, MessageOptions, MessagePayload, MessageText, MessagingClient,
//!     Msisdn, MvnoId, Network, NewMessageRequest, SmsMessage,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), messagingapi::MessagingError> {
//!     let client = MessagingClient::new(
//!         "https://api.example.invalid/v1",
//!         AccessToken::new("your access token")?,
//!     )?;
//!
//!     let sms = SmsMessage {
//!         network: Network::new("local_smpp")?,
//!         recipients: vec![Msisdn::new("27700000000")?],
//!         text: MessageText::new("This is my SMS text")?,
//!         extra_digits: None,
//!     };
//!     let request = NewMessageRequest::new(
//!         MessageAction::SubmitSms,
//!         MvnoId::new(4)?,
//!         MessagePayload::Sms(sms),
//!         MessageOptions::default(),
//!     )?;
//!
//!     let result = client.create(&request).await?;
//!     if result.is_ok() {
//!         println!("{}", result.data.map(|r| r.message_id).unwrap_or_default());
//!     } else {
//!         eprintln!("{}", result.description);
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{MessagingClient, MessagingClientBuilder, MessagingError};
pub use domain::{
    AccessToken, ApiResult, ApiStatus, ApprovalBatchState, ApprovalPerson, ApprovalRequest,
    ApprovalResult, ApprovalUpdateRequest, BatchId, BuildData, BuildOptions, BuildRequest,
    Campaign, CsvReport, EmailAddress, EmailAttachment, EmailMessage, ExtraDigits, ForcedSize,
    IncomingSms, MessageAction, MessageId, MessageOptions, MessagePayload, MessageStatus,
    MessageText, MmsContent, MmsContentKind, MmsMessage, MmsSlide, Msisdn, MvnoId, Network,
    NewMessageRequest, NewMessageResult, ResendMessageRequest, ScrubResult, SmsMessage,
    StageStatus, StatusEvent, StatusEvents, Subject, TemplateId, ValidationError,
};
