use serde::Serialize;
use serde_json::value::RawValue;

use crate::domain::{
    BatchId, Campaign, NewMessageRequest, PostbackUrl, ResendMessageRequest, StatusEvents,
};
use crate::transport::payload::payload_json;

#[derive(Serialize)]
struct NewMessageBody<'a> {
    #[serde(rename = "Action")]
    action: u32,
    #[serde(rename = "MVNOID")]
    mvno_id: u32,
    #[serde(rename = "ApprovalBatch")]
    approval_batch: u32,
    #[serde(rename = "Data")]
    data: &'a RawValue,
    #[serde(rename = "Campaign")]
    campaign: &'a str,
    #[serde(rename = "PostbackReplyUrl")]
    postback_reply_url: &'a str,
    #[serde(rename = "PostbackStatusUrl")]
    postback_status_url: &'a str,
    #[serde(rename = "PostbackStatusTypes")]
    postback_status_types: String,
}

/// Encode the `message/send` envelope.
///
/// The payload nests directly under `Data` (an object for typed payloads, a
/// string for raw ones), unlike build requests, which double-encode.
pub(crate) fn encode_new_message(
    request: &NewMessageRequest,
) -> Result<String, serde_json::Error> {
    let data = RawValue::from_string(payload_json(request.payload())?)?;
    let options = request.options();
    serde_json::to_string(&NewMessageBody {
        action: request.action().code(),
        mvno_id: request.mvno_id().get(),
        approval_batch: options
            .approval_batch
            .map(BatchId::value)
            .unwrap_or_default(),
        data: &data,
        campaign: options.campaign.as_ref().map(Campaign::as_str).unwrap_or(""),
        postback_reply_url: options
            .postback_reply_url
            .as_ref()
            .map(PostbackUrl::as_str)
            .unwrap_or(""),
        postback_status_url: options
            .postback_status_url
            .as_ref()
            .map(PostbackUrl::as_str)
            .unwrap_or(""),
        postback_status_types: options
            .status_events
            .as_ref()
            .map(StatusEvents::encode)
            .unwrap_or_default(),
    })
}

#[derive(Serialize)]
struct ResendBody<'a> {
    #[serde(rename = "MessageID")]
    message_id: &'a str,
}

/// Encode the `message/resend` envelope.
pub(crate) fn encode_resend(request: &ResendMessageRequest) -> Result<String, serde_json::Error> {
    serde_json::to_string(&ResendBody {
        message_id: request.message_id().as_str(),
    })
}
