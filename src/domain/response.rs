use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Caller-facing outcome of one API call.
pub enum ApiStatus {
    Ok,
    Error,
    AuthFailed,
    InvalidMethod,
    ApiError,
    RateLimited,
}

impl ApiStatus {
    /// Numeric code used by the API for this status.
    pub fn code(self) -> u32 {
        match self {
            Self::Ok => 0,
            Self::Error => 1,
            Self::AuthFailed => 2,
            Self::InvalidMethod => 3,
            Self::ApiError => 4,
            Self::RateLimited => 5,
        }
    }

    /// Convert a raw status code into a known variant.
    pub fn from_code(code: u32) -> Option<Self> {
        Some(match code {
            0 => Self::Ok,
            1 => Self::Error,
            2 => Self::AuthFailed,
            3 => Self::InvalidMethod,
            4 => Self::ApiError,
            5 => Self::RateLimited,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Uniform envelope returned by every client operation.
///
/// Response-side failures (transport, protocol, result decoding) land in
/// `status` and `description` with `data` left empty; `data` is populated
/// exactly when `status` is [`ApiStatus::Ok`] and the operation returns a
/// body.
pub struct ApiResult<T> {
    pub status: ApiStatus,
    pub description: String,
    pub data: Option<T>,
}

impl<T> ApiResult<T> {
    pub(crate) fn ok(data: T) -> Self {
        Self {
            status: ApiStatus::Ok,
            description: "Ok".to_owned(),
            data: Some(data),
        }
    }

    pub(crate) fn ok_empty() -> Self {
        Self {
            status: ApiStatus::Ok,
            description: "Ok".to_owned(),
            data: None,
        }
    }

    pub(crate) fn failure(status: ApiStatus, description: impl Into<String>) -> Self {
        Self {
            status,
            description: description.into(),
            data: None,
        }
    }

    /// Whether the call succeeded at the API level.
    pub fn is_ok(&self) -> bool {
        self.status == ApiStatus::Ok
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Result of a message submit, resend, or generate call.
pub struct NewMessageResult {
    #[serde(rename = "MessageID", default)]
    pub message_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
/// Result of an approval create or update call.
pub struct ApprovalResult {
    #[serde(rename = "BatchID", default)]
    pub batch_id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
/// Status of one message lifecycle stage.
pub struct StageStatus {
    #[serde(rename = "StatusCode", default)]
    pub status_code: u32,
    #[serde(rename = "StatusDescription", default)]
    pub description: String,
    #[serde(rename = "Timestamp", default)]
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
/// Result of a message status lookup, and the payload of status-update
/// postbacks.
///
/// When received as a postback, the caller must answer with HTTP 200 or the
/// API redelivers the notification.
pub struct MessageStatus {
    #[serde(rename = "MessageID", default)]
    pub message_id: String,
    #[serde(rename = "Campaign", default)]
    pub campaign: String,
    #[serde(rename = "BuildStatus", default)]
    pub build: StageStatus,
    #[serde(rename = "ArchiveStatus", default)]
    pub archive: StageStatus,
    #[serde(rename = "SubmitStatus", default)]
    pub submit: StageStatus,
    #[serde(rename = "SentStatus", default)]
    pub sent: StageStatus,
    #[serde(rename = "DeliveryStatus", default)]
    pub delivery: StageStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
/// Result of a handset scrub lookup for an MSISDN.
pub struct ScrubResult {
    #[serde(rename = "MSISDN", default)]
    pub msisdn: String,
    #[serde(rename = "Network", default)]
    pub network: String,
    #[serde(rename = "Make", default)]
    pub make: String,
    #[serde(rename = "Model", default)]
    pub model: String,
    #[serde(rename = "ScreenWidth", default)]
    pub screen_width: u32,
    #[serde(rename = "ScreenHeight", default)]
    pub screen_height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
/// Payload POSTed by the API when an SMS reply arrives.
///
/// The caller must answer with HTTP 200 or the API redelivers the message.
pub struct IncomingSms {
    #[serde(rename = "MessageId", default)]
    pub message_id: String,
    #[serde(rename = "SourceMSISDN", default)]
    pub source_msisdn: String,
    #[serde(rename = "DestinationMSISDN", default)]
    pub destination_msisdn: String,
    #[serde(rename = "Message", default)]
    pub message: String,
    #[serde(rename = "ExtraDigits", default)]
    pub extra_digits: String,
    #[serde(rename = "RetryCount", default)]
    pub retry_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_status_codes_round_trip() {
        for status in [
            ApiStatus::Ok,
            ApiStatus::Error,
            ApiStatus::AuthFailed,
            ApiStatus::InvalidMethod,
            ApiStatus::ApiError,
            ApiStatus::RateLimited,
        ] {
            assert_eq!(ApiStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(ApiStatus::from_code(99), None);
    }

    #[test]
    fn results_tolerate_missing_fields() {
        let result: NewMessageResult = serde_json::from_str("{}").unwrap();
        assert_eq!(result.message_id, "");

        let status: MessageStatus = serde_json::from_str(
            r#"{"MessageID":"abc","BuildStatus":{"StatusCode":2,"StatusDescription":"Built"}}"#,
        )
        .unwrap();
        assert_eq!(status.message_id, "abc");
        assert_eq!(status.build.status_code, 2);
        assert_eq!(status.build.description, "Built");
        assert_eq!(status.delivery, StageStatus::default());
    }

    #[test]
    fn incoming_sms_decodes_postback_body() {
        let incoming: IncomingSms = serde_json::from_str(
            r#"{
              "MessageId": "1-90aaf0b4",
              "SourceMSISDN": "27700000001",
              "DestinationMSISDN": "27700000002",
              "Message": "STOP",
              "ExtraDigits": "00123",
              "RetryCount": 2
            }"#,
        )
        .unwrap();
        assert_eq!(incoming.message_id, "1-90aaf0b4");
        assert_eq!(incoming.source_msisdn, "27700000001");
        assert_eq!(incoming.retry_count, 2);
    }

    #[test]
    fn scrub_result_decodes_handset_fields() {
        let scrub: ScrubResult = serde_json::from_str(
            r#"{"MSISDN":"27700000000","Make":"Nokia","Model":"3310","ScreenWidth":84,"ScreenHeight":48}"#,
        )
        .unwrap();
        assert_eq!(scrub.make, "Nokia");
        assert_eq!(scrub.screen_width, 84);
        assert_eq!(scrub.network, "");
    }
}
