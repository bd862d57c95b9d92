use serde::Serialize;

use crate::domain::{
    EmailAttachment, EmailMessage, ExtraDigits, MessagePayload, MmsContent, MmsSlide, MmsMessage,
    Msisdn, SmsMessage, Subject,
};

#[derive(Serialize)]
struct SmsBody<'a> {
    #[serde(rename = "MSISDN")]
    msisdn: Vec<&'a str>,
    #[serde(rename = "Network")]
    network: &'a str,
    #[serde(rename = "text")]
    text: &'a str,
    #[serde(rename = "extra_digits")]
    extra_digits: &'a str,
}

impl<'a> From<&'a SmsMessage> for SmsBody<'a> {
    fn from(data: &'a SmsMessage) -> Self {
        Self {
            msisdn: data.recipients.iter().map(Msisdn::as_str).collect(),
            network: data.network.as_str(),
            text: data.text.as_str(),
            extra_digits: data
                .extra_digits
                .as_ref()
                .map(ExtraDigits::as_str)
                .unwrap_or(""),
        }
    }
}

#[derive(Serialize)]
struct MmsBody<'a> {
    #[serde(rename = "MSISDN")]
    msisdn: Vec<&'a str>,
    #[serde(rename = "Network")]
    network: &'a str,
    #[serde(rename = "slides")]
    slides: Vec<SlideBody<'a>>,
    #[serde(rename = "subject")]
    subject: &'a str,
}

impl<'a> From<&'a MmsMessage> for MmsBody<'a> {
    fn from(data: &'a MmsMessage) -> Self {
        Self {
            msisdn: data.recipients.iter().map(Msisdn::as_str).collect(),
            network: data.network.as_str(),
            slides: data.slides.iter().map(SlideBody::from).collect(),
            subject: data.subject.as_ref().map(Subject::as_str).unwrap_or(""),
        }
    }
}

#[derive(Serialize)]
struct SlideBody<'a> {
    // The API takes slide durations as strings of seconds.
    #[serde(rename = "duration")]
    duration: String,
    #[serde(rename = "content")]
    content: Vec<ContentBody<'a>>,
}

impl<'a> From<&'a MmsSlide> for SlideBody<'a> {
    fn from(slide: &'a MmsSlide) -> Self {
        Self {
            duration: slide.duration_seconds.to_string(),
            content: slide.content.iter().map(ContentBody::from).collect(),
        }
    }
}

#[derive(Serialize)]
struct ContentBody<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(rename = "mime")]
    mime: &'a str,
    #[serde(rename = "data")]
    data: &'a str,
    #[serde(rename = "name")]
    name: &'a str,
}

impl<'a> From<&'a MmsContent> for ContentBody<'a> {
    fn from(content: &'a MmsContent) -> Self {
        Self {
            kind: content.kind.as_str(),
            mime: &content.mime,
            data: &content.data,
            name: &content.name,
        }
    }
}

#[derive(Serialize)]
struct EmailBody<'a> {
    #[serde(rename = "address")]
    addresses: Vec<&'a str>,
    #[serde(rename = "Network")]
    network: &'a str,
    #[serde(rename = "subject")]
    subject: &'a str,
    #[serde(rename = "html")]
    html: &'a str,
    #[serde(rename = "text")]
    text: &'a str,
    #[serde(rename = "Attachments")]
    attachments: Vec<AttachmentBody<'a>>,
}

impl<'a> From<&'a EmailMessage> for EmailBody<'a> {
    fn from(data: &'a EmailMessage) -> Self {
        Self {
            addresses: data.addresses.iter().map(|a| a.as_str()).collect(),
            network: data.network.as_str(),
            subject: data.subject.as_ref().map(Subject::as_str).unwrap_or(""),
            html: data.html.as_deref().unwrap_or(""),
            text: data.text.as_deref().unwrap_or(""),
            attachments: data.attachments.iter().map(AttachmentBody::from).collect(),
        }
    }
}

#[derive(Serialize)]
struct AttachmentBody<'a> {
    #[serde(rename = "Filename")]
    filename: &'a str,
    #[serde(rename = "Data")]
    data: &'a str,
}

impl<'a> From<&'a EmailAttachment> for AttachmentBody<'a> {
    fn from(attachment: &'a EmailAttachment) -> Self {
        Self {
            filename: &attachment.filename,
            data: &attachment.data,
        }
    }
}

/// Encode a payload to its wire JSON. Typed payloads become objects; a raw
/// payload becomes a JSON string.
pub(crate) fn payload_json(payload: &MessagePayload) -> Result<String, serde_json::Error> {
    match payload {
        MessagePayload::Mms(data) => serde_json::to_string(&MmsBody::from(data)),
        MessagePayload::Sms(data) => serde_json::to_string(&SmsBody::from(data)),
        MessagePayload::Email(data) => serde_json::to_string(&EmailBody::from(data)),
        MessagePayload::Raw(text) => serde_json::to_string(text),
    }
}
