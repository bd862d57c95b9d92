use crate::domain::validation::ValidationError;
use crate::domain::value::{
    BatchId, Campaign, EmailAddress, ExtraDigits, ForcedSize, MessageId, MessageText, Msisdn,
    MvnoId, Network, PostbackUrl, StatusEvents, Subject, TemplateId,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// The action the API takes for a message request.
///
/// Wire form is the numeric code ([`MessageAction::code`]).
pub enum MessageAction {
    SubmitMms,
    SubmitSms,
    SubmitEmail,
    Archive,
    ArchiveMms,
    ArchiveSms,
    ArchiveEmail,
}

impl MessageAction {
    /// Numeric code as sent to the API.
    pub fn code(self) -> u32 {
        match self {
            Self::SubmitMms => 1,
            Self::SubmitSms => 2,
            Self::SubmitEmail => 3,
            Self::Archive => 4,
            Self::ArchiveMms => 5,
            Self::ArchiveSms => 6,
            Self::ArchiveEmail => 7,
        }
    }

    /// Convert a raw action code into a known variant.
    pub fn from_code(code: u32) -> Option<Self> {
        Some(match code {
            1 => Self::SubmitMms,
            2 => Self::SubmitSms,
            3 => Self::SubmitEmail,
            4 => Self::Archive,
            5 => Self::ArchiveMms,
            6 => Self::ArchiveSms,
            7 => Self::ArchiveEmail,
            _ => return None,
        })
    }

    /// Whether this action archives instead of submitting.
    pub fn is_archive(self) -> bool {
        matches!(
            self,
            Self::Archive | Self::ArchiveMms | Self::ArchiveSms | Self::ArchiveEmail
        )
    }

    fn name(self) -> &'static str {
        match self {
            Self::SubmitMms => "SubmitMMS",
            Self::SubmitSms => "SubmitSMS",
            Self::SubmitEmail => "SubmitEmail",
            Self::Archive => "Archive",
            Self::ArchiveMms => "ArchiveMMS",
            Self::ArchiveSms => "ArchiveSMS",
            Self::ArchiveEmail => "ArchiveEmail",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Content block type within an MMS slide.
pub enum MmsContentKind {
    Text,
    Image,
    Video,
    Audio,
}

impl MmsContentKind {
    /// Wire token for this content type (`type`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One content block of an MMS slide.
pub struct MmsContent {
    pub kind: MmsContentKind,
    /// Mime type of the block, e.g. `text/plain`.
    pub mime: String,
    /// Block payload, base64 encoded.
    pub data: String,
    /// Name used for the block inside the slide.
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One slide of an MMS message.
pub struct MmsSlide {
    /// How long the slide is shown, in seconds.
    pub duration_seconds: u32,
    /// Ordered content blocks of the slide.
    pub content: Vec<MmsContent>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Payload for submitting an MMS.
pub struct MmsMessage {
    pub network: Network,
    pub recipients: Vec<Msisdn>,
    pub subject: Option<Subject>,
    pub slides: Vec<MmsSlide>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Payload for submitting an SMS.
pub struct SmsMessage {
    pub network: Network,
    pub recipients: Vec<Msisdn>,
    pub text: MessageText,
    pub extra_digits: Option<ExtraDigits>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// An email attachment.
pub struct EmailAttachment {
    pub filename: String,
    /// Attachment payload, base64 encoded.
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Payload for submitting an email.
pub struct EmailMessage {
    pub network: Network,
    pub addresses: Vec<EmailAddress>,
    pub subject: Option<Subject>,
    pub html: Option<String>,
    pub text: Option<String>,
    pub attachments: Vec<EmailAttachment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// The polymorphic message payload, keyed by [`MessageAction`].
///
/// `Raw` carries an opaque pre-rendered payload and is only accepted for
/// [`MessageAction::Archive`].
pub enum MessagePayload {
    Mms(MmsMessage),
    Sms(SmsMessage),
    Email(EmailMessage),
    Raw(String),
}

#[derive(Debug, Clone, Default)]
/// Optional settings shared by all message submissions.
pub struct MessageOptions {
    pub campaign: Option<Campaign>,
    pub approval_batch: Option<BatchId>,
    /// Where SMS replies are POSTed. Applies to SMS messages only.
    pub postback_reply_url: Option<PostbackUrl>,
    pub postback_status_url: Option<PostbackUrl>,
    pub status_events: Option<StatusEvents>,
}

#[derive(Debug, Clone)]
/// A validated request for `message/send`.
pub struct NewMessageRequest {
    action: MessageAction,
    mvno_id: MvnoId,
    payload: MessagePayload,
    options: MessageOptions,
}

impl NewMessageRequest {
    /// Validate and build a message request.
    ///
    /// Rules, in evaluation order (the first violated rule is reported):
    /// - the payload variant must match `action`;
    /// - `SubmitMMS`: at least one slide, a subject, exactly one recipient;
    /// - `SubmitSMS`: exactly one recipient;
    /// - `SubmitEmail`: exactly one address, a subject, html or text (or both).
    ///
    /// Archive actions skip the structural rules: the message content was
    /// already built when it was first submitted.
    pub fn new(
        action: MessageAction,
        mvno_id: MvnoId,
        payload: MessagePayload,
        options: MessageOptions,
    ) -> Result<Self, ValidationError> {
        payload_matches(action, &payload)?;
        if !action.is_archive() {
            validate_payload(&payload)?;
        }
        Ok(Self {
            action,
            mvno_id,
            payload,
            options,
        })
    }

    pub fn action(&self) -> MessageAction {
        self.action
    }

    pub fn mvno_id(&self) -> MvnoId {
        self.mvno_id
    }

    pub fn payload(&self) -> &MessagePayload {
        &self.payload
    }

    pub fn options(&self) -> &MessageOptions {
        &self.options
    }
}

#[derive(Debug, Clone)]
/// A request for `message/resend`, resubmitting an already-created message.
pub struct ResendMessageRequest {
    message_id: MessageId,
}

impl ResendMessageRequest {
    pub fn new(message_id: MessageId) -> Self {
        Self { message_id }
    }

    pub fn message_id(&self) -> &MessageId {
        &self.message_id
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Template input for a build request.
///
/// `Text` travels on the wire unchanged; `Structured` is JSON-encoded once
/// and embedded as a string inside the envelope.
pub enum BuildData {
    Text(String),
    Structured(serde_json::Value),
}

#[derive(Debug, Clone, Default)]
/// Optional settings for build requests.
pub struct BuildOptions {
    pub campaign: Option<Campaign>,
    pub approval_batch: Option<BatchId>,
    pub forced_size: Option<ForcedSize>,
    pub postback_status_url: Option<PostbackUrl>,
    pub status_events: Option<StatusEvents>,
}

#[derive(Debug, Clone)]
/// A validated request for `generate/video`: render a template, then run the
/// after-build action on the result.
pub struct BuildRequest {
    mvno_id: MvnoId,
    data: BuildData,
    template: TemplateId,
    after_build_action: MessageAction,
    after_build_data: Option<MessagePayload>,
    options: BuildOptions,
}

impl BuildRequest {
    /// Validate and build a build request.
    ///
    /// After-build data is required unless the after-build action is
    /// [`MessageAction::Archive`], and its variant must match the action.
    /// Only the variant is checked: the build step produces the slides and
    /// subject, so after-build payloads carry routing fields only.
    pub fn new(
        mvno_id: MvnoId,
        data: BuildData,
        template: TemplateId,
        after_build_action: MessageAction,
        after_build_data: Option<MessagePayload>,
        options: BuildOptions,
    ) -> Result<Self, ValidationError> {
        match &after_build_data {
            None if after_build_action == MessageAction::Archive => {}
            None => return Err(ValidationError::MissingAfterBuildData),
            Some(payload) => payload_matches(after_build_action, payload)?,
        }
        if options.forced_size.as_ref().is_some_and(ForcedSize::is_both)
            && !after_build_action.is_archive()
        {
            return Err(ValidationError::ForcedSizeRequiresArchive);
        }
        Ok(Self {
            mvno_id,
            data,
            template,
            after_build_action,
            after_build_data,
            options,
        })
    }

    pub fn mvno_id(&self) -> MvnoId {
        self.mvno_id
    }

    pub fn data(&self) -> &BuildData {
        &self.data
    }

    pub fn template(&self) -> TemplateId {
        self.template
    }

    pub fn after_build_action(&self) -> MessageAction {
        self.after_build_action
    }

    pub fn after_build_data(&self) -> Option<&MessagePayload> {
        self.after_build_data.as_ref()
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Lifecycle state of an approval batch.
pub enum ApprovalBatchState {
    WaitingData,
    DataReceived,
    ApprovalSent,
    Approved,
    Declined,
    Sent,
}

impl ApprovalBatchState {
    /// Numeric code as sent to the API.
    pub fn code(self) -> u32 {
        match self {
            Self::WaitingData => 1,
            Self::DataReceived => 2,
            Self::ApprovalSent => 3,
            Self::Approved => 4,
            Self::Declined => 5,
            Self::Sent => 6,
        }
    }

    /// Convert a raw state code into a known variant.
    pub fn from_code(code: u32) -> Option<Self> {
        Some(match code {
            1 => Self::WaitingData,
            2 => Self::DataReceived,
            3 => Self::ApprovalSent,
            4 => Self::Approved,
            5 => Self::Declined,
            6 => Self::Sent,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A person who signs off messages in an approval batch.
pub struct ApprovalPerson {
    pub name: String,
    pub email: String,
    pub msisdn: String,
    /// Pre-seeded identity hash, when the person is already known to the API.
    pub hash: Option<String>,
}

#[derive(Debug, Clone)]
/// A request for `approval/create`.
pub struct ApprovalRequest {
    pub action: MessageAction,
    pub mvno_id: MvnoId,
    pub name: String,
    pub max_approvals: u32,
    pub internal_people: Vec<ApprovalPerson>,
    pub external_people: Vec<ApprovalPerson>,
    pub link: Option<PostbackUrl>,
    /// Chains this batch to an earlier one.
    pub linked_batch: Option<BatchId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A CSV report attached to an approval update.
pub struct CsvReport {
    pub filename: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone)]
/// A request for `approval/update`.
pub struct ApprovalUpdateRequest {
    pub batch_id: BatchId,
    pub state: ApprovalBatchState,
    pub reports: Vec<CsvReport>,
}

fn payload_matches(action: MessageAction, payload: &MessagePayload) -> Result<(), ValidationError> {
    let matches = match action {
        MessageAction::SubmitMms | MessageAction::ArchiveMms => {
            matches!(payload, MessagePayload::Mms(_))
        }
        MessageAction::SubmitSms | MessageAction::ArchiveSms => {
            matches!(payload, MessagePayload::Sms(_))
        }
        MessageAction::SubmitEmail | MessageAction::ArchiveEmail => {
            matches!(payload, MessagePayload::Email(_))
        }
        MessageAction::Archive => true,
    };
    if matches {
        Ok(())
    } else {
        Err(ValidationError::PayloadMismatch {
            action: action.name(),
            expected: expected_kind(action),
        })
    }
}

fn expected_kind(action: MessageAction) -> &'static str {
    match action {
        MessageAction::SubmitMms | MessageAction::ArchiveMms => "MMS",
        MessageAction::SubmitSms | MessageAction::ArchiveSms => "SMS",
        MessageAction::SubmitEmail | MessageAction::ArchiveEmail => "email",
        MessageAction::Archive => "any",
    }
}

fn validate_payload(payload: &MessagePayload) -> Result<(), ValidationError> {
    match payload {
        MessagePayload::Mms(data) => {
            if data.slides.is_empty() {
                return Err(ValidationError::Empty { field: "slides" });
            }
            if data.subject.is_none() {
                return Err(ValidationError::Missing {
                    field: Subject::FIELD,
                });
            }
            require_one_recipient(data.recipients.len(), Msisdn::FIELD)
        }
        MessagePayload::Sms(data) => require_one_recipient(data.recipients.len(), Msisdn::FIELD),
        MessagePayload::Email(data) => {
            require_one_recipient(data.addresses.len(), EmailAddress::FIELD)?;
            if data.subject.is_none() {
                return Err(ValidationError::Missing {
                    field: Subject::FIELD,
                });
            }
            let has_html = data.html.as_deref().is_some_and(|html| !html.trim().is_empty());
            let has_text = data.text.as_deref().is_some_and(|text| !text.trim().is_empty());
            if !has_html && !has_text {
                return Err(ValidationError::MissingEmailBody);
            }
            Ok(())
        }
        // A raw payload never reaches here: payload_matches rejects it for
        // every submit action.
        MessagePayload::Raw(_) => Ok(()),
    }
}

fn require_one_recipient(actual: usize, field: &'static str) -> Result<(), ValidationError> {
    if actual == 1 {
        Ok(())
    } else {
        Err(ValidationError::RecipientCount { field, actual })
    }
}
