use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Bearer token presented to the API in the `Authorization` header.
///
/// Invariant: non-empty after trimming.
pub struct AccessToken(String);

impl AccessToken {
    pub const FIELD: &'static str = "access_token";

    /// Create a validated [`AccessToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Operator (MVNO) identifier scoping a request (`MVNOID`).
///
/// Invariant: nonzero.
pub struct MvnoId(u32);

impl MvnoId {
    /// Wire field name used by the API (`MVNOID`).
    pub const FIELD: &'static str = "MVNOID";

    /// Create a validated [`MvnoId`].
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::Zero { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Get the underlying operator id.
    pub fn get(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Template selector for build requests (`BuildTemplate`).
///
/// Invariant: nonzero.
pub struct TemplateId(u32);

impl TemplateId {
    /// Wire field name used by the API (`BuildTemplate`).
    pub const FIELD: &'static str = "BuildTemplate";

    /// Create a validated [`TemplateId`].
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::Zero { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Get the underlying template id.
    pub fn get(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Approval batch identifier assigned by the API (`ApprovalBatch`/`BatchID`).
pub struct BatchId(u32);

impl BatchId {
    /// Wire field name used when attaching a message to a batch (`ApprovalBatch`).
    pub const FIELD: &'static str = "ApprovalBatch";

    /// Wrap a batch id as returned by the API.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the underlying batch id.
    pub fn value(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Message identifier assigned by the API (`MessageID`).
///
/// Invariant: non-empty after trimming.
pub struct MessageId(String);

impl MessageId {
    /// Wire field name used by the API (`MessageID`).
    pub const FIELD: &'static str = "MessageID";

    /// Create a validated [`MessageId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated message id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Destination network selector (`Network`).
///
/// `*` asks the API to resolve the network from its portability list.
/// Invariant: non-empty after trimming.
pub struct Network(String);

impl Network {
    /// Wire field name used by the API (`Network`).
    pub const FIELD: &'static str = "Network";

    /// Create a validated [`Network`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated network name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Recipient phone number in international digits form (`MSISDN`).
///
/// [`Msisdn::new`] accepts the value as given (trimmed, non-empty) and does not
/// normalize. Use [`Msisdn::parse`] to validate and normalize arbitrary input
/// into international digits without the leading `+`.
pub struct Msisdn(String);

impl Msisdn {
    /// Wire field name used by the API (`MSISDN`).
    pub const FIELD: &'static str = "MSISDN";

    /// Create a validated (non-empty) MSISDN from an already-formatted value.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Parse and normalize a phone number into MSISDN form.
    ///
    /// `default_region` is used when the input does not carry an explicit
    /// country prefix. The result is the E.164 representation with the
    /// leading `+` stripped, which is the form the API routes on.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self(e164.trim_start_matches('+').to_owned()))
    }

    /// The MSISDN as sent to the API.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Email recipient address (`address`).
///
/// Invariant: non-empty after trimming and contains an `@`.
pub struct EmailAddress(String);

impl EmailAddress {
    /// Wire field name used by the API (`address`).
    pub const FIELD: &'static str = "address";

    /// Create a validated [`EmailAddress`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !trimmed.contains('@') {
            return Err(ValidationError::InvalidEmailAddress {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated address.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message subject for MMS and email messages (`subject`).
///
/// Invariant: non-empty after trimming. The original value is preserved.
pub struct Subject(String);

impl Subject {
    /// Wire field name used by the API (`subject`).
    pub const FIELD: &'static str = "subject";

    /// Create a validated [`Subject`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the subject as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`text`).
///
/// Invariant: non-empty after trimming. The original value (including
/// whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Wire field name used by the API (`text`).
    pub const FIELD: &'static str = "text";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Extra digits appended to the sender address where the network allows it
/// (`extra_digits`).
///
/// Invariant: non-empty after trimming.
pub struct ExtraDigits(String);

impl ExtraDigits {
    /// Wire field name used by the API (`extra_digits`).
    pub const FIELD: &'static str = "extra_digits";

    /// Create validated extra digits.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Campaign tag for tracking purposes (`Campaign`).
///
/// Invariant: non-empty after trimming.
pub struct Campaign(String);

impl Campaign {
    /// Wire field name used by the API (`Campaign`).
    pub const FIELD: &'static str = "Campaign";

    /// Create a validated [`Campaign`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated campaign tag.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// A URL the API POSTs replies or status updates to.
///
/// Invariant: parses as an absolute URL.
pub struct PostbackUrl(url::Url);

impl PostbackUrl {
    pub const FIELD: &'static str = "postback_url";

    /// Create a validated [`PostbackUrl`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let parsed = url::Url::parse(trimmed).map_err(|_| ValidationError::InvalidUrl {
            field: Self::FIELD,
            input: trimmed.to_owned(),
        })?;
        Ok(Self(parsed))
    }

    /// The URL as sent to the API.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Forced build size override (`ForcedSize`).
///
/// The API treats the value `Both` specially: a build forced to both sizes
/// can only be archived, not submitted.
pub struct ForcedSize(String);

impl ForcedSize {
    /// Wire field name used by the API (`ForcedSize`).
    pub const FIELD: &'static str = "ForcedSize";

    /// The value that forces both build sizes.
    pub const BOTH: &'static str = "Both";

    /// Create a validated [`ForcedSize`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Shorthand for the `Both` override.
    pub fn both() -> Self {
        Self(Self::BOTH.to_owned())
    }

    /// Whether this override forces both sizes.
    pub fn is_both(&self) -> bool {
        self.0 == Self::BOTH
    }

    /// Borrow the validated value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// A postback stage the caller can subscribe to.
pub enum StatusEvent {
    Build,
    Archive,
    Submit,
    Sent,
    Delivery,
}

impl StatusEvent {
    /// Wire token for this event.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Build => "build",
            Self::Archive => "archive",
            Self::Submit => "submit",
            Self::Sent => "sent",
            Self::Delivery => "delivery",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Ordered status-event subscription list (`PostbackStatusTypes`).
///
/// Invariant: at least one event.
pub struct StatusEvents(Vec<StatusEvent>);

impl StatusEvents {
    /// Wire field name used by the API (`PostbackStatusTypes`).
    pub const FIELD: &'static str = "PostbackStatusTypes";

    /// Create a validated subscription list.
    pub fn new(events: Vec<StatusEvent>) -> Result<Self, ValidationError> {
        if events.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(events))
    }

    /// The subscribed events in order.
    pub fn events(&self) -> &[StatusEvent] {
        &self.0
    }

    /// Comma-delimited wire form, e.g. `build,submit,delivery`.
    pub fn encode(&self) -> String {
        self.0
            .iter()
            .map(|event| event.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_newtypes_trim_or_validate() {
        let token = AccessToken::new("  token ").unwrap();
        assert_eq!(token.as_str(), "token");
        assert!(AccessToken::new("   ").is_err());

        let network = Network::new(" local_smpp ").unwrap();
        assert_eq!(network.as_str(), "local_smpp");
        assert!(Network::new("").is_err());

        let subject = Subject::new(" Hello ").unwrap();
        assert_eq!(subject.as_str(), " Hello ");
        assert!(Subject::new("  ").is_err());

        let text = MessageText::new(" hi ").unwrap();
        assert_eq!(text.as_str(), " hi ");
        assert!(MessageText::new("  ").is_err());

        let digits = ExtraDigits::new(" 00123 ").unwrap();
        assert_eq!(digits.as_str(), "00123");
        assert!(ExtraDigits::new("").is_err());

        let campaign = Campaign::new(" Spring ").unwrap();
        assert_eq!(campaign.as_str(), "Spring");

        let message_id = MessageId::new(" 1-90aaf0b4 ").unwrap();
        assert_eq!(message_id.as_str(), "1-90aaf0b4");
        assert!(MessageId::new("  ").is_err());
    }

    #[test]
    fn numeric_ids_reject_zero() {
        assert!(matches!(
            MvnoId::new(0),
            Err(ValidationError::Zero {
                field: MvnoId::FIELD
            })
        ));
        assert_eq!(MvnoId::new(4).unwrap().get(), 4);

        assert!(matches!(
            TemplateId::new(0),
            Err(ValidationError::Zero {
                field: TemplateId::FIELD
            })
        ));
        assert_eq!(TemplateId::new(15).unwrap().get(), 15);

        // Batch ids are assigned by the API and carry no invariant.
        assert_eq!(BatchId::new(0).value(), 0);
    }

    #[test]
    fn msisdn_new_trims_without_normalizing() {
        let msisdn = Msisdn::new(" 27700000000 ").unwrap();
        assert_eq!(msisdn.as_str(), "27700000000");
        assert!(Msisdn::new("").is_err());
    }

    #[test]
    fn msisdn_parse_normalizes_to_international_digits() {
        let msisdn = Msisdn::parse(None, "+27 71 123 4567").unwrap();
        assert_eq!(msisdn.as_str(), "27711234567");

        let with_region = Msisdn::parse(Some(country::Id::ZA), "071 123 4567").unwrap();
        assert_eq!(with_region.as_str(), "27711234567");

        assert!(Msisdn::parse(None, "not-a-number").is_err());
    }

    #[test]
    fn email_address_requires_at_sign() {
        let address = EmailAddress::new(" none@example.com ").unwrap();
        assert_eq!(address.as_str(), "none@example.com");
        assert!(matches!(
            EmailAddress::new("example.com"),
            Err(ValidationError::InvalidEmailAddress { .. })
        ));
        assert!(EmailAddress::new("  ").is_err());
    }

    #[test]
    fn postback_url_must_parse() {
        let url = PostbackUrl::new("http://127.0.0.1:9001/status").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9001/status");
        assert!(matches!(
            PostbackUrl::new("not a url"),
            Err(ValidationError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn forced_size_knows_both() {
        assert!(ForcedSize::both().is_both());
        assert!(!ForcedSize::new("Small").unwrap().is_both());
        assert!(ForcedSize::new("  ").is_err());
    }

    #[test]
    fn status_events_encode_comma_delimited() {
        let events = StatusEvents::new(vec![
            StatusEvent::Build,
            StatusEvent::Submit,
            StatusEvent::Delivery,
        ])
        .unwrap();
        assert_eq!(events.encode(), "build,submit,delivery");
        assert!(StatusEvents::new(Vec::new()).is_err());
    }
}
