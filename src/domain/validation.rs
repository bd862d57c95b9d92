use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    Zero { field: &'static str },
    Missing { field: &'static str },
    RecipientCount { field: &'static str, actual: usize },
    InvalidPhoneNumber { input: String },
    InvalidEmailAddress { input: String },
    InvalidUrl { field: &'static str, input: String },
    PayloadMismatch { action: &'static str, expected: &'static str },
    MissingEmailBody,
    MissingAfterBuildData,
    ForcedSizeRequiresArchive,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::Zero { field } => write!(f, "{field} must be set and not zero"),
            Self::Missing { field } => write!(f, "{field} must be set"),
            Self::RecipientCount { field, actual } => {
                write!(f, "exactly one recipient must be set in {field} (got {actual})")
            }
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::InvalidEmailAddress { input } => write!(f, "invalid email address: {input}"),
            Self::InvalidUrl { field, input } => {
                write!(f, "{field} is not a valid URL: {input}")
            }
            Self::PayloadMismatch { action, expected } => {
                write!(f, "{action} requires {expected} payload data")
            }
            Self::MissingEmailBody => {
                write!(f, "email messages must have either html or text set, or both")
            }
            Self::MissingAfterBuildData => {
                write!(
                    f,
                    "after-build data is required unless the after-build action is archive"
                )
            }
            Self::ForcedSizeRequiresArchive => {
                write!(f, "a forced size of Both requires an archive after-build action")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "Network" };
        assert_eq!(err.to_string(), "Network must not be empty");

        let err = ValidationError::Zero { field: "MVNOID" };
        assert_eq!(err.to_string(), "MVNOID must be set and not zero");

        let err = ValidationError::RecipientCount {
            field: "MSISDN",
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "exactly one recipient must be set in MSISDN (got 3)"
        );

        let err = ValidationError::PayloadMismatch {
            action: "SubmitSMS",
            expected: "SMS",
        };
        assert_eq!(err.to_string(), "SubmitSMS requires SMS payload data");

        let err = ValidationError::InvalidUrl {
            field: "postback_url",
            input: "not a url".to_owned(),
        };
        assert_eq!(err.to_string(), "postback_url is not a valid URL: not a url");
    }
}
