//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    ApprovalBatchState, ApprovalPerson, ApprovalRequest, ApprovalUpdateRequest, BuildData,
    BuildOptions, BuildRequest, CsvReport, EmailAttachment, EmailMessage, MessageAction,
    MessageOptions, MessagePayload, MmsContent, MmsContentKind, MmsMessage, MmsSlide,
    NewMessageRequest, ResendMessageRequest, SmsMessage,
};
pub use response::{
    ApiResult, ApiStatus, ApprovalResult, IncomingSms, MessageStatus, NewMessageResult,
    ScrubResult, StageStatus,
};
pub use validation::ValidationError;
pub use value::{
    AccessToken, BatchId, Campaign, EmailAddress, ExtraDigits, ForcedSize, MessageId, MessageText,
    Msisdn, MvnoId, Network, PostbackUrl, StatusEvent, StatusEvents, Subject, TemplateId,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn sms_payload(recipients: Vec<Msisdn>) -> MessagePayload {
        MessagePayload::Sms(SmsMessage {
            network: Network::new("local_smpp").unwrap(),
            recipients,
            text: MessageText::new("hi").unwrap(),
            extra_digits: None,
        })
    }

    fn one_recipient() -> Vec<Msisdn> {
        vec![Msisdn::new("27700000000").unwrap()]
    }

    fn mms_payload() -> MmsMessage {
        MmsMessage {
            network: Network::new("*").unwrap(),
            recipients: one_recipient(),
            subject: Some(Subject::new("MMS Subject").unwrap()),
            slides: vec![MmsSlide {
                duration_seconds: 10,
                content: vec![MmsContent {
                    kind: MmsContentKind::Text,
                    mime: "text/plain".to_owned(),
                    data: "TXkgUGxhaW4gVGV4dCBNTVM=".to_owned(),
                    name: "TextDocument1.txt".to_owned(),
                }],
            }],
        }
    }

    fn email_payload() -> EmailMessage {
        EmailMessage {
            network: Network::new("local_email").unwrap(),
            addresses: vec![EmailAddress::new("none@example.com").unwrap()],
            subject: Some(Subject::new("Email Subject").unwrap()),
            html: Some("<h1>This is my email</h1>".to_owned()),
            text: None,
            attachments: Vec::new(),
        }
    }

    #[test]
    fn sms_request_requires_exactly_one_recipient() {
        let no_recipients = NewMessageRequest::new(
            MessageAction::SubmitSms,
            MvnoId::new(4).unwrap(),
            sms_payload(Vec::new()),
            MessageOptions::default(),
        );
        assert!(matches!(
            no_recipients,
            Err(ValidationError::RecipientCount {
                field: Msisdn::FIELD,
                actual: 0
            })
        ));

        let two = vec![
            Msisdn::new("27700000000").unwrap(),
            Msisdn::new("27700000001").unwrap(),
        ];
        let two_recipients = NewMessageRequest::new(
            MessageAction::SubmitSms,
            MvnoId::new(4).unwrap(),
            sms_payload(two),
            MessageOptions::default(),
        );
        assert!(matches!(
            two_recipients,
            Err(ValidationError::RecipientCount { actual: 2, .. })
        ));

        let ok = NewMessageRequest::new(
            MessageAction::SubmitSms,
            MvnoId::new(4).unwrap(),
            sms_payload(one_recipient()),
            MessageOptions::default(),
        );
        assert!(ok.is_ok());
    }

    #[test]
    fn mms_request_requires_slides_subject_and_one_recipient() {
        let mut no_slides = mms_payload();
        no_slides.slides.clear();
        let err = NewMessageRequest::new(
            MessageAction::SubmitMms,
            MvnoId::new(2).unwrap(),
            MessagePayload::Mms(no_slides),
            MessageOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "slides" });

        let mut no_subject = mms_payload();
        no_subject.subject = None;
        let err = NewMessageRequest::new(
            MessageAction::SubmitMms,
            MvnoId::new(2).unwrap(),
            MessagePayload::Mms(no_subject),
            MessageOptions::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::Missing {
                field: Subject::FIELD
            }
        );

        let mut two_recipients = mms_payload();
        two_recipients
            .recipients
            .push(Msisdn::new("27700000001").unwrap());
        let err = NewMessageRequest::new(
            MessageAction::SubmitMms,
            MvnoId::new(2).unwrap(),
            MessagePayload::Mms(two_recipients),
            MessageOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::RecipientCount { actual: 2, .. }
        ));

        let ok = NewMessageRequest::new(
            MessageAction::SubmitMms,
            MvnoId::new(2).unwrap(),
            MessagePayload::Mms(mms_payload()),
            MessageOptions::default(),
        );
        assert!(ok.is_ok());
    }

    #[test]
    fn email_request_requires_subject_and_a_body() {
        let mut no_body = email_payload();
        no_body.html = None;
        no_body.text = Some("   ".to_owned());
        let err = NewMessageRequest::new(
            MessageAction::SubmitEmail,
            MvnoId::new(2).unwrap(),
            MessagePayload::Email(no_body),
            MessageOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::MissingEmailBody);

        let mut text_only = email_payload();
        text_only.html = None;
        text_only.text = Some("plain text part".to_owned());
        assert!(
            NewMessageRequest::new(
                MessageAction::SubmitEmail,
                MvnoId::new(2).unwrap(),
                MessagePayload::Email(text_only),
                MessageOptions::default(),
            )
            .is_ok()
        );

        let mut no_subject = email_payload();
        no_subject.subject = None;
        let err = NewMessageRequest::new(
            MessageAction::SubmitEmail,
            MvnoId::new(2).unwrap(),
            MessagePayload::Email(no_subject),
            MessageOptions::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::Missing {
                field: Subject::FIELD
            }
        );
    }

    #[test]
    fn payload_variant_must_match_action() {
        let err = NewMessageRequest::new(
            MessageAction::SubmitMms,
            MvnoId::new(4).unwrap(),
            sms_payload(one_recipient()),
            MessageOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::PayloadMismatch { .. }));

        // A raw payload is only accepted when archiving.
        let err = NewMessageRequest::new(
            MessageAction::SubmitSms,
            MvnoId::new(4).unwrap(),
            MessagePayload::Raw("prerendered".to_owned()),
            MessageOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::PayloadMismatch { .. }));

        assert!(
            NewMessageRequest::new(
                MessageAction::Archive,
                MvnoId::new(4).unwrap(),
                MessagePayload::Raw("prerendered".to_owned()),
                MessageOptions::default(),
            )
            .is_ok()
        );
    }

    #[test]
    fn archive_actions_skip_structural_rules() {
        let mut bare = mms_payload();
        bare.subject = None;
        bare.slides.clear();
        assert!(
            NewMessageRequest::new(
                MessageAction::ArchiveMms,
                MvnoId::new(2).unwrap(),
                MessagePayload::Mms(bare),
                MessageOptions::default(),
            )
            .is_ok()
        );
    }

    #[test]
    fn build_request_requires_after_build_data_unless_archiving() {
        let err = BuildRequest::new(
            MvnoId::new(2).unwrap(),
            BuildData::Text("{\"CustomerName\":\"John Doe\"}".to_owned()),
            TemplateId::new(15).unwrap(),
            MessageAction::SubmitMms,
            None,
            BuildOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::MissingAfterBuildData);

        assert!(
            BuildRequest::new(
                MvnoId::new(2).unwrap(),
                BuildData::Text("raw-string".to_owned()),
                TemplateId::new(15).unwrap(),
                MessageAction::Archive,
                None,
                BuildOptions::default(),
            )
            .is_ok()
        );
    }

    #[test]
    fn build_request_checks_after_build_payload_variant() {
        // Shape-only: an after-build MMS payload needs no slides or subject.
        let routing_only = MmsMessage {
            network: Network::new("*").unwrap(),
            recipients: one_recipient(),
            subject: None,
            slides: Vec::new(),
        };
        assert!(
            BuildRequest::new(
                MvnoId::new(2).unwrap(),
                BuildData::Text("{}".to_owned()),
                TemplateId::new(15).unwrap(),
                MessageAction::SubmitMms,
                Some(MessagePayload::Mms(routing_only)),
                BuildOptions::default(),
            )
            .is_ok()
        );

        let err = BuildRequest::new(
            MvnoId::new(2).unwrap(),
            BuildData::Text("{}".to_owned()),
            TemplateId::new(15).unwrap(),
            MessageAction::SubmitMms,
            Some(sms_payload(one_recipient())),
            BuildOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::PayloadMismatch { .. }));
    }

    #[test]
    fn forced_size_both_requires_archive_action() {
        let options = BuildOptions {
            forced_size: Some(ForcedSize::both()),
            ..Default::default()
        };
        let err = BuildRequest::new(
            MvnoId::new(2).unwrap(),
            BuildData::Text("{}".to_owned()),
            TemplateId::new(15).unwrap(),
            MessageAction::SubmitMms,
            Some(MessagePayload::Mms(mms_payload())),
            options.clone(),
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::ForcedSizeRequiresArchive);

        assert!(
            BuildRequest::new(
                MvnoId::new(2).unwrap(),
                BuildData::Text("{}".to_owned()),
                TemplateId::new(15).unwrap(),
                MessageAction::Archive,
                None,
                options,
            )
            .is_ok()
        );
    }

    #[test]
    fn action_codes_round_trip() {
        for action in [
            MessageAction::SubmitMms,
            MessageAction::SubmitSms,
            MessageAction::SubmitEmail,
            MessageAction::Archive,
            MessageAction::ArchiveMms,
            MessageAction::ArchiveSms,
            MessageAction::ArchiveEmail,
        ] {
            assert_eq!(MessageAction::from_code(action.code()), Some(action));
        }
        assert_eq!(MessageAction::from_code(0), None);
        assert_eq!(MessageAction::from_code(8), None);
    }

    #[test]
    fn approval_batch_state_codes_round_trip() {
        for state in [
            ApprovalBatchState::WaitingData,
            ApprovalBatchState::DataReceived,
            ApprovalBatchState::ApprovalSent,
            ApprovalBatchState::Approved,
            ApprovalBatchState::Declined,
            ApprovalBatchState::Sent,
        ] {
            assert_eq!(ApprovalBatchState::from_code(state.code()), Some(state));
        }
        assert_eq!(ApprovalBatchState::from_code(0), None);
    }
}
