use serde::Serialize;

use crate::domain::{
    ApprovalPerson, ApprovalRequest, ApprovalUpdateRequest, BatchId, CsvReport, PostbackUrl,
};

#[derive(Serialize)]
struct PersonBody<'a> {
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Email")]
    email: &'a str,
    #[serde(rename = "MSISDN")]
    msisdn: &'a str,
    #[serde(rename = "Hash")]
    hash: &'a str,
}

impl<'a> From<&'a ApprovalPerson> for PersonBody<'a> {
    fn from(person: &'a ApprovalPerson) -> Self {
        Self {
            name: &person.name,
            email: &person.email,
            msisdn: &person.msisdn,
            hash: person.hash.as_deref().unwrap_or(""),
        }
    }
}

#[derive(Serialize)]
struct ApprovalBody<'a> {
    #[serde(rename = "ActionType")]
    action: u32,
    #[serde(rename = "MVNOID")]
    mvno_id: u32,
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "MaxApprovals")]
    max_approvals: u32,
    #[serde(rename = "InternalPeople")]
    internal_people: Vec<PersonBody<'a>>,
    #[serde(rename = "ExternalPeople")]
    external_people: Vec<PersonBody<'a>>,
    #[serde(rename = "Link")]
    link: &'a str,
    #[serde(rename = "LinkedBatch")]
    linked_batch: u32,
}

/// Encode the `approval/create` envelope.
pub(crate) fn encode_approval_request(
    request: &ApprovalRequest,
) -> Result<String, serde_json::Error> {
    serde_json::to_string(&ApprovalBody {
        action: request.action.code(),
        mvno_id: request.mvno_id.get(),
        name: &request.name,
        max_approvals: request.max_approvals,
        internal_people: request.internal_people.iter().map(PersonBody::from).collect(),
        external_people: request.external_people.iter().map(PersonBody::from).collect(),
        link: request.link.as_ref().map(PostbackUrl::as_str).unwrap_or(""),
        linked_batch: request
            .linked_batch
            .map(BatchId::value)
            .unwrap_or_default(),
    })
}

#[derive(Serialize)]
struct ReportBody<'a> {
    #[serde(rename = "Filename")]
    filename: &'a str,
    #[serde(rename = "Lines")]
    lines: &'a [String],
}

impl<'a> From<&'a CsvReport> for ReportBody<'a> {
    fn from(report: &'a CsvReport) -> Self {
        Self {
            filename: &report.filename,
            lines: &report.lines,
        }
    }
}

#[derive(Serialize)]
struct ApprovalUpdateBody<'a> {
    #[serde(rename = "BatchID")]
    batch_id: u32,
    #[serde(rename = "State")]
    state: u32,
    #[serde(rename = "Reports")]
    reports: Vec<ReportBody<'a>>,
}

/// Encode the `approval/update` envelope.
pub(crate) fn encode_approval_update(
    request: &ApprovalUpdateRequest,
) -> Result<String, serde_json::Error> {
    serde_json::to_string(&ApprovalUpdateBody {
        batch_id: request.batch_id.value(),
        state: request.state.code(),
        reports: request.reports.iter().map(ReportBody::from).collect(),
    })
}
