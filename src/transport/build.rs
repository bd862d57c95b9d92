use serde::Serialize;

use crate::domain::{
    BatchId, BuildData, BuildRequest, Campaign, ForcedSize, PostbackUrl, StatusEvents,
};
use crate::transport::payload::payload_json;

#[derive(Serialize)]
struct BuildBody<'a> {
    #[serde(rename = "MVNOID")]
    mvno_id: u32,
    #[serde(rename = "Data")]
    data: &'a str,
    #[serde(rename = "Campaign")]
    campaign: &'a str,
    #[serde(rename = "ApprovalBatch")]
    approval_batch: u32,
    #[serde(rename = "BuildTemplate")]
    template: u32,
    #[serde(rename = "AfterBuildAction")]
    after_build_action: u32,
    #[serde(rename = "AfterBuildData")]
    after_build_data: &'a str,
    #[serde(rename = "PostbackStatusUrl")]
    postback_status_url: &'a str,
    #[serde(rename = "ForcedSize")]
    forced_size: &'a str,
    // The build envelope spells this field with a capital B, unlike the
    // message envelope.
    #[serde(rename = "PostBackStatusTypes")]
    postback_status_types: String,
}

/// Encode the `generate/video` envelope.
///
/// Template data travels double-encoded: `Data` and `AfterBuildData` are
/// JSON *strings* inside the outer object. `BuildData::Text` is embedded
/// unchanged; structured data is encoded once. After-build data is encoded
/// unconditionally, absent data as the string `"null"`.
pub(crate) fn encode_build_request(request: &BuildRequest) -> Result<String, serde_json::Error> {
    let data = match request.data() {
        BuildData::Text(text) => text.clone(),
        BuildData::Structured(value) => serde_json::to_string(value)?,
    };
    let after_build_data = match request.after_build_data() {
        Some(payload) => payload_json(payload)?,
        None => "null".to_owned(),
    };
    let options = request.options();
    serde_json::to_string(&BuildBody {
        mvno_id: request.mvno_id().get(),
        data: &data,
        campaign: options.campaign.as_ref().map(Campaign::as_str).unwrap_or(""),
        approval_batch: options
            .approval_batch
            .map(BatchId::value)
            .unwrap_or_default(),
        template: request.template().get(),
        after_build_action: request.after_build_action().code(),
        after_build_data: &after_build_data,
        postback_status_url: options
            .postback_status_url
            .as_ref()
            .map(PostbackUrl::as_str)
            .unwrap_or(""),
        forced_size: options
            .forced_size
            .as_ref()
            .map(ForcedSize::as_str)
            .unwrap_or(""),
        postback_status_types: options
            .status_events
            .as_ref()
            .map(StatusEvents::encode)
            .unwrap_or_default(),
    })
}
