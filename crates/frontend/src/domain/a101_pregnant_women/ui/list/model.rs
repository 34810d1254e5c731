use crate::shared::api_utils::post_form;
use contracts::domain::a101_pregnant_women::{PregnantWomenListRequest, PregnantWomenListResponse};

/// Fetch one page of the list.
pub async fn fetch_page(
    url: &str,
    request: &PregnantWomenListRequest,
) -> Result<PregnantWomenListResponse, String> {
    post_form(url, request).await
}
