//! API layer for pregnant women details

use super::loader::BeneficiaryTransport;
use crate::shared::api_utils::post_form;
use async_trait::async_trait;
use contracts::domain::a101_pregnant_women::DetailsRequest;
use serde_json::Value;

/// Posts subsection requests to the unified beneficiary details endpoint.
#[derive(Debug, Clone)]
pub struct HttpBeneficiaryTransport {
    url: String,
}

impl HttpBeneficiaryTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait(?Send)]
impl BeneficiaryTransport for HttpBeneficiaryTransport {
    async fn fetch_subsection(&self, request: &DetailsRequest) -> Result<Value, String> {
        post_form(&self.url, request).await
    }
}
