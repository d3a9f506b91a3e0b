//! Custom Build Service - Submission of user-authored builds

use nightreign_domain::{Build, CustomBuildDraft};
use nightreign_shared::{created_build, endpoints, CreateCustomBuildRequest};

use crate::application::api::Api;
use crate::application::error::ServiceError;
use crate::ports::outbound::ApiError;

pub struct CustomBuildService {
    api: Api,
}

impl CustomBuildService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Validate the draft and submit it.
    ///
    /// # Returns
    /// * `Ok(Build)` - The record as created by the service
    /// * `Err(ServiceError::Validation)` - Required fields missing; nothing sent
    /// * `Err(ServiceError::Network)` - The submission failed
    pub async fn create(&self, draft: &CustomBuildDraft) -> Result<Build, ServiceError> {
        draft.validate()?;

        let request = CreateCustomBuildRequest::from(draft);
        let response = self.api.post_value(endpoints::CUSTOM_BUILD, &request).await?;
        let build = created_build(response).map_err(|e| ApiError::ParseError(e.to_string()))?;

        tracing::info!(build_id = %build.id, name = %build.name, "Custom build created");
        Ok(build)
    }
}
