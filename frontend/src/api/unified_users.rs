use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::api::client::ApiClient;
use crate::api::types::{ApiError, DeactivateUsersRequest, UnifiedUserMenuResponse};

/// Query values keep `,` literal so CSV parameters reach the server as-is.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b',')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Parameters of a `SearchUnifiedSystemUserMenu` request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnifiedUserSearch {
    pub search_string: String,
    pub filters: Vec<String>,
    pub role_filter: String,
    pub starting_rec_no: u64,
}

impl UnifiedUserSearch {
    pub fn query_string(&self) -> String {
        format!(
            "search=Y&startingRecNo={}&searchString={}&filter={}&roleFilter={}",
            self.starting_rec_no.max(1),
            encode(&self.search_string),
            encode(&self.filters.join(",")),
            encode(&self.role_filter),
        )
    }
}

pub fn deactivate_query_string(combined_user_ids: &[String]) -> String {
    format!("ID={}&startingRecNo=1", encode(&combined_user_ids.join(",")))
}

impl ApiClient {
    pub async fn list_unified_users(
        &self,
        starting_rec_no: u64,
    ) -> Result<UnifiedUserMenuResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let mut url = format!("{}/rest/UnifiedSystemUserMenu", base_url);
        if starting_rec_no > 1 {
            url.push_str(&format!("?startingRecNo={}", starting_rec_no));
        }
        let response = self.send(self.http_client().get(url)).await?;
        Self::read_json(response).await
    }

    pub async fn search_unified_users(
        &self,
        search: &UnifiedUserSearch,
    ) -> Result<UnifiedUserMenuResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let url = format!(
            "{}/rest/SearchUnifiedSystemUserMenu?{}",
            base_url,
            search.query_string()
        );
        let response = self.send(self.http_client().get(url)).await?;
        Self::read_json(response).await
    }

    pub async fn deactivate_unified_users(
        &self,
        combined_user_ids: &[String],
    ) -> Result<(), ApiError> {
        if combined_user_ids.is_empty() {
            return Err(ApiError::validation("No users selected for deactivation"));
        }
        let base_url = self.resolved_base_url().await;
        let url = format!(
            "{}/rest/DeleteUnifiedSystemUser?{}",
            base_url,
            deactivate_query_string(combined_user_ids)
        );
        let body = DeactivateUsersRequest {
            selected_ids: combined_user_ids.to_vec(),
        };
        let response = self
            .send(self.http_client().post(url).json(&body))
            .await?;
        Self::read_success(response).await
    }
}
