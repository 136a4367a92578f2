use crate::api::{ApiClient, ApiError, UnifiedUserMenuResponse, UnifiedUserSearch};
use std::rc::Rc;

#[derive(Clone)]
pub struct UnifiedUsersRepository {
    client: Rc<ApiClient>,
}

impl Default for UnifiedUsersRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl UnifiedUsersRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_menu(&self, starting_rec_no: u64) -> Result<UnifiedUserMenuResponse, ApiError> {
        self.client.list_unified_users(starting_rec_no).await
    }

    pub async fn search(
        &self,
        search: UnifiedUserSearch,
    ) -> Result<UnifiedUserMenuResponse, ApiError> {
        self.client.search_unified_users(&search).await
    }

    pub async fn deactivate(&self, combined_user_ids: Vec<String>) -> Result<(), ApiError> {
        self.client
            .deactivate_unified_users(&combined_user_ids)
            .await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    fn repo(server: &MockServer) -> UnifiedUsersRepository {
        UnifiedUsersRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )))
    }

    #[tokio::test]
    async fn unified_users_repository_calls_api() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/rest/UnifiedSystemUserMenu");
            then.status(200).json_body(json!({
                "menuList": [{ "systemUserId": "1", "combinedUserID": "12" }],
                "testSections": [{ "id": "36", "value": "Hematology" }],
                "totalRecordCount": 1,
                "fromRecordCount": 1,
                "toRecordCount": 1
            }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/rest/SearchUnifiedSystemUserMenu");
            then.status(200).json_body(json!({ "menuList": [] }));
        });
        server.mock(|when, then| {
            when.method(POST).path("/api/rest/DeleteUnifiedSystemUser");
            then.status(200).json_body(json!({}));
        });

        let repo = repo(&server);
        let menu = repo.fetch_menu(1).await.unwrap();
        assert_eq!(menu.menu_list[0].combined_user_id, "12");

        let searched = repo
            .search(UnifiedUserSearch {
                search_string: "smith".into(),
                starting_rec_no: 1,
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(searched.menu_list.is_empty());

        repo.deactivate(vec!["12".into()]).await.unwrap();
        assert_eq!(server.received().len(), 3);
    }
}
