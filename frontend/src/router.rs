use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{api::ApiClient, pages::unified_users::UnifiedUsersPage, state::notifications};

pub const UNIFIED_USERS_PATH: &str = "/admin/unified-system-users";

pub const ROUTE_PATHS: &[&str] = &["/", UNIFIED_USERS_PATH];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    notifications::provide_notifications();
    view! {
        <Router>
            <Routes>
                <Route path="/" view=UnifiedUsersPage/>
                <Route path=UNIFIED_USERS_PATH view=UnifiedUsersPage/>
            </Routes>
        </Router>
    }
}
