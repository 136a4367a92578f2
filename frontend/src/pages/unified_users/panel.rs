use crate::components::{
    layout::{ErrorMessage, Layout, LoadingSpinner},
    notification::NotificationStack,
    pagination::Pagination,
};
use leptos::*;
use leptos_meta::Title;

use super::{
    components::{
        actions::UserActions, filters::UserFiltersBar, record_pager::RecordPager,
        table::UserTable,
    },
    layout::{UnifiedUsersFrame, PAGE_TITLE},
    utils::{FilterFlag, PAGE_SIZES},
    view_model::{use_unified_users_view_model, UnifiedUsersViewModel},
};

#[component]
pub fn UnifiedUsersPage() -> impl IntoView {
    let vm = use_unified_users_view_model();
    view! { <UnifiedUsersPanel vm=vm /> }
}

#[component]
pub fn UnifiedUsersPanel(vm: UnifiedUsersViewModel) -> impl IntoView {
    let page = Signal::derive(move || vm.client_page.get().page);
    let page_size = Signal::derive(move || vm.client_page.get().page_size);
    let total_items = Signal::derive(move || vm.rows.with(Vec::len));
    let selected_count = Signal::derive(move || vm.selection.with(|s| s.len()));
    let load_error = Signal::derive(move || vm.load_error.get().map(|err| err.error));

    view! {
        <Title text=PAGE_TITLE />
        <Layout>
            <UnifiedUsersFrame>
                <NotificationStack center=vm.notifications />
                <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                    <UserFiltersBar
                        filters=vm.filters
                        test_sections=vm.test_sections
                        on_search=Callback::new(move |term: String| vm.on_search_input(&term))
                        on_role_change=Callback::new(move |role: String| vm.on_role_filter_change(role))
                        on_flag_change=Callback::new(move |(flag, enabled): (FilterFlag, bool)| {
                            vm.on_flag_change(flag, enabled)
                        })
                    />
                    <div class="flex flex-wrap items-center justify-between gap-3">
                        <UserActions
                            can_modify=vm.can_modify()
                            can_deactivate=vm.can_deactivate()
                            deactivating=vm.deactivating
                            selected_count=selected_count
                            on_modify=Callback::new(move |_| {
                                vm.modify();
                            })
                            on_deactivate=Callback::new(move |_| vm.deactivate())
                            on_add=Callback::new(move |_| {
                                vm.add();
                            })
                        />
                        <RecordPager
                            window=vm.record_window
                            loading=vm.loading
                            on_previous=Callback::new(move |_| vm.previous_window())
                            on_next=Callback::new(move |_| vm.next_window())
                        />
                    </div>
                    <Show when=move || load_error.get().is_some()>
                        <ErrorMessage message=load_error.get().unwrap_or_default() />
                    </Show>
                    <Show when=move || vm.loading.get()>
                        <LoadingSpinner />
                    </Show>
                    <UserTable
                        rows=vm.page_rows()
                        selection=vm.selection
                        header_state=vm.header_state()
                        loading=vm.loading
                        on_toggle_row=Callback::new(move |id: String| vm.toggle_row(&id))
                        on_toggle_page=Callback::new(move |_| vm.toggle_page())
                    />
                    <Pagination
                        page=page
                        page_size=page_size
                        total_items=total_items
                        page_sizes=&PAGE_SIZES
                        on_change=Callback::new(move |(page, size): (usize, usize)| {
                            vm.on_page_change(page, size)
                        })
                    />
                </div>
            </UnifiedUsersFrame>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{ApiError, TestSectionOption};
    use crate::pages::unified_users::utils::RecordWindow;
    use crate::test_support::{fixtures, ssr::render_to_string};

    #[test]
    fn panel_renders_loaded_rows_and_controls() {
        let html = render_to_string(move || {
            leptos_meta::provide_meta_context();
            let vm = UnifiedUsersViewModel::new();
            vm.rows.set(fixtures::rows(7));
            vm.test_sections.set(vec![TestSectionOption {
                id: "36".into(),
                value: "Hematology".into(),
            }]);
            vm.record_window.set(RecordWindow {
                from: 1,
                to: 7,
                total: 7,
            });
            vm.toggle_row("2");
            view! { <UnifiedUsersPanel vm=vm /> }
        });
        assert!(html.contains(PAGE_TITLE));
        assert!(html.contains("Showing 1 - 7 of 7"));
        assert!(html.contains("First1"));
        assert!(html.contains("First5"));
        assert!(!html.contains("First6"));
        assert!(html.contains("1-5 of 7 items"));
        assert!(html.contains("Hematology"));
        assert!(html.contains("1 selected"));
    }

    #[test]
    fn panel_shows_load_error() {
        let html = render_to_string(move || {
            leptos_meta::provide_meta_context();
            let vm = UnifiedUsersViewModel::new();
            vm.load_error
                .set(Some(ApiError::request_failed("Network unreachable")));
            view! { <UnifiedUsersPanel vm=vm /> }
        });
        assert!(html.contains("Network unreachable"));
        assert!(html.contains("No users found."));
    }
}
