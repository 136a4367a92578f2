use super::{
    repository::UnifiedUsersRepository,
    utils::{
        rows_from_response, ClientPage, FilterFlag, HeaderCheckState, ListSource, RecordWindow,
        RequestTracker, Selection, UserFilters, UserRow,
    },
};
use crate::{
    api::{ApiClient, ApiError, TestSectionOption, UnifiedUserMenuResponse},
    config,
    state::notifications::{use_notifications, NotificationCenter, NotificationKind},
    utils::navigation,
};
use leptos::*;
use std::rc::Rc;

pub const DEACTIVATE_SUCCESS_MESSAGE: &str = "The selected users were deactivated.";

#[derive(Clone, Copy)]
pub struct UnifiedUsersViewModel {
    pub rows: RwSignal<Vec<UserRow>>,
    pub test_sections: RwSignal<Vec<TestSectionOption>>,
    pub record_window: RwSignal<RecordWindow>,
    pub source: RwSignal<ListSource>,
    pub filters: RwSignal<UserFilters>,
    pub selection: RwSignal<Selection>,
    pub client_page: RwSignal<ClientPage>,
    pub starting_rec_no: RwSignal<u64>,
    pub loading: RwSignal<bool>,
    pub load_error: RwSignal<Option<ApiError>>,
    pub deactivating: RwSignal<bool>,
    pub notifications: NotificationCenter,
    repository: StoredValue<UnifiedUsersRepository>,
    tracker: StoredValue<RequestTracker>,
}

impl UnifiedUsersViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = UnifiedUsersRepository::new_with_client(Rc::new(api));
        let tracker = RequestTracker::default();
        {
            let tracker = tracker.clone();
            on_cleanup(move || tracker.dispose());
        }

        Self {
            rows: create_rw_signal(Vec::new()),
            test_sections: create_rw_signal(Vec::new()),
            record_window: create_rw_signal(RecordWindow::default()),
            source: create_rw_signal(ListSource::Menu),
            filters: create_rw_signal(UserFilters::default()),
            selection: create_rw_signal(Selection::default()),
            client_page: create_rw_signal(ClientPage::default()),
            starting_rec_no: create_rw_signal(1),
            loading: create_rw_signal(false),
            load_error: create_rw_signal(None),
            deactivating: create_rw_signal(false),
            notifications: use_notifications(),
            repository: store_value(repository),
            tracker: store_value(tracker),
        }
    }

    pub fn page_rows(&self) -> Signal<Vec<UserRow>> {
        let rows = self.rows;
        let client_page = self.client_page;
        Signal::derive(move || {
            let page = client_page.get();
            rows.with(|rows| page.slice(rows).to_vec())
        })
    }

    pub fn header_state(&self) -> Signal<HeaderCheckState> {
        let selection = self.selection;
        let page_rows = self.page_rows();
        Signal::derive(move || page_rows.with(|rows| selection.with(|s| s.header_state(rows))))
    }

    pub fn selected_combined_ids(&self) -> Signal<Vec<String>> {
        let selection = self.selection;
        let rows = self.rows;
        Signal::derive(move || rows.with(|rows| selection.with(|s| s.combined_ids(rows))))
    }

    pub fn can_modify(&self) -> Signal<bool> {
        let selection = self.selection;
        Signal::derive(move || selection.with(Selection::can_modify))
    }

    pub fn can_deactivate(&self) -> Signal<bool> {
        let selection = self.selection;
        let deactivating = self.deactivating;
        Signal::derive(move || selection.with(Selection::can_deactivate) && !deactivating.get())
    }

    /// Re-requests the current window from the active source.
    pub fn load(&self) {
        self.fetch(
            self.source.get_untracked(),
            self.starting_rec_no.get_untracked(),
            false,
        );
    }

    pub fn on_search_input(&self, value: &str) {
        let term = value.to_lowercase();
        self.filters.update(|filters| filters.search_term = term);
        self.selection.update(Selection::clear);
        self.client_page.update(|page| page.page = 1);
        self.source.set(ListSource::Search);
        self.fetch(ListSource::Search, 1, true);
    }

    pub fn on_role_filter_change(&self, role: String) {
        self.filters.update(|filters| filters.role_filter = role);
        self.refresh_search();
    }

    pub fn on_flag_change(&self, flag: FilterFlag, enabled: bool) {
        self.filters.update(|filters| filters.set_flag(flag, enabled));
        self.refresh_search();
    }

    fn refresh_search(&self) {
        if self.source.get_untracked() == ListSource::Search {
            self.selection.update(Selection::clear);
            self.fetch(ListSource::Search, 1, true);
        }
    }

    pub fn toggle_row(&self, key: &str) {
        self.selection.update(|selection| selection.toggle(key));
    }

    pub fn toggle_page(&self) {
        let page_rows = self.page_rows().get_untracked();
        self.selection
            .update(|selection| selection.toggle_page(&page_rows));
    }

    pub fn on_page_change(&self, page: usize, page_size: usize) {
        let total = self.rows.with_untracked(Vec::len);
        self.client_page
            .set(ClientPage::new(page, page_size).clamped(total));
        self.selection.update(Selection::clear);
    }

    pub fn next_window(&self) {
        let window = self.record_window.get_untracked();
        if window.has_next() {
            self.selection.update(Selection::clear);
            self.fetch(self.source.get_untracked(), window.next_start(), false);
        }
    }

    pub fn previous_window(&self) {
        let window = self.record_window.get_untracked();
        if window.has_previous() {
            self.selection.update(Selection::clear);
            self.fetch(self.source.get_untracked(), window.previous_start(), false);
        }
    }

    /// Opens the edit form for the single selected user. Failures are
    /// reported as notifications; the navigated URL is returned otherwise.
    pub fn modify(&self) -> Option<String> {
        let url = self
            .rows
            .with_untracked(|rows| {
                self.selection
                    .with_untracked(|selection| selection.single_combined_id(rows))
            })
            .map(|id| navigation::unified_user_form_url(&id))
            .map_err(ApiError::from);
        self.open_form(url)
    }

    pub fn add(&self) -> Option<String> {
        self.open_form(Ok(navigation::unified_user_form_url(
            navigation::NEW_USER_ID,
        )))
    }

    fn open_form(&self, url: Result<String, ApiError>) -> Option<String> {
        let result = url.and_then(|url| {
            log::info!("opening unified user form: {}", url);
            navigation::navigate_to(&url).map(|_| url)
        });
        match result {
            Ok(url) => Some(url),
            Err(err) => {
                self.notifications.api_error(&err);
                None
            }
        }
    }

    pub fn deactivate(&self) {
        if self.deactivating.get_untracked() {
            return;
        }
        let ids = self.rows.with_untracked(|rows| {
            self.selection
                .with_untracked(|selection| selection.deactivation_ids(rows))
        });
        let ids = match ids {
            Ok(ids) => ids,
            Err(err) => {
                self.notifications.api_error(&err.into());
                return;
            }
        };

        log::info!("deactivating {} unified users", ids.len());
        self.deactivating.set(true);
        let tracker = self.tracker.get_value();
        let repository = self.repository.get_value();
        let vm = *self;
        spawn_local(async move {
            let result = repository.deactivate(ids).await;
            if tracker.is_disposed() {
                log::debug!("page closed before deactivation finished");
                return;
            }
            vm.finish_deactivation(result);
        });
    }

    fn finish_deactivation(&self, result: Result<(), ApiError>) {
        self.deactivating.set(false);
        match result {
            Ok(()) => {
                self.notifications.notify(
                    NotificationKind::Success,
                    "Notification",
                    DEACTIVATE_SUCCESS_MESSAGE,
                );
                self.selection.update(Selection::clear);
                self.load();
            }
            Err(err) => {
                log::error!("deactivation failed: {}", err);
                self.notifications.api_error(&err);
            }
        }
    }

    fn fetch(&self, source: ListSource, starting_rec_no: u64, debounce: bool) {
        let tracker = self.tracker.get_value();
        let repository = self.repository.get_value();
        let ticket = tracker.issue();
        let search = self.filters.with_untracked(|f| f.to_search(starting_rec_no));
        self.loading.set(true);
        self.load_error.set(None);

        let vm = *self;
        spawn_local(async move {
            if debounce {
                settle(config::search_debounce_ms()).await;
                if !tracker.accepts(ticket) {
                    return;
                }
            }
            let result = match source {
                ListSource::Menu => repository.fetch_menu(starting_rec_no).await,
                ListSource::Search => repository.search(search).await,
            };
            if !tracker.accepts(ticket) {
                log::debug!("discarding stale response for request #{}", ticket);
                return;
            }
            vm.apply_response(source, starting_rec_no, result);
        });
    }

    fn apply_response(
        &self,
        source: ListSource,
        starting_rec_no: u64,
        result: Result<UnifiedUserMenuResponse, ApiError>,
    ) {
        self.loading.set(false);
        match result {
            Ok(response) => {
                let rows = rows_from_response(&response);
                self.record_window
                    .set(RecordWindow::from_response(&response));
                if source == ListSource::Menu || !response.test_sections.is_empty() {
                    self.test_sections.set(response.test_sections);
                }
                self.selection
                    .update(|selection| selection.retain_present(&rows));
                self.client_page.update(|page| page.page = 1);
                self.starting_rec_no.set(starting_rec_no);
                self.rows.set(rows);
            }
            Err(err) => {
                log::error!("failed to load unified users: {}", err);
                self.notifications.api_error(&err);
                self.load_error.set(Some(err));
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn settle(ms: u32) {
    if ms > 0 {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn settle(_ms: u32) {}

pub fn use_unified_users_view_model() -> UnifiedUsersViewModel {
    let vm = UnifiedUsersViewModel::new();
    vm.load();
    vm
}
