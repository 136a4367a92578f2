use crate::{
    api::{ApiError, UnifiedUserMenuItem, UnifiedUserMenuResponse, UnifiedUserSearch},
    components::pagination::page_count,
};
use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;
use thiserror::Error;

/// Block size the server pages the user menu by.
pub const SERVER_WINDOW_SIZE: u64 = 20;
pub const PAGE_SIZES: [usize; 4] = [5, 10, 15, 20];
pub const DEFAULT_PAGE_SIZE: usize = 5;

pub const FILTER_ACTIVE: &str = "isActive";
pub const FILTER_ADMIN: &str = "isAdmin";

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UserRow {
    /// Selection and render key, unique within one loaded block.
    pub key: String,
    pub id: String,
    pub combined_user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub login_name: String,
    pub exp_date: String,
    pub locked: String,
    pub disabled: String,
    pub active: String,
    pub timeout: String,
}

impl From<&UnifiedUserMenuItem> for UserRow {
    fn from(item: &UnifiedUserMenuItem) -> Self {
        Self {
            key: item.system_user_id.clone(),
            id: item.system_user_id.clone(),
            combined_user_id: item.combined_user_id.clone(),
            first_name: item.first_name.clone(),
            last_name: item.last_name.clone(),
            login_name: item.login_name.clone(),
            exp_date: item.exp_date.clone(),
            locked: item.locked.clone(),
            disabled: item.disabled.clone(),
            active: item.active.clone(),
            timeout: item.timeout.clone(),
        }
    }
}

impl UserRow {
    /// Disabled accounts are skipped by the select-all toggle.
    pub fn is_disabled(&self) -> bool {
        is_truthy_flag(&self.disabled)
    }
}

fn is_truthy_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "true" | "1"
    )
}

/// Rows keep `systemUserId` as their key; blank or repeated ids fall back to
/// the combined id and then to the row position.
pub fn rows_from_response(response: &UnifiedUserMenuResponse) -> Vec<UserRow> {
    let mut seen = HashSet::new();
    response
        .menu_list
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let mut row = UserRow::from(item);
            let preferred = if !row.id.is_empty() {
                row.id.clone()
            } else if !row.combined_user_id.is_empty() {
                format!("combined:{}", row.combined_user_id)
            } else {
                format!("row:{}", index)
            };
            row.key = if seen.contains(&preferred) {
                format!("{}#{}", preferred, index)
            } else {
                preferred
            };
            seen.insert(row.key.clone());
            row
        })
        .collect()
}

/// Server-side record window: which block of records is loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordWindow {
    pub from: u64,
    pub to: u64,
    pub total: u64,
}

impl RecordWindow {
    pub fn from_response(response: &UnifiedUserMenuResponse) -> Self {
        Self {
            from: response.from_record_count,
            to: response.to_record_count,
            total: response.total_record_count,
        }
    }

    pub fn has_next(&self) -> bool {
        self.to < self.total
    }

    pub fn has_previous(&self) -> bool {
        self.from > 1
    }

    pub fn next_start(&self) -> u64 {
        self.to + 1
    }

    pub fn previous_start(&self) -> u64 {
        self.from.saturating_sub(SERVER_WINDOW_SIZE).max(1)
    }

    pub fn label(&self) -> String {
        format!("Showing {} - {} of {}", self.from, self.to, self.total)
    }
}

/// Client-side page over the loaded block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientPage {
    pub page: usize,
    pub page_size: usize,
}

impl Default for ClientPage {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ClientPage {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    pub fn total_pages(&self, total_items: usize) -> usize {
        page_count(self.page_size, total_items)
    }

    pub fn clamped(self, total_items: usize) -> Self {
        Self {
            page: self.page.min(self.total_pages(total_items)),
            ..self
        }
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page - 1).saturating_mul(self.page_size).min(items.len());
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckState {
    Unchecked,
    Indeterminate,
    Checked,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("Select exactly one user to modify ({0} selected)")]
    RequiresSingleSelection(usize),
    #[error("Select at least one user to deactivate")]
    EmptySelection,
    #[error("Selected user {0} is no longer listed")]
    MissingRow(String),
}

impl From<ActionError> for ApiError {
    fn from(error: ActionError) -> Self {
        ApiError::validation(error.to_string())
    }
}

/// Selected row keys, in the order the operator picked them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn toggle(&mut self, id: &str) {
        if self.contains(id) {
            self.ids.retain(|selected| selected != id);
        } else {
            self.ids.push(id.to_string());
        }
    }

    /// Header checkbox: clears the page's enabled rows when all of them are
    /// selected, otherwise adds the ones still unselected.
    pub fn toggle_page(&mut self, page_rows: &[UserRow]) {
        let enabled: Vec<&UserRow> = page_rows.iter().filter(|row| !row.is_disabled()).collect();
        if enabled.is_empty() {
            return;
        }
        if enabled.iter().all(|row| self.contains(&row.key)) {
            self.ids
                .retain(|id| !enabled.iter().any(|row| &row.key == id));
        } else {
            for row in enabled {
                if !self.contains(&row.key) {
                    self.ids.push(row.key.clone());
                }
            }
        }
    }

    pub fn header_state(&self, page_rows: &[UserRow]) -> HeaderCheckState {
        let enabled = page_rows.iter().filter(|row| !row.is_disabled());
        let (total, selected) = enabled.fold((0usize, 0usize), |(total, selected), row| {
            (total + 1, selected + usize::from(self.contains(&row.key)))
        });
        match selected {
            0 => HeaderCheckState::Unchecked,
            n if n == total => HeaderCheckState::Checked,
            _ => HeaderCheckState::Indeterminate,
        }
    }

    /// Drops ids that are not part of `rows`.
    pub fn retain_present(&mut self, rows: &[UserRow]) {
        self.ids.retain(|id| rows.iter().any(|row| &row.key == id));
    }

    /// Combined user ids of the selected rows, in selection order.
    pub fn combined_ids(&self, rows: &[UserRow]) -> Vec<String> {
        self.ids
            .iter()
            .filter_map(|id| rows.iter().find(|row| &row.key == id))
            .map(|row| row.combined_user_id.clone())
            .filter(|combined| !combined.is_empty())
            .collect()
    }

    pub fn can_modify(&self) -> bool {
        self.ids.len() == 1
    }

    pub fn can_deactivate(&self) -> bool {
        !self.ids.is_empty()
    }

    pub fn single_combined_id(&self, rows: &[UserRow]) -> Result<String, ActionError> {
        if !self.can_modify() {
            return Err(ActionError::RequiresSingleSelection(self.ids.len()));
        }
        let id = &self.ids[0];
        rows.iter()
            .find(|row| &row.key == id)
            .map(|row| row.combined_user_id.clone())
            .filter(|combined| !combined.is_empty())
            .ok_or_else(|| ActionError::MissingRow(id.clone()))
    }

    pub fn deactivation_ids(&self, rows: &[UserRow]) -> Result<Vec<String>, ActionError> {
        let ids = self.combined_ids(rows);
        if ids.is_empty() {
            Err(ActionError::EmptySelection)
        } else {
            Ok(ids)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterFlag {
    OnlyActive,
    OnlyAdministrator,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilters {
    pub search_term: String,
    pub role_filter: String,
    pub only_active: bool,
    pub only_admin: bool,
}

impl UserFilters {
    pub fn set_flag(&mut self, flag: FilterFlag, enabled: bool) {
        match flag {
            FilterFlag::OnlyActive => self.only_active = enabled,
            FilterFlag::OnlyAdministrator => self.only_admin = enabled,
        }
    }

    pub fn flags(&self) -> Vec<String> {
        let mut flags = Vec::new();
        if self.only_active {
            flags.push(FILTER_ACTIVE.to_string());
        }
        if self.only_admin {
            flags.push(FILTER_ADMIN.to_string());
        }
        flags
    }

    pub fn to_search(&self, starting_rec_no: u64) -> UnifiedUserSearch {
        UnifiedUserSearch {
            search_string: self.search_term.clone(),
            filters: self.flags(),
            role_filter: self.role_filter.clone(),
            starting_rec_no,
        }
    }
}

/// Which endpoint feeds the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListSource {
    #[default]
    Menu,
    Search,
}

/// Latest-request-wins bookkeeping tied to the page lifetime.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    latest: Rc<Cell<u64>>,
    disposed: Rc<Cell<bool>>,
}

impl RequestTracker {
    pub fn issue(&self) -> u64 {
        let ticket = self.latest.get() + 1;
        self.latest.set(ticket);
        ticket
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        self.latest.get() == ticket
    }

    pub fn accepts(&self, ticket: u64) -> bool {
        !self.disposed.get() && self.is_latest(ticket)
    }

    pub fn dispose(&self) {
        self.disposed.set(true);
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.get()
    }
}
