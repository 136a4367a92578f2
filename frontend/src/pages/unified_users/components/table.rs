use crate::pages::unified_users::utils::{HeaderCheckState, Selection, UserRow};
use leptos::*;

pub const COLUMN_HEADERS: [&str; 8] = [
    "First Name",
    "Last Name",
    "Login Name",
    "Password Expiration Date",
    "Locked",
    "Disabled",
    "Is Active",
    "Timeout",
];

fn aria_checked(state: HeaderCheckState) -> &'static str {
    match state {
        HeaderCheckState::Checked => "true",
        HeaderCheckState::Indeterminate => "mixed",
        HeaderCheckState::Unchecked => "false",
    }
}

/// Rows are keyed by their full content so a re-fetch that changes any
/// displayed field rebuilds the row instead of reusing stale cells.
fn row_key(row: &UserRow) -> UserRow {
    row.clone()
}

#[component]
pub fn UserTable(
    #[prop(into)] rows: Signal<Vec<UserRow>>,
    #[prop(into)] selection: Signal<Selection>,
    #[prop(into)] header_state: Signal<HeaderCheckState>,
    #[prop(into)] loading: Signal<bool>,
    on_toggle_row: Callback<String>,
    on_toggle_page: Callback<()>,
) -> impl IntoView {
    let cell = "px-4 py-3 text-sm text-fg whitespace-nowrap";

    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-border">
                <thead class="bg-surface">
                    <tr>
                        <th class="px-4 py-3 text-left">
                            <input
                                type="checkbox"
                                aria-label="Select all rows"
                                aria-checked=move || aria_checked(header_state.get())
                                prop:checked=move || header_state.get() == HeaderCheckState::Checked
                                prop:indeterminate=move || {
                                    header_state.get() == HeaderCheckState::Indeterminate
                                }
                                on:change=move |_| on_toggle_page.call(())
                            />
                        </th>
                        {COLUMN_HEADERS
                            .iter()
                            .map(|title| {
                                view! {
                                    <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">
                                        {*title}
                                    </th>
                                }
                            })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody class="bg-surface-elevated divide-y divide-border">
                    <Show when=move || !loading.get() && rows.with(Vec::is_empty)>
                        <tr>
                            <td class="px-4 py-6 text-center text-sm text-fg-muted" colspan="9">
                                "No users found."
                            </td>
                        </tr>
                    </Show>
                    <For
                        each=move || rows.get()
                        key=row_key
                        children=move |row: UserRow| {
                            let key = row.key.clone();
                            let is_selected = {
                                let key = key.clone();
                                move || selection.with(|s| s.contains(&key))
                            };
                            let toggle = move || on_toggle_row.call(key.clone());
                            let toggle_from_row = toggle.clone();
                            let row_selected = is_selected.clone();
                            let aria_selected = is_selected.clone();
                            let checkbox_label = format!("Select {}", row.login_name);
                            view! {
                                <tr
                                    class=move || {
                                        if row_selected() {
                                            "cursor-pointer bg-action-ghost-bg-hover"
                                        } else {
                                            "cursor-pointer hover:bg-action-ghost-bg-hover"
                                        }
                                    }
                                    aria-selected=move || aria_selected().to_string()
                                    on:click=move |_| toggle_from_row()
                                >
                                    <td class="px-4 py-3">
                                        <input
                                            type="checkbox"
                                            aria-label=checkbox_label
                                            prop:checked=is_selected
                                            on:click=|ev| ev.stop_propagation()
                                            on:change=move |_| toggle()
                                        />
                                    </td>
                                    <td class=cell>{row.first_name}</td>
                                    <td class=cell>{row.last_name}</td>
                                    <td class=cell>{row.login_name}</td>
                                    <td class=cell>{row.exp_date}</td>
                                    <td class=cell>{row.locked}</td>
                                    <td class=cell>{row.disabled}</td>
                                    <td class=cell>{row.active}</td>
                                    <td class=cell>{row.timeout}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{fixtures, ssr::render_to_string};

    fn render(rows: Vec<UserRow>, selected: &[&str], state: HeaderCheckState) -> String {
        let mut selection = Selection::default();
        for id in selected {
            selection.toggle(id);
        }
        render_to_string(move || {
            view! {
                <UserTable
                    rows=Signal::derive(move || rows.clone())
                    selection=Signal::derive(move || selection.clone())
                    header_state=Signal::derive(move || state)
                    loading=Signal::derive(|| false)
                    on_toggle_row=Callback::new(|_| {})
                    on_toggle_page=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn renders_headers_and_rows() {
        let html = render(fixtures::rows(2), &["1"], HeaderCheckState::Indeterminate);
        for title in COLUMN_HEADERS {
            assert!(html.contains(title), "missing column {title}");
        }
        assert!(html.contains("First1"));
        assert!(html.contains("login2"));
        assert!(html.contains("aria-checked=\"mixed\""));
        assert!(html.contains("aria-selected=\"true\""));
        assert!(html.contains("aria-selected=\"false\""));
        assert!(!html.contains("No users found."));
    }

    #[test]
    fn empty_list_renders_placeholder_row() {
        let html = render(Vec::new(), &[], HeaderCheckState::Unchecked);
        assert!(html.contains("No users found."));
        assert!(html.contains("aria-checked=\"false\""));
    }

    #[test]
    fn row_key_changes_when_displayed_fields_change() {
        let before = fixtures::row("2", "12");
        let after = UserRow {
            active: "N".into(),
            disabled: "Y".into(),
            ..before.clone()
        };
        assert_eq!(row_key(&before), row_key(&before.clone()));
        assert_ne!(row_key(&before), row_key(&after));

        let html = render(vec![after], &[], HeaderCheckState::Unchecked);
        assert!(html.contains("login2"));
        assert!(html.contains(">N<"));
    }
}
