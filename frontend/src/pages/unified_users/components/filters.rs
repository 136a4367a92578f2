use crate::{
    api::TestSectionOption,
    pages::unified_users::utils::{FilterFlag, UserFilters},
};
use leptos::*;

pub const NOT_SELECTED_LABEL: &str = "Not Selected";
pub const NO_OPTIONS_LABEL: &str = "No options available";

#[component]
pub fn UserFiltersBar(
    #[prop(into)] filters: Signal<UserFilters>,
    #[prop(into)] test_sections: Signal<Vec<TestSectionOption>>,
    on_search: Callback<String>,
    on_role_change: Callback<String>,
    on_flag_change: Callback<(FilterFlag, bool)>,
) -> impl IntoView {
    let role_options = move || {
        let sections = test_sections.get();
        let selected = filters.with(|f| f.role_filter.clone());
        if sections.is_empty() {
            return view! { <option value="">{NO_OPTIONS_LABEL}</option> }.into_view();
        }
        let options = sections
            .into_iter()
            .map(|section| {
                let is_selected = section.id == selected;
                view! {
                    <option value=section.id.clone() selected=is_selected>
                        {section.value.clone()}
                    </option>
                }
            })
            .collect_view();
        view! {
            <option value="">{NOT_SELECTED_LABEL}</option>
            {options}
        }
        .into_view()
    };

    let flag_checkbox = move |flag: FilterFlag, text: &'static str| {
        let checked = move || {
            filters.with(|f| match flag {
                FilterFlag::OnlyActive => f.only_active,
                FilterFlag::OnlyAdministrator => f.only_admin,
            })
        };
        view! {
            <label class="inline-flex items-center gap-2 text-sm text-fg">
                <input
                    type="checkbox"
                    class="rounded border-border"
                    prop:checked=checked
                    on:change=move |ev| on_flag_change.call((flag, event_target_checked(&ev)))
                />
                {text}
            </label>
        }
    };

    view! {
        <div class="flex flex-col gap-4 md:flex-row md:items-end">
            <label class="flex-1 text-sm text-fg-muted">
                "Search"
                <input
                    type="search"
                    class="mt-1 w-full rounded-md border border-border bg-surface-elevated px-3 py-2 text-fg"
                    placeholder="Search by first, last or login name"
                    prop:value=move || filters.with(|f| f.search_term.clone())
                    on:input=move |ev| on_search.call(event_target_value(&ev))
                />
            </label>
            <label class="text-sm text-fg-muted">
                "Role"
                <select
                    class="mt-1 block rounded-md border border-border bg-surface-elevated px-3 py-2 text-fg"
                    on:change=move |ev| on_role_change.call(event_target_value(&ev))
                >
                    {role_options}
                </select>
            </label>
            <div class="flex items-center gap-4">
                {flag_checkbox(FilterFlag::OnlyActive, "Only Active")}
                {flag_checkbox(FilterFlag::OnlyAdministrator, "Only Administrator")}
            </div>
        </div>
    }
}
