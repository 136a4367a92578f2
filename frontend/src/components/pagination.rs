use crate::components::common::{Button, ButtonVariant};
use leptos::*;

/// Human-readable `start-end of total items`, with `0-0` for an empty list.
pub fn item_range_text(page: usize, page_size: usize, total_items: usize) -> String {
    if total_items == 0 || page_size == 0 {
        return format!("0-0 of {} items", total_items);
    }
    let start = ((page.max(1) - 1) * page_size + 1).min(total_items);
    let end = (start + page_size - 1).min(total_items);
    format!("{}-{} of {} items", start, end, total_items)
}

pub fn page_count(page_size: usize, total_items: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total_items.div_ceil(page_size).max(1)
}

/// Client-side pager over an already loaded list. `on_change` receives
/// `(page, page_size)`; a page-size change always restarts at page 1.
#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<usize>,
    #[prop(into)] page_size: Signal<usize>,
    #[prop(into)] total_items: Signal<usize>,
    page_sizes: &'static [usize],
    on_change: Callback<(usize, usize)>,
) -> impl IntoView {
    let total_pages = Signal::derive(move || page_count(page_size.get(), total_items.get()));
    let on_size_change = move |ev: ev::Event| {
        let size = event_target_value(&ev)
            .parse::<usize>()
            .unwrap_or_else(|_| page_size.get_untracked());
        on_change.call((1, size));
    };

    view! {
        <div class="flex flex-wrap items-center justify-between gap-3 border-t border-border px-4 py-3 text-sm text-fg-muted">
            <label class="flex items-center gap-2">
                "Items per page:"
                <select
                    class="rounded-md border border-border bg-surface-elevated px-2 py-1 text-fg"
                    on:change=on_size_change
                >
                    {page_sizes
                        .iter()
                        .map(|&size| {
                            view! {
                                <option value=size.to_string() selected=move || page_size.get() == size>
                                    {size.to_string()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <span>{move || item_range_text(page.get(), page_size.get(), total_items.get())}</span>
            <div class="flex items-center gap-2">
                <Button
                    variant=ButtonVariant::Ghost
                    label="Previous page"
                    disabled=Signal::derive(move || page.get() <= 1)
                    on:click=move |_| on_change.call((page.get_untracked().saturating_sub(1).max(1), page_size.get_untracked()))
                >
                    <i class="fas fa-chevron-left"></i>
                </Button>
                <span>{move || format!("{} of {} pages", page.get(), total_pages.get())}</span>
                <Button
                    variant=ButtonVariant::Ghost
                    label="Next page"
                    disabled=Signal::derive(move || page.get() >= total_pages.get())
                    on:click=move |_| on_change.call((page.get_untracked() + 1, page_size.get_untracked()))
                >
                    <i class="fas fa-chevron-right"></i>
                </Button>
            </div>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn pagination_renders_sizes_and_range() {
        let html = render_to_string(move || {
            view! {
                <Pagination
                    page=Signal::derive(|| 2)
                    page_size=Signal::derive(|| 5)
                    total_items=Signal::derive(|| 12)
                    page_sizes=&[5, 10, 15, 20]
                    on_change=Callback::new(|_: (usize, usize)| {})
                />
            }
        });
        assert!(html.contains("Items per page:"));
        assert!(html.contains("6-10 of 12 items"));
        assert!(html.contains("2 of 3 pages"));
        assert!(html.contains("value=\"15\""));
        assert!(html.contains("Next page"));
    }
}
