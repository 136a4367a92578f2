use crate::{
    components::common::{Button, ButtonVariant},
    pages::unified_users::utils::RecordWindow,
};
use leptos::*;

/// Server-side record window: "Showing a - b of c" with previous/next block.
#[component]
pub fn RecordPager(
    #[prop(into)] window: Signal<RecordWindow>,
    #[prop(into)] loading: Signal<bool>,
    on_previous: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 text-sm text-fg-muted">
            <span>{move || window.get().label()}</span>
            <Button
                variant=ButtonVariant::Ghost
                label="Previous records"
                disabled=Signal::derive(move || loading.get() || !window.get().has_previous())
                on:click=move |_| on_previous.call(())
            >
                <i class="fas fa-arrow-left"></i>
            </Button>
            <Button
                variant=ButtonVariant::Ghost
                label="Next records"
                disabled=Signal::derive(move || loading.get() || !window.get().has_next())
                on:click=move |_| on_next.call(())
            >
                <i class="fas fa-arrow-right"></i>
            </Button>
        </div>
    }
}
