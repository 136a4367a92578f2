use crate::components::common::{Button, ButtonVariant};
use leptos::*;

#[component]
pub fn UserActions(
    #[prop(into)] can_modify: Signal<bool>,
    #[prop(into)] can_deactivate: Signal<bool>,
    #[prop(into)] deactivating: Signal<bool>,
    #[prop(into)] selected_count: Signal<usize>,
    on_modify: Callback<()>,
    on_deactivate: Callback<()>,
    on_add: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap items-center gap-3">
            <Button
                variant=ButtonVariant::Secondary
                disabled=Signal::derive(move || !can_modify.get())
                on:click=move |_| on_modify.call(())
            >
                "Modify"
            </Button>
            <Button
                variant=ButtonVariant::Danger
                disabled=Signal::derive(move || !can_deactivate.get())
                loading=deactivating
                on:click=move |_| on_deactivate.call(())
            >
                "Deactivate"
            </Button>
            <Button variant=ButtonVariant::Primary on:click=move |_| on_add.call(())>
                "Add"
            </Button>
            <Show when=move || { selected_count.get() > 0 }>
                <span class="text-sm text-fg-muted">
                    {move || format!("{} selected", selected_count.get())}
                </span>
            </Show>
        </div>
    }
}
