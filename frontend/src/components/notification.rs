use crate::state::notifications::{Notification, NotificationCenter};
use leptos::*;

#[component]
pub fn NotificationStack(center: NotificationCenter) -> impl IntoView {
    let entries = center.entries();

    view! {
        <div class="space-y-2" aria-live="polite">
            <For
                each=move || entries.get()
                key=|notification| notification.id
                children=move |notification: Notification| {
                    let id = notification.id;
                    view! {
                        <div
                            class=format!("border px-4 py-3 rounded flex items-start gap-3 {}", notification.kind.classes())
                            role="alert"
                        >
                            <i class=format!("fas {} mt-0.5", notification.kind.icon())></i>
                            <div class="flex-1">
                                <p class="text-sm font-semibold">{notification.title.clone()}</p>
                                <p class="text-sm">{notification.message.clone()}</p>
                            </div>
                            <button
                                type="button"
                                class="text-sm opacity-75 hover:opacity-100"
                                aria-label="Dismiss notification"
                                on:click=move |_| center.dismiss(id)
                            >
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
