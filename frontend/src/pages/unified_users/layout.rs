use leptos::*;

pub const PAGE_TITLE: &str = "Unified System User Browser";

#[component]
pub fn UnifiedUsersFrame(children: Children) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-fg">{PAGE_TITLE}</h1>
                <p class="mt-1 text-sm text-fg-muted">
                    "Select a user to modify, or select one or more users to deactivate."
                </p>
            </div>
            {children()}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn frame_renders_heading_and_children() {
        let html = render_to_string(move || {
            view! {
                <UnifiedUsersFrame>
                    <div>{"child"}</div>
                </UnifiedUsersFrame>
            }
        });
        assert!(html.contains(PAGE_TITLE));
        assert!(html.contains("deactivate"));
        assert!(html.contains("child"));
    }
}
