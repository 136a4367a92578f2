use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: &'static str,
    pub href: &'static str,
}

pub const ADMIN_BREADCRUMBS: &[Crumb] = &[
    Crumb {
        label: "Home",
        href: "/",
    },
    Crumb {
        label: "Admin Management",
        href: "/MasterListsPage",
    },
];

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center">
                        <h1 class="text-xl font-semibold text-fg">
                            "LIMS Administration"
                        </h1>
                    </div>
                    <nav class="flex space-x-4">
                        <a href="/MasterListsPage" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                            "Admin Management"
                        </a>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Breadcrumbs(crumbs: &'static [Crumb]) -> impl IntoView {
    view! {
        <nav aria-label="Breadcrumb" class="text-sm text-fg-muted mb-4">
            <ol class="flex items-center gap-2">
                {crumbs
                    .iter()
                    .map(|crumb| {
                        view! {
                            <li class="flex items-center gap-2">
                                <a href=crumb.href class="hover:text-fg hover:underline">{crumb.label}</a>
                                <span aria-hidden="true">"/"</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </nav>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                <Breadcrumbs crumbs=ADMIN_BREADCRUMBS/>
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8" role="status" aria-label="Loading">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-exclamation-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}
