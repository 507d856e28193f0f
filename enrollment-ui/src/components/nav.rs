//! Navigation Component
//!
//! Sidebar with one link per page and the info box.

use leptos::*;
use leptos_router::*;

use crate::state::global::{AppInfo, GlobalState};

/// Navigation sidebar component
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let info_state = state.clone();

    view! {
        <aside class="w-full md:w-64 bg-gray-800 border-r border-gray-700 p-4 space-y-6">
            <h2 class="text-lg font-semibold">"Navigation"</h2>

            <nav class="flex flex-col space-y-1">
                {move || {
                    nav_links(&state.app_info_or_default()).into_iter().map(|(href, label)| view! {
                        <NavLink href=href label=label />
                    }).collect_view()
                }}
            </nav>

            <div class="bg-blue-900/40 border border-blue-700 text-blue-100 rounded-lg p-3 text-sm">
                {move || info_state.app_info_or_default().sidebar_info}
            </div>
        </aside>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    #[prop(into)]
    href: String,
    #[prop(into)]
    label: String,
) -> impl IntoView {
    view! {
        <A
            href=href
            exact=true
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}

/// `(route, label)` for each sidebar link, in page order
pub fn nav_links(info: &AppInfo) -> Vec<(String, String)> {
    info.pages
        .iter()
        .map(|page| (page.route.clone(), page.label.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_follow_page_order() {
        let links = nav_links(&AppInfo::default());
        assert_eq!(links.len(), 4);
        assert_eq!(links[0], ("/".to_string(), "Dashboard".to_string()));
        assert_eq!(links[3], ("/about".to_string(), "About".to_string()));
    }
}
