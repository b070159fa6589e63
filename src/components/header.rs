use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::utils::constants::GITHUB_URL;

#[derive(Clone, PartialEq)]
pub enum NavTarget {
    Internal(Route),
    External(&'static str),
}

#[derive(Clone, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: NavTarget,
}

pub fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem { label: "Overview", target: NavTarget::Internal(Route::Home) },
        NavItem { label: "Pricing", target: NavTarget::Internal(Route::Pricing) },
        NavItem { label: "Github", target: NavTarget::External(GITHUB_URL) },
    ]
}

/// Exact path match, the way the nav highlights the current page
pub fn is_active(current_path: &str, route: &Route) -> bool {
    current_path == route.to_path()
}

#[function_component(Header)]
pub fn header() -> Html {
    let mobile_menu_open = use_state(|| false);
    let current_path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    let toggle_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_: MouseEvent| mobile_menu_open.set(!*mobile_menu_open))
    };

    let close_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_: MouseEvent| mobile_menu_open.set(false))
    };

    let render_item = |item: &NavItem, mobile: bool| -> Html {
        let base = if mobile { "nav-link nav-link-mobile" } else { "nav-link" };
        match &item.target {
            NavTarget::External(href) => html! {
                <a key={item.label} href={*href} target="_blank" rel="noopener noreferrer" class={base}>
                    {item.label}
                </a>
            },
            NavTarget::Internal(route) => {
                let active = is_active(&current_path, route).then_some("active");
                html! {
                    <span key={item.label} onclick={close_menu.clone()}>
                        <Link<Route> to={route.clone()} classes={classes!(base, active)}>
                            {item.label}
                        </Link<Route>>
                    </span>
                }
            }
        }
    };

    let items = nav_items();

    html! {
        <header class="site-header">
            <nav class="site-nav">
                <div class="site-nav-bar">
                    <Link<Route> to={Route::Home} classes="logo">
                        <img class="logo-image" src="/assets/logo.png" alt="Chitram Logo" />
                        <span class="logo-text">{"Chit"}<span class="logo-accent">{"ram"}</span></span>
                    </Link<Route>>

                    <div class="nav-desktop">
                        { for items.iter().map(|item| render_item(item, false)) }
                    </div>

                    <div class="nav-actions">
                        <Link<Route> to={Route::SignIn} classes="btn-ghost">{"Sign In"}</Link<Route>>
                        <Link<Route> to={Route::Videos} classes="btn-primary">{"Get Started"}</Link<Route>>
                    </div>

                    <button class="nav-burger" aria-label="Toggle menu" onclick={toggle_menu}>
                        { if *mobile_menu_open { "✕" } else { "☰" } }
                    </button>
                </div>

                if *mobile_menu_open {
                    <div class="nav-mobile">
                        { for items.iter().map(|item| render_item(item, true)) }
                        <div class="nav-mobile-actions" onclick={close_menu.clone()}>
                            <Link<Route> to={Route::SignIn} classes="btn-outline">{"Sign In"}</Link<Route>>
                            <Link<Route> to={Route::Videos} classes="btn-primary">{"Get Started"}</Link<Route>>
                        </div>
                    </div>
                }
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_item_matches_exact_path() {
        assert!(is_active("/pricing", &Route::Pricing));
        assert!(is_active("/", &Route::Home));
        assert!(!is_active("/pricing/", &Route::Pricing));
        assert!(!is_active("/videos", &Route::Home));
    }

    #[test]
    fn github_link_is_external() {
        let items = nav_items();
        assert_eq!(items.len(), 3);
        assert!(matches!(items[2].target, NavTarget::External(url) if url.contains("github.com")));
    }
}
