// ============================================================================
// APP - router and the providers shared by every route
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{ModalContextProvider, SessionContextProvider};
use crate::utils::browser;
use crate::views::{LandingView, NotFoundView, PricingView, SignInView, VideoListView};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/pricing")]
    Pricing,
    #[at("/sign-in")]
    SignIn,
    #[at("/videos")]
    Videos,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <LandingView /> },
        Route::Pricing => html! { <PricingView /> },
        Route::SignIn => html! { <SignInView /> },
        Route::Videos => html! { <VideoListView /> },
        Route::NotFound => html! { <NotFoundView /> },
    }
}

#[function_component(ScrollToTop)]
fn scroll_to_top() -> Html {
    let path = use_location().map(|l| l.path().to_string());
    use_effect_with(path, |_| {
        browser::scroll_to_top();
        || ()
    });
    html! {}
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <SessionContextProvider>
                <ModalContextProvider>
                    <ScrollToTop />
                    <Switch<Route> render={switch} />
                </ModalContextProvider>
            </SessionContextProvider>
        </BrowserRouter>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_map_to_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::SignIn.to_path(), "/sign-in");
        assert_eq!(Route::Videos.to_path(), "/videos");
        assert_eq!(Route::recognize("/pricing"), Some(Route::Pricing));
        assert_eq!(Route::recognize("/nope"), Some(Route::NotFound));
    }
}
