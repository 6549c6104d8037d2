//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::{ToastNotifier, Toaster};
use crate::config::DemoTimings;
use crate::content::landing::PRODUCT_NAME;
use crate::pages::{
    about::AboutPage,
    case::CasePage,
    dashboard::DashboardPage,
    features::FeaturesPage,
    home::HomePage,
    placeholder::{ComingSoonPage, NotFoundPage},
    signin::SignInPage,
};
use crate::state::auth::{DemoAuthenticator, SharedAuthenticator};
use crate::state::ui::UiState;
use crate::util::viewport;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared capabilities (notifier, timings, authenticator,
/// viewport) and sets up client-side routing. Page state is not shared.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let timings = DemoTimings::default();
    let ui = RwSignal::new(UiState::default());
    let authenticator: SharedAuthenticator = Arc::new(DemoAuthenticator);

    provide_context(timings);
    provide_context(ui);
    provide_context(ToastNotifier::new(timings.toast_duration));
    provide_context(authenticator);

    viewport::track(ui);

    view! {
        <Title text=PRODUCT_NAME/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("features") view=FeaturesPage/>
                <Route path=StaticSegment("about") view=AboutPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("signin") view=SignInPage/>
                <Route path=(StaticSegment("case"), ParamSegment("caseId")) view=CasePage/>
                <Route path=StaticSegment("pricing") view=ComingSoonPage/>
                <Route path=StaticSegment("security") view=ComingSoonPage/>
                <Route path=StaticSegment("roadmap") view=ComingSoonPage/>
                <Route path=StaticSegment("contact") view=ComingSoonPage/>
                <Route path=StaticSegment("privacy") view=ComingSoonPage/>
                <Route path=StaticSegment("terms") view=ComingSoonPage/>
                <Route path=StaticSegment("forgot-password") view=ComingSoonPage/>
                <Route path=StaticSegment("signup") view=ComingSoonPage/>
            </Routes>
        </Router>
        <Toaster/>
    }
}
