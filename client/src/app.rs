//! Root application component with routing and the session prop.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{member_detail::MemberDetailPage, member_list::MemberListPage};
use crate::util::session::load_session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
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
/// Owns the viewer session and passes it to each page explicitly. Both pages
/// start in a loading state, so the anonymous server render and the hydrated
/// session render the same markup.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(load_session());

    view! {
        <Stylesheet id="leptos" href="/pkg/famille-registry.css"/>
        <Title text="Registre familial"/>

        <Router>
            <Routes fallback=|| "Page introuvable.".into_view()>
                <Route path=StaticSegment("") view=move || view! { <MemberListPage auth=auth/> }/>
                <Route path=StaticSegment("members-list") view=move || view! { <MemberListPage auth=auth/> }/>
                <Route
                    path=(StaticSegment("detail"), ParamSegment("id"))
                    view=move || view! { <MemberDetailPage auth=auth/> }
                />
            </Routes>
        </Router>
    }
}
