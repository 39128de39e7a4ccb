//! Member list page: every registry member in one table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches `/user/member/tous` once per mount after hydration. The sex filter
//! narrows the fetched rows client-side and never refetches. Row actions
//! navigate to the detail route, plus the edit route for admins.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::status_panel::{AlertPanel, LoadingPanel};
use crate::routes::HOME_ROUTE;
use crate::state::auth::AuthState;
use crate::state::member_list::{COLUMNS, MemberListState, MemberRow, NO_DATA_MESSAGE, SexFilter, visible_rows};

/// Member list page.
#[component]
pub fn MemberListPage(#[prop(into)] auth: Signal<AuthState>) -> impl IntoView {
    let state = RwSignal::new(MemberListState::Loading);
    let filter = RwSignal::new(SexFilter::All);
    let navigate = use_navigate();

    #[cfg(feature = "hydrate")]
    {
        let client = crate::net::api::ApiClient::for_session(&auth.get_untracked());
        leptos::task::spawn_local(async move {
            let result = client.fetch_members().await;
            if let Err(e) = &result {
                leptos::logging::error!("member list fetch failed: {e}");
            }
            state.set(MemberListState::from_result(result));
        });
    }

    let navigate_home = navigate.clone();
    let rows = Memo::new(move |_| {
        let role = auth.with(|a| a.role.clone());
        state.with(|s| visible_rows(s, filter.get(), &role))
    });

    view! {
        <div class="member-list-page">
            <h1 class="member-list-page__title">"Liste des membres de la famille"</h1>
            {move || match state.get() {
                MemberListState::Loading => view! { <LoadingPanel/> }.into_any(),
                MemberListState::Error | MemberListState::Empty => {
                    let message = state.with(MemberListState::message).unwrap_or_default();
                    view! { <AlertPanel message=message/> }.into_any()
                }
                MemberListState::Ready(_) => {
                    let navigate = navigate.clone();
                    view! {
                        <div class="member-list-page__content">
                            <SexFilterSelect filter=filter/>
                            <table class="member-table">
                                <thead>
                                    <tr>
                                        {COLUMNS.iter().map(|name| view! { <th>{*name}</th> }).collect_view()}
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || {
                                        let current = rows.get();
                                        if current.is_empty() {
                                            return view! {
                                                <tr>
                                                    <td class="member-table__empty" colspan=COLUMNS.len().to_string()>
                                                        {NO_DATA_MESSAGE}
                                                    </td>
                                                </tr>
                                            }
                                                .into_any();
                                        }
                                        current
                                            .into_iter()
                                            .map(|row| member_row_view(row, navigate.clone()))
                                            .collect_view()
                                            .into_any()
                                    }}
                                </tbody>
                            </table>
                        </div>
                    }
                        .into_any()
                }
            }}
            <button
                class="btn btn--secondary member-list-page__home"
                on:click=move |_| navigate_home(HOME_ROUTE, NavigateOptions::default())
            >
                "Retour à l'accueil"
            </button>
        </div>
    }
}

/// Sex filter `<select>` bound to `filter`.
#[component]
fn SexFilterSelect(filter: RwSignal<SexFilter>) -> impl IntoView {
    view! {
        <label class="member-list-page__filter">
            "Sexe"
            <select
                prop:value=move || filter.get().value()
                on:change=move |ev| filter.set(SexFilter::from_value(&event_target_value(&ev)))
            >
                {SexFilter::OPTIONS
                    .into_iter()
                    .map(|option| view! { <option value=option.value()>{option.label()}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}

fn member_row_view<F>(row: MemberRow, navigate: F) -> impl IntoView
where
    F: Fn(&str, NavigateOptions) + Clone + Send + 'static,
{
    let MemberRow { id, cells, actions } = row;
    view! {
        <tr>
            {cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
            <td class="member-table__actions">
                {actions
                    .into_iter()
                    .map(|action| {
                        let route = action.route(&id);
                        let navigate = navigate.clone();
                        view! {
                            <button
                                class="btn btn--small"
                                on:click=move |_| navigate(&route, NavigateOptions::default())
                            >
                                {action.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </td>
        </tr>
    }
}
