//! Member detail page: one member's fields in a labeled table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two loads run after hydration: the member record (refetched whenever the
//! route id or the viewer's role changes) and the link-type set (once per
//! mount). `MemberDetailState::view` decides which single panel renders.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::status_panel::{AlertPanel, AlertTone, LoadingPanel};
use crate::routes::MEMBER_LIST_ROUTE;
use crate::state::auth::AuthState;
use crate::state::member_detail::{DetailView, MemberDetailState};

/// Member detail page for `/detail/:id`.
#[component]
pub fn MemberDetailPage(#[prop(into)] auth: Signal<AuthState>) -> impl IntoView {
    let params = use_params_map();
    let member_id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));
    let role = Memo::new(move |_| auth.with(|a| a.role.clone()));
    let state = RwSignal::new(MemberDetailState::default());
    let navigate = use_navigate();

    #[cfg(feature = "hydrate")]
    {
        use crate::net::api::ApiClient;
        use crate::state::member_detail::MemberCompletion;

        let client = ApiClient::for_session(&auth.get_untracked());
        leptos::task::spawn_local(async move {
            let result = client.fetch_link_types().await;
            if let Err(e) = &result {
                leptos::logging::error!("link type fetch failed: {e}");
            }
            state.update(|s| s.apply_link_types_result(result));
        });

        Effect::new(move || {
            let id = member_id.get();
            let role = role.get();
            let client = ApiClient::for_session(&auth.get_untracked());
            let Some(ticket) = state.try_update(MemberDetailState::begin_member_fetch) else {
                return;
            };
            leptos::task::spawn_local(async move {
                let result = client.fetch_member(&id, &role).await;
                if let Err(e) = &result {
                    leptos::logging::error!("member detail fetch failed for {id}: {e}");
                }
                let applied = state.try_update(|s| s.apply_member_result(ticket, result));
                match MemberCompletion::from_update(applied) {
                    MemberCompletion::Applied => {}
                    MemberCompletion::Stale => leptos::logging::warn!(
                        "dropped stale member detail result for {id} (generation {})",
                        ticket.value()
                    ),
                    MemberCompletion::Unmounted => leptos::logging::log!(
                        "member detail page unmounted before result for {id} arrived"
                    ),
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (member_id, role);
    }

    let back_to_list = move || {
        let navigate = navigate.clone();
        view! {
            <button
                class="btn btn--primary"
                on:click=move |_| navigate(MEMBER_LIST_ROUTE, NavigateOptions::default())
            >
                "Retour à la liste des membres"
            </button>
        }
    };

    view! {
        <div class="member-detail-page">
            {move || {
                let current = state.with(MemberDetailState::view);
                let message = current.message().unwrap_or_default();
                match current {
                    DetailView::LoadingMember | DetailView::LoadingLinkTypes => {
                        view! { <LoadingPanel message=message/> }.into_any()
                    }
                    DetailView::MemberError => {
                        let back = back_to_list();
                        view! { <AlertPanel message=message>{back}</AlertPanel> }.into_any()
                    }
                    DetailView::NotFound => {
                        let back = back_to_list();
                        view! {
                            <AlertPanel message=message tone=AlertTone::Warning>
                                {back}
                            </AlertPanel>
                        }
                            .into_any()
                    }
                    DetailView::LinkTypesError => view! { <AlertPanel message=message/> }.into_any(),
                    DetailView::Ready(rows) => {
                        view! {
                            <div class="member-detail-page__content">
                                <h2>"Détails du membre"</h2>
                                <table class="member-table member-table--detail">
                                    <tbody>
                                        {rows
                                            .into_iter()
                                            .map(|row| {
                                                view! {
                                                    <tr>
                                                        <th>{row.label}</th>
                                                        <td>{row.value}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                                <button class="btn btn--primary" on:click=move |_| history_back()>
                                    "Retour"
                                </button>
                            </div>
                        }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}

/// Pop the previous browser history entry.
fn history_back() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.back();
        }
    }
}
