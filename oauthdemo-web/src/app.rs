use crate::api::DemoClient;
use crate::browser::{self, BrowserNavigator};
use crate::components::Loading;
use crate::config::FrontendConfig;
use crate::models::app_state::AppState;
use crate::pages::{DashboardPage, SignInPage};
use shared::models::{GreetingKind, LoginNotice};
use shared::view::{Navigator, ViewState};
use wasm_bindgen_futures::spawn_local;
use yew::{Callback, Html, function_component, html, use_effect_with, use_memo};
use yewdux::prelude::use_store;

#[function_component(App)]
pub fn app() -> Html {
    let (state, dispatch) = use_store::<AppState>();
    let client = use_memo((), |_| DemoClient::from_config(&FrontendConfig::new()));

    {
        let client = client.clone();
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            let notice = LoginNotice::from_query(&browser::page_query());
            dispatch.reduce_mut(move |state| {
                state.notice = notice;
            });

            let client = (*client).clone();
            spawn_local(async move {
                let outcome = client.fetch_session().await;
                dispatch.reduce_mut(move |state| {
                    state.view.apply_session(outcome);
                });
            });
            || ()
        });
    }

    let on_login = {
        let client = client.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |()| {
            match dispatch.get().view.login_target(client.endpoints()) {
                Ok(url) => BrowserNavigator.navigate(&url),
                Err(err) => browser::log_error(&err.to_string()),
            }
        })
    };

    let on_logout = {
        let client = client.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |()| {
            match dispatch.get().view.logout_target(client.endpoints()) {
                Ok(url) => BrowserNavigator.navigate(&url),
                Err(err) => browser::log_error(&err.to_string()),
            }
        })
    };

    let on_draft_change = {
        let dispatch = dispatch.clone();
        Callback::from(move |text: String| {
            dispatch.reduce_mut(move |state| {
                if let Err(err) = state.view.set_draft(text) {
                    browser::log_error(&err.to_string());
                }
            });
        })
    };

    let on_send = {
        let client = client.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |kind: GreetingKind| {
            let current = dispatch.get();
            let ticket = match current.view.ticket(kind) {
                Ok(ticket) => ticket,
                Err(err) => {
                    browser::log_error(&err.to_string());
                    return;
                }
            };
            let draft = current.view.draft().to_string();
            dispatch.reduce_mut(move |state| {
                if let Err(err) = state.begin_send(kind) {
                    browser::log_error(&err.to_string());
                }
            });

            let client = (*client).clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                let outcome = match kind {
                    GreetingKind::Get => client.fetch_greeting().await,
                    GreetingKind::Post => client.submit_greeting(&draft).await,
                };
                dispatch.reduce_mut(move |state| {
                    state.view.finish_greeting(ticket, outcome);
                });
            });
        })
    };

    let body = match (state.view.view_state(), state.view.session()) {
        (ViewState::Resolving, _) => return html! { <Loading /> },
        (ViewState::Authenticated, Some(session)) => html! {
            <DashboardPage
                session={session.clone()}
                view={state.view.clone()}
                {on_logout}
                {on_send}
                {on_draft_change}
            />
        },
        _ => html! {
            <SignInPage {on_login} notice={state.notice.clone()} />
        },
    };

    html! {
        <div class="app">
            <h1>{"Google OAuth2 Demo"}</h1>
            { body }
        </div>
    }
}
