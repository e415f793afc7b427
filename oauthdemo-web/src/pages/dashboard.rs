use shared::models::{GreetingKind, Session};
use shared::view::ViewModel;
use yew::{Callback, Html, Properties, function_component, html};

use crate::components::{GreetingPanel, ProfileCard};

#[derive(Properties, PartialEq, Clone)]
pub struct DashboardPageProps {
    pub session: Session,
    pub view: ViewModel,
    pub on_logout: Callback<()>,
    pub on_send: Callback<GreetingKind>,
    pub on_draft_change: Callback<String>,
}

/// Authenticated view: profile, both greeting endpoints, and the last error.
#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let send = |kind: GreetingKind| {
        let on_send = props.on_send.clone();
        Callback::from(move |()| on_send.emit(kind))
    };

    html! {
        <>
            <ProfileCard session={props.session.clone()} on_logout={props.on_logout.clone()} />
            <GreetingPanel
                kind={GreetingKind::Get}
                result={props.view.greeting(GreetingKind::Get).cloned()}
                on_send={send(GreetingKind::Get)}
            />
            <GreetingPanel
                kind={GreetingKind::Post}
                result={props.view.greeting(GreetingKind::Post).cloned()}
                on_send={send(GreetingKind::Post)}
                draft={props.view.draft().to_string()}
                on_draft_change={props.on_draft_change.clone()}
            />
            if let Some(error) = props.view.error() {
                <div class="error">{ error.to_string() }</div>
            }
        </>
    }
}
