use shared::models::LoginNotice;
use yew::{Callback, Html, MouseEvent, Properties, function_component, html};

#[derive(Properties, PartialEq, Clone)]
pub struct SignInPageProps {
    pub on_login: Callback<()>,
    #[prop_or_default]
    pub notice: Option<LoginNotice>,
}

/// Anonymous view: prompt to start the Google sign-in.
#[function_component(SignInPage)]
pub fn sign_in_page(props: &SignInPageProps) -> Html {
    let onclick = {
        let on_login = props.on_login.clone();
        Callback::from(move |_: MouseEvent| on_login.emit(()))
    };

    html! {
        <div class="card">
            if let Some(notice) = &props.notice {
                <div class="error">{ notice.to_string() }</div>
            }
            <p>{"You are not logged in."}</p>
            <button {onclick} class="btn-primary">{"Sign in with Google"}</button>
        </div>
    }
}
