use shared::models::Session;
use yew::{Callback, Html, MouseEvent, Properties, function_component, html};

#[derive(Properties, PartialEq, Clone)]
pub struct ProfileCardProps {
    pub session: Session,
    pub on_logout: Callback<()>,
}

/// Avatar, name, and email of the signed-in user with a logout button.
#[function_component(ProfileCard)]
pub fn profile_card(props: &ProfileCardProps) -> Html {
    let onclick = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    html! {
        <div class="card user-card">
            <img src={props.session.picture.clone()} alt="avatar" class="avatar" />
            <div>
                <p><strong>{ props.session.name.clone() }</strong></p>
                <p>{ props.session.email.clone() }</p>
            </div>
            <button {onclick} class="btn-secondary">{"Logout"}</button>
        </div>
    }
}
