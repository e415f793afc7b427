use serde_json::Value;
use shared::display::pretty_json;
use shared::models::GreetingKind;
use web_sys::HtmlInputElement;
use yew::{Callback, Html, InputEvent, MouseEvent, Properties, TargetCast, function_component, html};

#[derive(Properties, PartialEq, Clone)]
pub struct GreetingPanelProps {
    pub kind: GreetingKind,
    pub result: Option<Value>,
    pub on_send: Callback<()>,
    /// Draft text; only rendered for `POST`.
    #[prop_or_default]
    pub draft: String,
    #[prop_or_default]
    pub on_draft_change: Callback<String>,
}

/// One card per greeting endpoint: send button, optional message input, last result.
#[function_component(GreetingPanel)]
pub fn greeting_panel(props: &GreetingPanelProps) -> Html {
    let onclick = {
        let on_send = props.on_send.clone();
        Callback::from(move |_: MouseEvent| on_send.emit(()))
    };

    let input = if props.kind == GreetingKind::Post {
        let on_draft_change = props.on_draft_change.clone();
        let oninput = Callback::from(move |event: InputEvent| {
            let target: HtmlInputElement = event.target_unchecked_into();
            on_draft_change.emit(target.value());
        });
        html! {
            <input
                type="text"
                value={props.draft.clone()}
                {oninput}
                placeholder="Enter a message"
            />
        }
    } else {
        html! {}
    };

    let button_label = match props.kind {
        GreetingKind::Get => "Send GET",
        GreetingKind::Post => "Send POST",
    };

    html! {
        <div class="card">
            <h2>{ props.kind.label() }</h2>
            { input }
            <button {onclick} class="btn-primary">{ button_label }</button>
            if let Some(result) = &props.result {
                <pre>{ pretty_json(result) }</pre>
            }
        </div>
    }
}
