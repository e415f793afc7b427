mod api;
mod app;
mod browser;
mod components;
mod config;
mod models;
mod pages;


use app::App;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(Root)]
fn root() -> Html {
    html! {
        <YewduxRoot>
            <App />
        </YewduxRoot>
    }
}

fn main() {
    // Disable truncation of panic payloads to debug any panics
    std::panic::set_hook(Box::new(|info| {
        if let Some(s) = info.payload().downcast_ref::<String>() {
            browser::log_error(&format!("Panic: {s}"));
        } else if let Some(s) = info.payload().downcast_ref::<&str>() {
            browser::log_error(&format!("Panic: {s}"));
        } else {
            browser::log_error("Unknown panic");
        }
        if let Some(location) = info.location() {
            browser::log_error(&format!(
                "  at {}:{}:{}",
                location.file(),
                location.line(),
                location.column()
            ));
        }
    }));

    browser::log("Starting OAuth2 demo");

    Renderer::<Root>::new().render();
}
