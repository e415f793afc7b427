pub(crate) mod greeting_panel;
pub(crate) mod loading;
pub(crate) mod profile_card;

pub use greeting_panel::GreetingPanel;
pub use loading::Loading;
pub use profile_card::ProfileCard;
