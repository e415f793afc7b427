use shared::models::{GreetingKind, LoginNotice};
use shared::view::{ViewError, ViewModel};
use yewdux::Store;

/// Global store: the view state machine plus the sign-in notice read from the URL.
#[derive(Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub view: ViewModel,
    pub notice: Option<LoginNotice>,
}

impl AppState {
    /// Marks a greeting as in flight. The caller already holds the ticket.
    pub fn begin_send(&mut self, kind: GreetingKind) -> Result<(), ViewError> {
        self.view.begin_greeting(kind).map(|_| ())
    }
}
