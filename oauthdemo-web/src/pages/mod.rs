pub(crate) mod dashboard;
pub(crate) mod sign_in;

pub use dashboard::DashboardPage;
pub use sign_in::SignInPage;
