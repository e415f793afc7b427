pub mod greeting;
pub mod notice;
pub mod session;

pub use greeting::{GreetingKind, GreetingRequest};
pub use notice::LoginNotice;
pub use session::{Session, UserResponse};
