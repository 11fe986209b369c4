//! Pages
//!
//! One component per `Page`. Each reads its slice from `AppContext` and
//! reports user actions back through its handlers.

mod landing;
mod login;
mod signup;
mod dashboard;
mod add_item;
mod edit_item;
mod item_detail;
mod not_found;
mod session_expired;

pub use landing::LandingPage;
pub use login::LoginPage;
pub use signup::SignupPage;
pub use dashboard::DashboardPage;
pub use add_item::AddItemPage;
pub use edit_item::EditItemPage;
pub use item_detail::ItemDetailPage;
pub use not_found::NotFoundPage;
pub use session_expired::SessionExpiredPage;
