//! Pages
//!
//! One component per route.

mod forgot_password;
mod login;
mod not_found;
mod profile;
mod reset_password;
mod signup;
mod todos;

pub use forgot_password::ForgotPasswordPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
pub use reset_password::ResetPasswordPage;
pub use signup::SignUpPage;
pub use todos::TodosPage;
