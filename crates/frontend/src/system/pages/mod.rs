pub mod home;
pub mod login;
pub mod signup;

pub use home::HomePage;
pub use login::LoginPage;
pub use signup::SignupPage;
