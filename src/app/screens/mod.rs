//! The four pages of the application.

mod game;
mod home;
mod login;
mod profile;

pub use game::GameScreen;
pub use home::HomeScreen;
pub use login::LoginScreen;
pub use profile::ProfileScreen;
