//! Terminal application layer: screens, controller, and session context.

mod context;
mod controller;
mod effects;
mod modal;
mod screen;
mod screens;
mod settings;

pub use context::SessionContext;
pub use controller::AppController;
pub use effects::ParticleField;
pub use modal::{Modal, ModalKind};
pub use screen::{LoginProvider, Screen, ScreenTransition};
pub use screens::{GameScreen, HomeScreen, LoginScreen, ProfileScreen};
pub use settings::{AppSettings, ConfigError};
