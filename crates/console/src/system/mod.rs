pub mod notifications;
pub mod settings;
