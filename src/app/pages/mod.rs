//! Page components.

mod about;
mod contact;
mod home;
mod projects;

pub use about::About;
pub use contact::Contact;
pub use home::Home;
pub use projects::Projects;
