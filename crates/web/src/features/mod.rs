pub mod auth;
pub mod children;
pub mod competitions;
pub mod groups;
