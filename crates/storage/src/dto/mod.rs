pub mod auth;
pub mod child;
pub mod coach;
pub mod competition;
pub mod group;
pub mod result;
