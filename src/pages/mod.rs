pub mod about;
pub mod admin;
pub mod contact;
pub mod home;
pub mod imprint;
pub mod privacy;
