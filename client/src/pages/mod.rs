pub mod about;
pub mod case;
pub mod dashboard;
pub mod features;
pub mod home;
pub mod placeholder;
pub mod signin;
