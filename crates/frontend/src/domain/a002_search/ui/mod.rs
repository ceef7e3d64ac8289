pub mod composer;
pub mod home;
pub mod results;
