pub mod a001_taxonomy;
pub mod a002_search;
pub mod a003_registration;
pub mod a004_profile;
