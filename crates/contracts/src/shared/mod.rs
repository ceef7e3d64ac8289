pub mod postcode;
pub mod storage_keys;
pub mod validation;
