pub mod common;
pub mod convert;
pub mod map;
pub mod profiles;
pub mod random;
pub mod smooth;
