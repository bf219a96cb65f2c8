pub mod check;
pub mod fix;
