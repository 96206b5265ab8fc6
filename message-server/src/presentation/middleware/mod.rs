pub mod cors;
pub mod limits;
pub mod trace;
