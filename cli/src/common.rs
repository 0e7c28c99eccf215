pub mod consts;
pub mod log;
