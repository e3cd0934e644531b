pub mod buffer;
pub mod export;
pub mod remote;
pub mod surface;
