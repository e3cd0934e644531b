pub mod icon;
pub mod tree;
