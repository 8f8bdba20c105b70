pub mod ajax;
pub mod pages;
