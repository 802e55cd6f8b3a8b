pub mod info;
pub mod pages;
pub mod posts;
