pub mod banner;
pub mod calculator;
pub mod chat;
pub mod factors;
pub mod pages;
