pub mod config;
pub mod employee;
pub mod log;
pub mod report;
pub mod repository;
pub mod validator;
