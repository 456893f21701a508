pub mod employee;
pub mod report;
pub mod validation;
