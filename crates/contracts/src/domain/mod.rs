pub mod common;

pub mod a001_employee;
pub mod a002_department;
pub mod a003_candidate;
pub mod a004_holiday;
pub mod a005_leave;
pub mod a006_job;
pub mod a007_project;
pub mod a008_task;
pub mod a009_payroll;
pub mod a010_attendance;
