pub mod check;
pub mod grade;
pub mod init;
pub mod list;
pub mod take;
pub mod validate;
