pub mod iex;
pub mod iex_dto;
pub mod sendgrid;
pub mod utils;
