pub mod data;
pub mod mapper;
pub mod parser;
pub mod validator;
