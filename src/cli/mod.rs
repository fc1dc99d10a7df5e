pub mod credentials;
pub mod errors;
pub mod instructions;
pub mod rest_client;
pub mod sql_file;
pub mod statements;
