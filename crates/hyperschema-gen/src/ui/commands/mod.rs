pub mod generate;
pub mod schema;

pub use generate::{GenerateConfig, generate_code};
pub use schema::print_schema;
