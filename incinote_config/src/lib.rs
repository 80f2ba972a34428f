mod schema;

pub use schema::{Config, GenerateConfig};
