pub mod variables;

pub use variables::{load_variables, variables_from_json, variables_from_yaml};
