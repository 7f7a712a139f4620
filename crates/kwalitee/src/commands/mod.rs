pub mod completions;
pub mod githooks;
