pub mod handler;
pub mod prompt;

pub use handler::handle_key;
