/// Produces random strings from a set of allowed characters.
pub mod random_string;
/// Character class generators and the composite generator that merges them into one password
/// with at least one character from every class.
pub mod password_generator;
/// The settings that generators are configured from.
pub mod settings;

pub mod error;

pub use error::{Error, Result};
pub use password_generator::{CharClass, ClassGenerator, CompositeGenerator, PasswordGenerator};
pub use settings::Settings;
