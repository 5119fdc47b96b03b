pub mod label_generator;

pub use label_generator::{random_label, LABEL_ALPHABET};
