pub mod processor;

pub use processor::{process_image, ProcessReport};
