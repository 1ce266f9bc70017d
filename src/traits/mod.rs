pub mod processor;

pub use processor::DataProcessor;
