pub mod measure;

pub use measure::{ApproxTextMeasurer, TextMeasurer};
