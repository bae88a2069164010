pub mod measurement;
pub mod result;
pub mod theme;

pub use measurement::{Gender, Measurement, RawMeasurement};
pub use result::{BmiResult, Category, StyleTag};
pub use theme::Theme;
