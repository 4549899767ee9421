mod fields;

pub use fields::TimeField;
