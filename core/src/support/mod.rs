mod last_value;

pub use last_value::LastValue;
