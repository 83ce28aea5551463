// Domain layer - Plain data with no I/O
pub mod reading;
