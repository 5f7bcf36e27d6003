//! Message authentication codes

pub mod hmacsha512256;
