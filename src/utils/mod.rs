// Shared helper utilities

pub mod date;
