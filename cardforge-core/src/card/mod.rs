pub mod assemble;
pub mod config;
pub mod qr;
