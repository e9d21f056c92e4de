pub mod crypto;
pub mod jwt;
pub mod memory;
pub mod seed;
