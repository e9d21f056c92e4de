pub mod hs256_token_repository;

pub use hs256_token_repository::Hs256TokenRepository;
