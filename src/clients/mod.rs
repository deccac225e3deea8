pub mod omdb_client;

pub use omdb_client::OmdbClient;
