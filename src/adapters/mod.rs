// Adapters layer: concrete clients for the remote logo providers.

pub mod brandfetch;
pub mod clearbit;

pub use brandfetch::BrandfetchSource;
pub use clearbit::ClearbitSource;
