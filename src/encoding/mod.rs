pub mod encoder;
pub mod types;

pub use encoder::{encode, FeatureRecord};
pub use types::{Brand, Fuel, Owner, SellerType, Transmission};
