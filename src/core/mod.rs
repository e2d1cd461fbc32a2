pub mod flyover;

pub use crate::domain::model::{Coordinates, IpAddress, PassList, PassWindow};
pub use crate::domain::ports::{ConfigProvider, GeolocationResolver, IpResolver, PassPredictor};
pub use crate::utils::error::Result;
