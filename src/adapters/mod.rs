// Adapters layer: concrete implementations of the domain ports over HTTP.

pub mod geoip;
pub mod http;
pub mod ip_echo;
pub mod iss_pass;

pub use geoip::GeoIpResolver;
pub use http::JsonHttpClient;
pub use ip_echo::IpEchoResolver;
pub use iss_pass::IssPassPredictor;
