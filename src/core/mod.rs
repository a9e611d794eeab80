pub mod paths;
pub mod asset_protocol;
