pub const API_URL: &str = "https://prod.backend.prop.house/graphql";
pub const LINK_BASE_URL: &str = "https://prop.house";
pub const USER_AGENT: &str = concat!("hot-props/", env!("CARGO_PKG_VERSION"));
