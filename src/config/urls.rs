//! Upstream hosts, repositories, and pinned versions

/// GitHub raw content host
pub const GITHUB_RAW: &str = "https://raw.githubusercontent.com";

/// Mongoose repository path on the raw host
pub const MONGOOSE_REPO: &str = "cesanta/mongoose";

/// Pinned Mongoose release
pub const MONGOOSE_VERSION: &str = "7.17";

/// Doxygen Awesome repository path on the raw host
pub const DOXYGEN_AWESOME_REPO: &str = "jothepro/doxygen-awesome-css";

/// Pinned Doxygen Awesome release tag
pub const DOXYGEN_AWESOME_VERSION: &str = "v2.3.3";
