//! Preparation plan
//!
//! The immutable configuration passed into the pipeline at start. It
//! enumerates every resource descriptor (host, repository, pinned version,
//! filename, destination, patch rule) and the schema compilation job, so
//! nothing about a run depends on scattered module-level state.

use std::path::{Path, PathBuf};

use crate::config::urls;
use crate::core::patch::PatchRule;
use crate::core::schema::SchemaJob;

/// Inline Mongoose configuration substituted for the local
/// `mongoose_config.h` include in the vendored sources. Selects the
/// network-stack architecture per Arduino target.
const MONGOOSE_CONFIG: &str = r#"
#  if defined(ARDUINO)
#    if defined(ESP8266)
#      include <errno.h>
#      include <stdarg.h>
#      include <stddef.h>
#      include <stdint.h>
#      include <stdbool.h>
#      include <time.h>
#      include <stdio.h>
#      include <stdlib.h>
#      include <string.h>
#      define MG_ARCH MG_ARCH_CUSTOM
#      define MG_ENABLE_FILESYSTEM 0
#      define MG_ENABLE_SOCKET 0
#      define MG_ENABLE_TCPIP 1
#      define MG_ENABLE_SSI 0
#    elif defined(ESP32)
#      define MG_ARCH MG_ARCH_ESP32
#      define MG_ENABLE_SSI 0
#    elif defined(PICO_BOARD)
#      define MG_ARCH MG_ARCH_PICOSDK
#      define MG_ENABLE_DRIVER_W5500 1
#      define MG_ENABLE_SOCKET 0
#      define MG_ENABLE_TCPIP 1
#      define MG_ENABLE_SSI 0
#      define MG_IO_SIZE 512
#    else
#      define MG_ARCH MG_ARCH_CUSTOM
#      define MG_ENABLE_DRIVER_W5500 1
#      define MG_ENABLE_SOCKET 0
#      define MG_ENABLE_TCPIP 1
#      define MG_ENABLE_SSI 0
#      define MG_IO_SIZE 128
#    endif
#  else
#    error("Only the Arduino platform is supported!")
#  endif
"#;

/// Replacement value for the documentation theme's content width.
const DOXYGEN_CONTENT_MAXWIDTH: (&str, &str) =
    ("--content-maxwidth: 1050px;", "--content-maxwidth: 1250px;");

/// One remote resource: its filename on the host, the local destination,
/// and the patch applied between fetch and persist.
#[derive(Debug, Clone)]
pub struct ResourceSpec {
    /// Filename under the versioned repository path
    pub filename: String,
    /// Destination path, relative to the project root at plan build time
    pub dest: PathBuf,
    /// Patch rule applied to the fetched body
    pub rule: PatchRule,
}

/// A named group of related remote resources sharing a host, repository,
/// and pinned version.
#[derive(Debug, Clone)]
pub struct AssetFamily {
    /// Family name used for selection and reporting
    pub name: String,
    /// Base host, e.g. `https://raw.githubusercontent.com`
    pub host: String,
    /// `owner/repo` path on the host
    pub repo_path: String,
    /// Pinned version segment of the URL
    pub version: String,
    /// Resources fetched for this family, in order
    pub resources: Vec<ResourceSpec>,
}

impl AssetFamily {
    /// Request URL for one of this family's files.
    pub fn url_for(&self, filename: &str) -> String {
        format!(
            "{}/{}/{}/{filename}",
            self.host, self.repo_path, self.version
        )
    }
}

/// Complete configuration for one preparation run.
#[derive(Debug, Clone)]
pub struct PreparePlan {
    /// Schema compilation job, run before any fetch
    pub schema: SchemaJob,
    /// Asset families, fetched in order after the schema step
    pub families: Vec<AssetFamily>,
}

impl PreparePlan {
    /// The standard plan: schema embedding, the vendored network stack,
    /// and the documentation theme, rooted at `root`.
    pub fn standard(root: &Path) -> Self {
        Self::with_host(root, urls::GITHUB_RAW)
    }

    /// Standard plan with every family's host replaced by `host`.
    /// Used for mirrors of the upstream raw-content host.
    pub fn with_host(root: &Path, host: &str) -> Self {
        let mongoose_rule =
            PatchRule::include_substitute("mongoose_config.h", MONGOOSE_CONFIG);

        Self {
            schema: SchemaJob {
                input: root.join("src/schema/nyx.xsd"),
                output: root.join("src/nyx_node_schema.h"),
                source_name: "nyx.xsd".to_string(),
                size_constant: "NYX_NODE_XSD_SIZE".to_string(),
                array_name: "nyx_node_xsd_buff".to_string(),
            },
            families: vec![
                AssetFamily {
                    name: "mongoose".to_string(),
                    host: host.to_string(),
                    repo_path: urls::MONGOOSE_REPO.to_string(),
                    version: urls::MONGOOSE_VERSION.to_string(),
                    resources: vec![
                        ResourceSpec {
                            filename: "mongoose.c".to_string(),
                            dest: root.join("src/stack/mongoose.c"),
                            rule: mongoose_rule.clone(),
                        },
                        ResourceSpec {
                            filename: "mongoose.h".to_string(),
                            dest: root.join("src/stack/mongoose.h"),
                            rule: mongoose_rule,
                        },
                    ],
                },
                AssetFamily {
                    name: "doxygen-awesome".to_string(),
                    host: host.to_string(),
                    repo_path: urls::DOXYGEN_AWESOME_REPO.to_string(),
                    version: urls::DOXYGEN_AWESOME_VERSION.to_string(),
                    resources: vec![
                        ResourceSpec {
                            filename: "doxygen-awesome.css".to_string(),
                            dest: root.join(".doxygen/doxygen-awesome.css"),
                            rule: PatchRule::LiteralSubstitute {
                                from: DOXYGEN_CONTENT_MAXWIDTH.0.to_string(),
                                to: DOXYGEN_CONTENT_MAXWIDTH.1.to_string(),
                            },
                        },
                        ResourceSpec {
                            filename: "doxygen-awesome-darkmode-toggle.js".to_string(),
                            dest: root.join(".doxygen/doxygen-awesome-darkmode-toggle.js"),
                            rule: PatchRule::Identity,
                        },
                    ],
                },
            ],
        }
    }

    /// Look up a family by name.
    pub fn family(&self, name: &str) -> Option<&AssetFamily> {
        self.families.iter().find(|f| f.name == name)
    }
}
