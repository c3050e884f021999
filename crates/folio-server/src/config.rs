// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

/// Server behavior knobs. Populated from the environment in `main`;
/// tests construct it directly.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Deployment-mode flag: when false, the admin CRUD surface and the
    /// upload endpoint respond 404 as if absent.
    pub admin_enabled: bool,
    /// Cap on an uploaded logo's bytes. The original configured 5 MiB
    /// without wiring it in; here it is enforced.
    pub max_upload_bytes: usize,
    /// Directory uploaded logos land in, served back under
    /// [`ApiConfig::public_prefix`].
    pub upload_root: PathBuf,
    pub public_prefix: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            admin_enabled: false,
            max_upload_bytes: 5 * 1024 * 1024,
            upload_root: PathBuf::from("public/skills"),
            public_prefix: "/skills".to_string(),
        }
    }
}
