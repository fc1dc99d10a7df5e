//! Supabase project credentials, sourced from flags or the process environment
use crate::cli::errors::DeployError;
use std::fmt;
use url::Url;

/// Variables read by `schema-deploy bookings`
pub const BOOKINGS_URL_VAR: &str = "NEXT_PUBLIC_SUPABASE_URL";
pub const BOOKINGS_KEY_VAR: &str = "SUPABASE_SERVICE_ROLE_KEY";

/// Variables read by `schema-deploy schema`
pub const SCHEMA_URL_VAR: &str = "SUPABASE_URL";
pub const SCHEMA_KEY_VAR: &str = "SUPABASE_ANON_KEY";

const HOSTED_DOMAIN: &str = ".supabase.co";

#[derive(Clone, PartialEq)]
pub struct Credentials {
    pub url: Url,
    pub key: String,
}

impl Credentials {
    /// Validates that both values are present. `expected` names the variables
    /// the values were read from and is echoed back in the diagnostic.
    pub fn load(
        url: Option<&str>,
        key: Option<&str>,
        expected: [&str; 2],
    ) -> Result<Credentials, DeployError> {
        let (raw_url, key) = match (present(url), present(key)) {
            (Some(u), Some(k)) => (u, k),
            _ => {
                return Err(DeployError::MissingCredentials {
                    expected: expected.iter().map(|v| v.to_string()).collect(),
                })
            }
        };

        let url = Url::parse(raw_url).map_err(|source| DeployError::InvalidUrl {
            url: raw_url.to_string(),
            source,
        })?;

        Ok(Credentials {
            url,
            key: key.to_string(),
        })
    }

    /// `<ref>` for hosts of the form `<ref>.supabase.co`
    pub fn project_ref(&self) -> Option<&str> {
        self.url
            .host_str()?
            .strip_suffix(HOSTED_DOMAIN)
            .filter(|r| !r.is_empty() && !r.contains('.'))
    }

    /// The REST root, `<url>/rest/v1/`
    pub fn rest_root(&self) -> Url {
        let mut root = self.url.clone();
        let base = root.path().trim_end_matches('/').to_string();
        root.set_path(&format!("{}/rest/v1/", base));
        root.set_query(None);
        root
    }
}

// keeps the key out of logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("url", &self.url.as_str())
            .field("key", &"<redacted>")
            .finish()
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
