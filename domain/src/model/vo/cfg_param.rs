use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One `key=value` argument handed to the CMSSW parameter set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CfgParam {
    pub key: String,
    pub value: String,
}

impl CfgParam {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Boolean parameter, spelled the way the python side parses it
    pub fn flag(key: impl Into<String>, on: bool) -> Self {
        Self::new(key, if on { "True" } else { "False" })
    }
}

impl fmt::Display for CfgParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

impl FromStr for CfgParam {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((key, value)) = s.split_once('=') else {
            anyhow::bail!("Parameter `{s}` is not of the form key=value");
        };
        if key.trim().is_empty() {
            anyhow::bail!("Parameter `{s}` has an empty key");
        }
        Ok(Self::new(key.trim(), value.trim()))
    }
}

impl TryFrom<String> for CfgParam {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CfgParam> for String {
    fn from(value: CfgParam) -> Self {
        value.to_string()
    }
}
