// keg-core/src/domain/package/hook.rs

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HookParam {
    pub key: String,
    pub value: String,
}

/// A named post-install action. Execution belongs to the installer; keg only
/// carries the name and parameters through, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hook {
    name: String,
    params: Vec<HookParam>,
}

impl Hook {
    pub fn new(name: impl Into<String>, params: Vec<HookParam>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[HookParam] {
        &self.params
    }

    /// First value declared for `key`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{}: {:?}", param.key, param.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_keeps_order() {
        let hook = Hook::new(
            "defaults_write",
            vec![
                HookParam {
                    key: "domain".to_string(),
                    value: "com.example".to_string(),
                },
                HookParam {
                    key: "key".to_string(),
                    value: "Enabled".to_string(),
                },
            ],
        );
        assert_eq!(
            hook.to_string(),
            r#"defaults_write domain: "com.example", key: "Enabled""#
        );
        assert_eq!(hook.param("key"), Some("Enabled"));
        assert_eq!(hook.param("missing"), None);
    }

    #[test]
    fn test_display_without_params() {
        assert_eq!(Hook::new("refresh_launch_services", vec![]).to_string(), "refresh_launch_services");
    }
}
