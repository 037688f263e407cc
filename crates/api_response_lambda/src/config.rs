pub const DEFAULT_REGION: &str = "eu-west-1";

pub const REGION_ENV: &str = "AWS_REGION";
pub const DYNAMODB_ENDPOINT_ENV: &str = "DYNAMODB_ENDPOINT_URL";

/// Process-level settings shared by the handler binaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub region: String,
    /// Overrides the DynamoDB endpoint, e.g. for a local emulator.
    pub dynamodb_endpoint_url: Option<String>,
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            region: non_blank(REGION_ENV).unwrap_or_else(|| DEFAULT_REGION.to_string()),
            dynamodb_endpoint_url: non_blank(DYNAMODB_ENDPOINT_ENV),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn falls_back_to_default_region() {
        let config = RuntimeConfig::from_lookup(|_| None);
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.dynamodb_endpoint_url, None);
    }

    #[test]
    fn reads_overrides_and_ignores_blank_values() {
        let vars = HashMap::from([
            (REGION_ENV, "us-east-2".to_string()),
            (DYNAMODB_ENDPOINT_ENV, "   ".to_string()),
        ]);
        let config = RuntimeConfig::from_lookup(|key| vars.get(key).cloned());
        assert_eq!(config.region, "us-east-2");
        assert_eq!(config.dynamodb_endpoint_url, None);
    }
}
