//! AWS services covered by the block catalog.
//!
//! Each service fixes three things for every block built on it: the wire
//! protocol its API speaks, the name requests are signed for, and how a region
//! maps to an endpoint when no override is configured.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wire protocol spoken by a service API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    /// HTTP bindings per operation, JSON bodies (EKS)
    RestJson,
    /// `POST /` with an `X-Amz-Target` header, JSON 1.1 bodies (WAF Classic)
    AwsJson11 {
        /// Prefix of the `X-Amz-Target` header value
        target_prefix: &'static str,
    },
    /// Form-encoded `Action`/`Version` requests, XML responses (RDS)
    AwsQuery {
        /// API version sent with every request
        version: &'static str,
    },
}

/// An AWS service exposed through blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    /// Amazon Elastic Kubernetes Service
    Eks,
    /// Amazon Relational Database Service
    Rds,
    /// AWS WAF Classic (global)
    Waf,
}

impl Service {
    /// Every service, in catalog order.
    pub const ALL: [Service; 3] = [Service::Eks, Service::Rds, Service::Waf];

    /// Short identifier used in block ids and configuration.
    pub fn id(&self) -> &'static str {
        match self {
            Service::Eks => "eks",
            Service::Rds => "rds",
            Service::Waf => "waf",
        }
    }

    /// Marketing name of the service.
    pub fn display_name(&self) -> &'static str {
        match self {
            Service::Eks => "Amazon EKS",
            Service::Rds => "Amazon RDS",
            Service::Waf => "AWS WAF Classic",
        }
    }

    /// Service name used in the SigV4 credential scope.
    pub fn signing_name(&self) -> &'static str {
        match self {
            Service::Eks => "eks",
            Service::Rds => "rds",
            Service::Waf => "waf",
        }
    }

    pub fn protocol(&self) -> Protocol {
        match self {
            Service::Eks => Protocol::RestJson,
            Service::Rds => Protocol::AwsQuery {
                version: "2014-10-31",
            },
            Service::Waf => Protocol::AwsJson11 {
                target_prefix: "AWSWAF_20150824",
            },
        }
    }

    /// Default endpoint for `region`.
    pub fn endpoint(&self, region: &str) -> String {
        let suffix = dns_suffix(region);
        match self {
            Service::Eks => format!("https://eks.{}.{}", region, suffix),
            Service::Rds => format!("https://rds.{}.{}", region, suffix),
            Service::Waf => format!("https://waf.{}", suffix),
        }
    }

    /// Region placed in the credential scope.
    ///
    /// WAF Classic is a global service signed for `us-east-1` on its default
    /// endpoint; a custom endpoint is signed for the configured region.
    pub fn signing_region(&self, region: &str, custom_endpoint: bool) -> String {
        match self {
            Service::Waf if !custom_endpoint => "us-east-1".to_string(),
            _ => region.to_string(),
        }
    }
}

fn dns_suffix(region: &str) -> &'static str {
    if region.starts_with("cn-") {
        "amazonaws.com.cn"
    } else {
        "amazonaws.com"
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Service {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "eks" => Ok(Service::Eks),
            "rds" => Ok(Service::Rds),
            "waf" | "waf-classic" => Ok(Service::Waf),
            _ => Err(format!(
                "Invalid service '{}'. Valid services: eks, rds, waf",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regional_endpoints() {
        assert_eq!(
            Service::Eks.endpoint("us-west-2"),
            "https://eks.us-west-2.amazonaws.com"
        );
        assert_eq!(
            Service::Rds.endpoint("eu-central-1"),
            "https://rds.eu-central-1.amazonaws.com"
        );
        assert_eq!(
            Service::Rds.endpoint("cn-north-1"),
            "https://rds.cn-north-1.amazonaws.com.cn"
        );
    }

    #[test]
    fn test_waf_is_global() {
        assert_eq!(Service::Waf.endpoint("eu-west-1"), "https://waf.amazonaws.com");
        assert_eq!(Service::Waf.signing_region("eu-west-1", false), "us-east-1");
        assert_eq!(Service::Waf.signing_region("eu-west-1", true), "eu-west-1");
        assert_eq!(Service::Eks.signing_region("eu-west-1", false), "eu-west-1");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("EKS".parse::<Service>().unwrap(), Service::Eks);
        assert_eq!("waf-classic".parse::<Service>().unwrap(), Service::Waf);
        assert!("s3".parse::<Service>().is_err());
    }

    #[test]
    fn test_protocols() {
        assert_eq!(Service::Eks.protocol(), Protocol::RestJson);
        assert_eq!(
            Service::Rds.protocol(),
            Protocol::AwsQuery {
                version: "2014-10-31"
            }
        );
        assert_eq!(
            Service::Waf.protocol(),
            Protocol::AwsJson11 {
                target_prefix: "AWSWAF_20150824"
            }
        );
    }
}
