//! Remote resource attributes for spans and metrics that touch an SQS queue

use serde::Serialize;

use crate::parser::{get_queue_name, parse_url};

/// CloudFormation type of an SQS queue
pub const SQS_QUEUE_RESOURCE_TYPE: &str = "AWS::SQS::Queue";

pub const AWS_REMOTE_RESOURCE_TYPE: &str = "aws.remote.resource.type";
pub const AWS_REMOTE_RESOURCE_IDENTIFIER: &str = "aws.remote.resource.identifier";
pub const AWS_CLOUDFORMATION_PRIMARY_IDENTIFIER: &str = "aws.remote.resource.cfn.primary.identifier";
pub const AWS_REMOTE_RESOURCE_ACCOUNT_ID: &str = "aws.remote.resource.account.id";
pub const AWS_REMOTE_RESOURCE_REGION: &str = "aws.remote.resource.region";

/// The queue a call was made against, as seen by telemetry
///
/// The identifier comes from the permissive queue-name lookup, so it is
/// found even for custom endpoints. Account and region come from the strict
/// parse and are only set for `sqs*` hosts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SqsRemoteResource {
    pub resource_type: &'static str,
    pub identifier: String,
    pub cfn_primary_identifier: String,
    pub account_id: Option<String>,
    pub region: Option<String>,
}

impl SqsRemoteResource {
    /// Build from a queue URL; `None` when no queue name can be found
    pub fn from_queue_url(url: Option<&str>) -> Option<Self> {
        let raw = url?;
        let identifier = get_queue_name(url)?;
        let parsed = parse_url(url);

        Some(Self {
            resource_type: SQS_QUEUE_RESOURCE_TYPE,
            identifier,
            cfn_primary_identifier: raw.to_string(),
            account_id: parsed.account_id().map(str::to_string),
            region: parsed.region().map(str::to_string),
        })
    }

    /// Attribute key/value pairs, omitting absent values
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = vec![
            (AWS_REMOTE_RESOURCE_TYPE, self.resource_type.to_string()),
            (AWS_REMOTE_RESOURCE_IDENTIFIER, self.identifier.clone()),
            (
                AWS_CLOUDFORMATION_PRIMARY_IDENTIFIER,
                self.cfn_primary_identifier.clone(),
            ),
        ];

        if let Some(ref account_id) = self.account_id {
            attrs.push((AWS_REMOTE_RESOURCE_ACCOUNT_ID, account_id.clone()));
        }
        if let Some(ref region) = self.region {
            attrs.push((AWS_REMOTE_RESOURCE_REGION, region.clone()));
        }

        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_standard_url() {
        let url = "https://sqs.us-east-1.amazonaws.com/123456789012/orders";
        let resource = SqsRemoteResource::from_queue_url(Some(url)).unwrap();

        assert_eq!(resource.resource_type, "AWS::SQS::Queue");
        assert_eq!(resource.identifier, "orders");
        assert_eq!(resource.cfn_primary_identifier, url);
        assert_eq!(resource.account_id.as_deref(), Some("123456789012"));
        assert_eq!(resource.region.as_deref(), Some("us-east-1"));
    }

    #[test]
    fn test_custom_endpoint_has_identifier_only() {
        let url = "http://localhost:4566/000000000000/orders";
        let resource = SqsRemoteResource::from_queue_url(Some(url)).unwrap();

        assert_eq!(resource.identifier, "orders");
        assert!(resource.account_id.is_none());
        assert!(resource.region.is_none());

        let keys: Vec<_> = resource.attributes().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec![
                AWS_REMOTE_RESOURCE_TYPE,
                AWS_REMOTE_RESOURCE_IDENTIFIER,
                AWS_CLOUDFORMATION_PRIMARY_IDENTIFIER,
            ]
        );
    }

    #[test]
    fn test_attributes_full() {
        let resource = SqsRemoteResource::from_queue_url(Some(
            "https://sqs.eu-central-1.amazonaws.com/111122223333/jobs",
        ))
        .unwrap();

        let attrs = resource.attributes();
        assert_eq!(attrs.len(), 5);
        assert!(attrs.contains(&(AWS_REMOTE_RESOURCE_ACCOUNT_ID, "111122223333".to_string())));
        assert!(attrs.contains(&(AWS_REMOTE_RESOURCE_REGION, "eu-central-1".to_string())));
    }

    #[test]
    fn test_no_resource_without_queue_name() {
        assert!(SqsRemoteResource::from_queue_url(None).is_none());
        assert!(SqsRemoteResource::from_queue_url(Some("not a url")).is_none());
        assert!(SqsRemoteResource::from_queue_url(Some(
            "https://sqs.us-east-1.amazonaws.com/not-an-id/orders"
        ))
        .is_none());
    }
}
