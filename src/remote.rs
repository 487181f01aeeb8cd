use aws_config::meta::region::RegionProviderChain;
use aws_types::region::Region;
use tracing::{debug, info};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("Service error ocurred: {0}.")]
    ServiceError(String),

    #[error("Unknown error ocurred: {0}.")]
    UnknownError(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationSummary {
    pub description: Option<String>,
    pub capabilities: Vec<String>,
    pub capabilities_reason: Option<String>,
}

impl ValidationSummary {
    /// What has to be acknowledged when deploying, if anything.
    pub fn capabilities_notice(&self) -> Option<String> {
        let reason = self.capabilities_reason.as_ref()?;
        if self.capabilities.is_empty() {
            return Some(reason.clone());
        }

        let capabilities = self.capabilities.join(", ");
        return Some(format!("Requires {}: {}", capabilities, reason));
    }
}

/// Checks rendered documents with the CloudFormation `ValidateTemplate` API.
pub struct TemplateValidator {
    client: aws_sdk_cloudformation::Client,
}

impl TemplateValidator {
    /// Uses `region` when given, the default provider chain otherwise.
    pub async fn new(region: Option<&str>) -> Self {
        let region_provider =
            RegionProviderChain::first_try(region.map(|region| Region::new(region.to_string())))
                .or_default_provider();

        let sdk_config = aws_config::from_env().region(region_provider).load().await;
        let client = aws_sdk_cloudformation::Client::new(&sdk_config);

        return Self { client };
    }

    pub async fn validate(&self, template_body: &str) -> Result<ValidationSummary, Error> {
        debug!(bytes = template_body.len(), "Validating template");

        let result = self
            .client
            .validate_template()
            .template_body(template_body)
            .send()
            .await;

        let output = match result {
            Ok(data) => data,
            Err(error) => match aws_sdk_cloudformation::Error::from(error) {
                aws_sdk_cloudformation::Error::Unhandled(inner) => {
                    return Err(Error::UnknownError(inner.to_string()));
                }
                other => return Err(Error::ServiceError(other.to_string())),
            },
        };

        let summary = ValidationSummary {
            description: output.description().map(String::from),
            capabilities: output
                .capabilities()
                .unwrap_or_else(|| &[])
                .iter()
                .map(|capability| capability.as_str().to_string())
                .collect(),
            capabilities_reason: output.capabilities_reason().map(String::from),
        };

        info!(capabilities = ?summary.capabilities, "Template accepted by CloudFormation");
        return Ok(summary);
    }
}
