use crate::catalog::s3::{AccessControl, Bucket};
use crate::resource::{OutputNode, ResourceNode};
use crate::stacks::StackContext;
use crate::template::{Error, Template};

/// Buckets shared across the application's services.
pub fn build(context: &StackContext) -> Result<Template, Error> {
    let component = format!(
        "{}{}SharedResources",
        context.environment, context.application
    );

    let mut template = Template::new(component.clone());
    template.set_description(format!("{} stacks", component));

    let bucket = template.add_resource(ResourceNode::from_resource(
        "S3BucketSharedResources",
        Bucket {
            access_control: Some(AccessControl::Private),
            ..Default::default()
        },
    ))?;

    let output = OutputNode::new("S3bucketArn", bucket.attribute("Arn"), "Arn for S3");
    template.add_output(output)?;

    return Ok(template);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::build;
    use crate::serializer::to_value;
    use crate::stacks::StackContext;

    #[test]
    fn renders_private_bucket_with_arn_output() {
        let template = build(&StackContext::new("dev")).unwrap();

        let document = to_value(&template.resolve().unwrap()).unwrap();

        assert_eq!(
            json!({
                "AWSTemplateFormatVersion": "2010-09-09",
                "Description": "devYaegarBooksSharedResources stacks",
                "Resources": {
                    "S3BucketSharedResources": {
                        "Type": "AWS::S3::Bucket",
                        "Properties": { "AccessControl": "Private" }
                    }
                },
                "Outputs": {
                    "S3bucketArn": {
                        "Value": { "Fn::GetAtt": ["S3BucketSharedResources", "Arn"] },
                        "Description": "Arn for S3"
                    }
                }
            }),
            document
        );
    }

    #[test]
    fn environment_names_the_template() {
        let context = StackContext::new("prod").with_application("Shop");
        let template = build(&context).unwrap();

        assert_eq!("prodShopSharedResources", template.name());
    }
}
