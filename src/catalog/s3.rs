use std::fmt;

use super::{PropertiesBuilder, Resource};
use crate::value::{Properties, PropertyValue};

/// Canned ACLs a bucket can be created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessControl {
    Private,
    PublicRead,
    PublicReadWrite,
    AuthenticatedRead,
    LogDeliveryWrite,
    BucketOwnerRead,
    BucketOwnerFullControl,
}

impl AccessControl {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessControl::Private => "Private",
            AccessControl::PublicRead => "PublicRead",
            AccessControl::PublicReadWrite => "PublicReadWrite",
            AccessControl::AuthenticatedRead => "AuthenticatedRead",
            AccessControl::LogDeliveryWrite => "LogDeliveryWrite",
            AccessControl::BucketOwnerRead => "BucketOwnerRead",
            AccessControl::BucketOwnerFullControl => "BucketOwnerFullControl",
        }
    }
}

impl fmt::Display for AccessControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<AccessControl> for PropertyValue {
    fn from(acl: AccessControl) -> Self {
        PropertyValue::string(acl.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Bucket {
    pub bucket_name: Option<PropertyValue>,
    pub access_control: Option<AccessControl>,
    pub tags: Vec<(String, PropertyValue)>,
}

impl Resource for Bucket {
    const KIND: &'static str = "AWS::S3::Bucket";

    fn into_properties(self) -> Properties {
        let tags: Vec<PropertyValue> = self
            .tags
            .into_iter()
            .map(|(key, value)| {
                PropertyValue::mapping([("Key", PropertyValue::string(key)), ("Value", value)])
            })
            .collect();

        return PropertiesBuilder::new()
            .set_opt("BucketName", self.bucket_name)
            .set_opt("AccessControl", self.access_control)
            .set_list("Tags", tags)
            .build();
    }
}
