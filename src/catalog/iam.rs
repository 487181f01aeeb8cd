use super::{PropertiesBuilder, Resource};
use crate::value::{Properties, PropertyValue};

#[derive(Debug, Clone)]
pub struct Policy {
    pub policy_name: String,
    pub policy_document: PropertyValue,
}

impl From<Policy> for PropertyValue {
    fn from(policy: Policy) -> Self {
        PropertiesBuilder::new()
            .set("PolicyName", policy.policy_name)
            .set("PolicyDocument", policy.policy_document)
            .into_value()
    }
}

#[derive(Debug, Clone)]
pub struct Role {
    pub role_name: Option<String>,
    /// Trust policy; commonly references the principal it trusts.
    pub assume_role_policy_document: PropertyValue,
    pub managed_policy_arns: Vec<PropertyValue>,
    pub policies: Vec<Policy>,
}

impl Role {
    pub fn new(assume_role_policy_document: PropertyValue) -> Self {
        return Self {
            role_name: None,
            assume_role_policy_document,
            managed_policy_arns: Vec::new(),
            policies: Vec::new(),
        };
    }
}

impl Resource for Role {
    const KIND: &'static str = "AWS::IAM::Role";

    fn into_properties(self) -> Properties {
        PropertiesBuilder::new()
            .set_opt("RoleName", self.role_name)
            .set("AssumeRolePolicyDocument", self.assume_role_policy_document)
            .set_list("ManagedPolicyArns", self.managed_policy_arns)
            .set_list("Policies", self.policies)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::{Policy, Role};
    use crate::catalog::Resource;
    use crate::value::PropertyValue;

    #[test]
    fn role_renders_inline_policies_in_order() {
        let mut role = Role::new(PropertyValue::mapping([("Version", "2012-10-17")]));
        role.role_name = Some(String::from("Reader"));
        role.policies.push(Policy {
            policy_name: String::from("read"),
            policy_document: PropertyValue::mapping([("Version", "2012-10-17")]),
        });

        let properties = role.into_properties();
        let keys: Vec<&str> = properties.keys().map(String::as_str).collect();
        assert_eq!(
            vec!["RoleName", "AssumeRolePolicyDocument", "Policies"],
            keys
        );
    }
}
