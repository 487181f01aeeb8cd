use indexmap::IndexMap;

use super::{PropertiesBuilder, Resource};
use crate::value::{Properties, PropertyValue};

#[derive(Debug, Clone)]
pub struct SchemaAttribute {
    pub name: String,
    pub attribute_data_type: String,
    pub required: Option<bool>,
    pub mutable: Option<bool>,
}

impl SchemaAttribute {
    pub fn string(name: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            attribute_data_type: String::from("String"),
            required: Some(required),
            mutable: Some(true),
        }
    }
}

impl From<SchemaAttribute> for PropertyValue {
    fn from(attribute: SchemaAttribute) -> Self {
        PropertiesBuilder::new()
            .set("Name", attribute.name)
            .set("AttributeDataType", attribute.attribute_data_type)
            .set_opt("Required", attribute.required)
            .set_opt("Mutable", attribute.mutable)
            .into_value()
    }
}

#[derive(Debug, Clone, Default)]
pub struct PasswordPolicy {
    pub minimum_length: Option<u32>,
    pub require_lowercase: Option<bool>,
    pub require_uppercase: Option<bool>,
    pub require_numbers: Option<bool>,
    pub require_symbols: Option<bool>,
}

impl From<PasswordPolicy> for PropertyValue {
    fn from(policy: PasswordPolicy) -> Self {
        PropertiesBuilder::new()
            .set_opt("MinimumLength", policy.minimum_length)
            .set_opt("RequireLowercase", policy.require_lowercase)
            .set_opt("RequireUppercase", policy.require_uppercase)
            .set_opt("RequireNumbers", policy.require_numbers)
            .set_opt("RequireSymbols", policy.require_symbols)
            .into_value()
    }
}

#[derive(Debug, Clone, Default)]
pub struct AdminCreateUserConfig {
    pub allow_admin_create_user_only: Option<bool>,
    pub unused_account_validity_days: Option<u32>,
}

impl From<AdminCreateUserConfig> for PropertyValue {
    fn from(config: AdminCreateUserConfig) -> Self {
        PropertiesBuilder::new()
            .set_opt(
                "AllowAdminCreateUserOnly",
                config.allow_admin_create_user_only,
            )
            .set_opt(
                "UnusedAccountValidityDays",
                config.unused_account_validity_days,
            )
            .into_value()
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserPool {
    pub user_pool_name: Option<String>,
    pub alias_attributes: Vec<String>,
    pub auto_verified_attributes: Vec<String>,
    pub schema: Vec<SchemaAttribute>,
    pub password_policy: Option<PasswordPolicy>,
    pub admin_create_user_config: Option<AdminCreateUserConfig>,
    pub email_verification_message: Option<String>,
    pub email_verification_subject: Option<String>,
}

impl Resource for UserPool {
    const KIND: &'static str = "AWS::Cognito::UserPool";

    fn into_properties(self) -> Properties {
        // PasswordPolicy is nested under Policies in the provider schema.
        let policies = self
            .password_policy
            .map(|policy| [("PasswordPolicy", policy)])
            .map(PropertyValue::mapping);

        return PropertiesBuilder::new()
            .set_opt("UserPoolName", self.user_pool_name)
            .set_list("AliasAttributes", self.alias_attributes)
            .set_list("Schema", self.schema)
            .set_opt("Policies", policies)
            .set_opt("AdminCreateUserConfig", self.admin_create_user_config)
            .set_list("AutoVerifiedAttributes", self.auto_verified_attributes)
            .set_opt("EmailVerificationMessage", self.email_verification_message)
            .set_opt("EmailVerificationSubject", self.email_verification_subject)
            .build();
    }
}

#[derive(Debug, Clone)]
pub struct UserPoolClient {
    pub client_name: Option<String>,
    pub user_pool_id: PropertyValue,
    pub generate_secret: Option<bool>,
}

impl Resource for UserPoolClient {
    const KIND: &'static str = "AWS::Cognito::UserPoolClient";

    fn into_properties(self) -> Properties {
        PropertiesBuilder::new()
            .set_opt("ClientName", self.client_name)
            .set("UserPoolId", self.user_pool_id)
            .set_opt("GenerateSecret", self.generate_secret)
            .build()
    }
}

#[derive(Debug, Clone)]
pub struct CognitoIdentityProvider {
    pub client_id: PropertyValue,
    pub provider_name: PropertyValue,
}

impl From<CognitoIdentityProvider> for PropertyValue {
    fn from(provider: CognitoIdentityProvider) -> Self {
        PropertiesBuilder::new()
            .set("ClientId", provider.client_id)
            .set("ProviderName", provider.provider_name)
            .into_value()
    }
}

#[derive(Debug, Clone, Default)]
pub struct IdentityPool {
    pub identity_pool_name: Option<String>,
    pub allow_unauthenticated_identities: bool,
    pub cognito_identity_providers: Vec<CognitoIdentityProvider>,
}

impl Resource for IdentityPool {
    const KIND: &'static str = "AWS::Cognito::IdentityPool";

    fn into_properties(self) -> Properties {
        PropertiesBuilder::new()
            .set_opt("IdentityPoolName", self.identity_pool_name)
            .set(
                "AllowUnauthenticatedIdentities",
                self.allow_unauthenticated_identities,
            )
            .set_list("CognitoIdentityProviders", self.cognito_identity_providers)
            .build()
    }
}

/// Binds IAM roles to the authenticated and unauthenticated identities of a pool.
#[derive(Debug, Clone)]
pub struct IdentityPoolRoleAttachment {
    pub identity_pool_id: PropertyValue,
    pub roles: IndexMap<String, PropertyValue>,
}

impl Resource for IdentityPoolRoleAttachment {
    const KIND: &'static str = "AWS::Cognito::IdentityPoolRoleAttachment";

    fn into_properties(self) -> Properties {
        PropertiesBuilder::new()
            .set("IdentityPoolId", self.identity_pool_id)
            .set("Roles", PropertyValue::Mapping(self.roles))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::{PasswordPolicy, UserPool, UserPoolClient};
    use crate::catalog::Resource;
    use crate::reference::Reference;
    use crate::value::PropertyValue;

    #[test]
    fn password_policy_nests_under_policies() {
        let pool = UserPool {
            password_policy: Some(PasswordPolicy {
                minimum_length: Some(6),
                ..Default::default()
            }),
            ..Default::default()
        };

        let properties = pool.into_properties();
        let password_policy = PropertyValue::mapping([("MinimumLength", 6)]);
        let expected = PropertyValue::mapping([("PasswordPolicy", password_policy)]);
        assert_eq!(Some(&expected), properties.get("Policies"));
    }

    #[test]
    fn user_pool_client_keeps_reference() {
        let client = UserPoolClient {
            client_name: None,
            user_pool_id: Reference::identity("Pool").into(),
            generate_secret: Some(false),
        };

        let properties = client.into_properties();
        assert_eq!(
            Some(&PropertyValue::Reference(Reference::identity("Pool"))),
            properties.get("UserPoolId")
        );
        assert_eq!(None, properties.get("ClientName"));
    }
}
