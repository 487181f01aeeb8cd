use indexmap::IndexMap;

use crate::catalog::cognito::{
    AdminCreateUserConfig, CognitoIdentityProvider, IdentityPool, IdentityPoolRoleAttachment,
    PasswordPolicy, SchemaAttribute, UserPool, UserPoolClient,
};
use crate::catalog::iam::{Policy, Role};
use crate::reference::LogicalId;
use crate::resource::{OutputNode, ResourceNode};
use crate::stacks::StackContext;
use crate::template::{Error, Template};
use crate::value::PropertyValue;

const POLICY_VERSION: &str = "2012-10-17";
const IDENTITY_SERVICE: &str = "cognito-identity.amazonaws.com";

pub fn build(context: &StackContext) -> Result<Template, Error> {
    let application = &context.application;
    let component = format!("{}Cognito", application);

    let mut template = Template::new(component.clone());
    template.set_description(format!(
        "{} stacks for env {}",
        component, context.environment
    ));

    let user_pool_name = format!("UserPool{}Users", component);
    let user_pool = template.add_resource(ResourceNode::from_resource(
        user_pool_name.clone(),
        UserPool {
            user_pool_name: Some(user_pool_name),
            alias_attributes: vec![String::from("email")],
            schema: vec![
                SchemaAttribute::string("email", true),
                SchemaAttribute::string("setup_state", false),
            ],
            password_policy: Some(PasswordPolicy {
                minimum_length: Some(6),
                require_lowercase: Some(true),
                require_uppercase: Some(true),
                require_numbers: Some(true),
                require_symbols: None,
            }),
            admin_create_user_config: Some(AdminCreateUserConfig {
                allow_admin_create_user_only: Some(false),
                unused_account_validity_days: Some(7),
            }),
            auto_verified_attributes: vec![String::from("email")],
            email_verification_message: Some(verification_message(application)),
            email_verification_subject: Some(String::from("Your verification link")),
        },
    ))?;

    let client_name = format!("UserPoolClient{}Users", component);
    let user_pool_client = template.add_resource(ResourceNode::from_resource(
        client_name.clone(),
        UserPoolClient {
            client_name: Some(client_name),
            user_pool_id: user_pool.identity().into(),
            generate_secret: Some(false),
        },
    ))?;

    let identity_pool_name = format!("IdentityPool{}Users", component);
    let identity_pool = template.add_resource(ResourceNode::from_resource(
        identity_pool_name.clone(),
        IdentityPool {
            identity_pool_name: Some(identity_pool_name),
            allow_unauthenticated_identities: false,
            cognito_identity_providers: vec![CognitoIdentityProvider {
                client_id: user_pool_client.identity().into(),
                provider_name: user_pool.attribute("ProviderName").into(),
            }],
        },
    ))?;

    let unauthorized_role = template.add_resource(ResourceNode::from_resource(
        "CognitoUnAuthorizedRole",
        federated_role(
            format!("Cognito_{}Unauth_Role", application),
            &identity_pool,
            "unauthenticated",
            "cognitounauth",
            &["mobileanalytics:PutEvents", "cognito-sync:*"],
        ),
    ))?;

    let authorized_role = template.add_resource(ResourceNode::from_resource(
        "CognitoAuthorizedRole",
        federated_role(
            format!("Cognito_{}Auth_Role", application),
            &identity_pool,
            "authenticated",
            "cognitoauth",
            &[
                "mobileanalytics:PutEvents",
                "cognito-sync:*",
                "cognito-identity:*",
            ],
        ),
    ))?;

    let mut roles: IndexMap<String, PropertyValue> = IndexMap::new();
    roles.insert(
        String::from("authenticated"),
        authorized_role.attribute("Arn").into(),
    );
    roles.insert(
        String::from("unauthenticated"),
        unauthorized_role.attribute("Arn").into(),
    );
    template.add_resource(ResourceNode::from_resource(
        "IdentityPoolRoleAttachment",
        IdentityPoolRoleAttachment {
            identity_pool_id: identity_pool.identity().into(),
            roles,
        },
    ))?;

    template.add_outputs(vec![
        OutputNode::new(
            "UserPoolArn",
            user_pool.attribute("Arn"),
            format!("UserPool arn for {}", application),
        ),
        OutputNode::new(
            "UserPoolClientId",
            &user_pool_client,
            format!("UserPoolClient id for {}", application),
        ),
        OutputNode::new(
            "IdentityPoolId",
            &identity_pool,
            format!("IdentityPool id for {}", application),
        ),
    ])?;

    return Ok(template);
}

fn verification_message(application: &str) -> String {
    let body = format!(
        "Thanks for registering for a {} account, please click the link to verify \
         your email address. {{####}}",
        application
    );

    return format!(
        "Welcome to {app},\n{body}\n\nWelcome\n{app}",
        app = application,
        body = body
    );
}

// `amr` is the authentication method reference the trust policy matches.
fn federated_role(
    role_name: String,
    identity_pool: &LogicalId,
    amr: &str,
    policy_name: &str,
    actions: &[&str],
) -> Role {
    let trust = PropertyValue::mapping([
        ("Version", PropertyValue::from(POLICY_VERSION)),
        (
            "Statement",
            PropertyValue::sequence([PropertyValue::mapping([
                ("Effect", PropertyValue::from("Allow")),
                (
                    "Principal",
                    PropertyValue::mapping([("Federated", vec![IDENTITY_SERVICE])]),
                ),
                (
                    "Action",
                    PropertyValue::from(vec!["sts:AssumeRoleWithWebIdentity"]),
                ),
                (
                    "Condition",
                    PropertyValue::mapping([
                        (
                            "StringEquals",
                            PropertyValue::mapping([(
                                format!("{}:aud", IDENTITY_SERVICE),
                                PropertyValue::from(identity_pool),
                            )]),
                        ),
                        (
                            "ForAnyValue:StringLike",
                            PropertyValue::mapping([(format!("{}:amr", IDENTITY_SERVICE), amr)]),
                        ),
                    ]),
                ),
            ])]),
        ),
    ]);

    let permissions = PropertyValue::mapping([
        ("Version", PropertyValue::from(POLICY_VERSION)),
        (
            "Statement",
            PropertyValue::sequence([PropertyValue::mapping([
                ("Effect", PropertyValue::from("Allow")),
                ("Action", PropertyValue::sequence(actions.iter().copied())),
                ("Resource", PropertyValue::from(vec!["*"])),
            ])]),
        ),
    ]);

    let mut role = Role::new(trust);
    role.role_name = Some(role_name);
    role.policies.push(Policy {
        policy_name: policy_name.to_string(),
        policy_document: permissions,
    });

    return role;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::build;
    use crate::serializer::{to_value, Format};
    use crate::stacks::StackContext;

    #[test]
    fn registers_resources_in_construction_order() {
        let template = build(&StackContext::new("dev")).unwrap();

        let ids: Vec<&str> = template.resources().map(|r| r.logical_id()).collect();
        assert_eq!(
            vec![
                "UserPoolYaegarBooksCognitoUsers",
                "UserPoolClientYaegarBooksCognitoUsers",
                "IdentityPoolYaegarBooksCognitoUsers",
                "CognitoUnAuthorizedRole",
                "CognitoAuthorizedRole",
                "IdentityPoolRoleAttachment",
            ],
            ids
        );
        let outputs: Vec<&str> = template.outputs().map(|o| o.name()).collect();
        assert_eq!(
            vec!["UserPoolArn", "UserPoolClientId", "IdentityPoolId"],
            outputs
        );
    }

    #[test]
    fn wires_references_between_resources() {
        let template = build(&StackContext::new("dev")).unwrap();
        let document = to_value(&template.resolve().unwrap()).unwrap();
        let resources = &document["Resources"];

        assert_eq!(
            json!({ "Ref": "UserPoolYaegarBooksCognitoUsers" }),
            resources["UserPoolClientYaegarBooksCognitoUsers"]["Properties"]["UserPoolId"]
        );
        let identity_pool = &resources["IdentityPoolYaegarBooksCognitoUsers"]["Properties"];
        assert_eq!(
            json!([{
                "ClientId": { "Ref": "UserPoolClientYaegarBooksCognitoUsers" },
                "ProviderName": {
                    "Fn::GetAtt": ["UserPoolYaegarBooksCognitoUsers", "ProviderName"]
                }
            }]),
            identity_pool["CognitoIdentityProviders"]
        );
        let trust = &resources["CognitoAuthorizedRole"]["Properties"]["AssumeRolePolicyDocument"];
        let condition = &trust["Statement"][0]["Condition"]["StringEquals"];
        assert_eq!(
            json!({ "Ref": "IdentityPoolYaegarBooksCognitoUsers" }),
            condition["cognito-identity.amazonaws.com:aud"]
        );
        assert_eq!(
            json!({
                "authenticated": { "Fn::GetAtt": ["CognitoAuthorizedRole", "Arn"] },
                "unauthenticated": { "Fn::GetAtt": ["CognitoUnAuthorizedRole", "Arn"] }
            }),
            resources["IdentityPoolRoleAttachment"]["Properties"]["Roles"]
        );
        assert_eq!(
            json!({ "Ref": "IdentityPoolYaegarBooksCognitoUsers" }),
            document["Outputs"]["IdentityPoolId"]["Value"]
        );
    }

    #[test]
    fn environment_only_reaches_the_description() {
        let dev = build(&StackContext::new("dev")).unwrap();
        let prod = build(&StackContext::new("prod")).unwrap();

        let description = prod.description();
        assert_eq!("YaegarBooksCognito stacks for env prod", description);
        let dev_ids: Vec<&str> = dev.resources().map(|r| r.logical_id()).collect();
        let prod_ids: Vec<&str> = prod.resources().map(|r| r.logical_id()).collect();
        assert_eq!(dev_ids, prod_ids);
    }

    #[test]
    fn user_pool_properties() {
        let context = StackContext::new("dev").with_application("Shop");
        let template = build(&context).unwrap();
        let document = to_value(&template.resolve().unwrap()).unwrap();
        let pool = &document["Resources"]["UserPoolShopCognitoUsers"]["Properties"];

        let password_policy = &pool["Policies"]["PasswordPolicy"];
        assert_eq!(json!(6), password_policy["MinimumLength"]);
        assert_eq!(json!(["email"]), pool["AliasAttributes"]);
        assert_eq!(
            json!({
                "Name": "setup_state",
                "AttributeDataType": "String",
                "Required": false,
                "Mutable": true
            }),
            pool["Schema"][1]
        );
        let message = pool["EmailVerificationMessage"].as_str().unwrap();
        assert_eq!(true, message.starts_with("Welcome to Shop,\n"));
        assert_eq!(true, message.contains("{####}"));
        assert_eq!(true, message.contains("to verify your email"));
        assert_eq!(true, message.ends_with("\n\nWelcome\nShop"));
    }

    #[test]
    fn renders_as_yaml() {
        let template = build(&StackContext::new("dev")).unwrap();
        let yaml = template.render(Format::Yaml).unwrap();

        let attachment = "AWS::Cognito::IdentityPoolRoleAttachment";
        assert_eq!(true, yaml.contains(attachment));
    }
}
