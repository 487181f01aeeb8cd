//! The stacks this project ships.

pub mod cognito;
pub mod shared_buckets;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::template::{Error, Template};

pub const DEFAULT_APPLICATION: &str = "YaegarBooks";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackContext {
    pub environment: String,
    pub application: String,
}

impl StackContext {
    pub fn new(environment: impl Into<String>) -> Self {
        return Self {
            environment: environment.into(),
            application: String::from(DEFAULT_APPLICATION),
        };
    }

    pub fn with_application(mut self, application: impl Into<String>) -> Self {
        self.application = application.into();
        return self;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stack {
    Cognito,
    SharedBuckets,
}

impl Stack {
    pub fn build(&self, context: &StackContext) -> Result<Template, Error> {
        match self {
            Stack::Cognito => cognito::build(context),
            Stack::SharedBuckets => shared_buckets::build(context),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stack::Cognito => "cognito",
            Stack::SharedBuckets => "shared-buckets",
        }
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stack {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "cognito" => Ok(Stack::Cognito),
            "shared-buckets" => Ok(Stack::SharedBuckets),
            other => Err(format!(
                "Unknown stack `{}`, expected `cognito` or `shared-buckets`",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Stack, StackContext, DEFAULT_APPLICATION};

    #[test]
    fn stack_names_round_trip() {
        for stack in [Stack::Cognito, Stack::SharedBuckets] {
            assert_eq!(Ok(stack), stack.as_str().parse::<Stack>());
        }
        assert_eq!(true, "buckets".parse::<Stack>().is_err());
    }

    #[test]
    fn stack_deserializes_from_kebab_case() {
        let stack: Stack = serde_yaml::from_str("shared-buckets").unwrap();
        assert_eq!(Stack::SharedBuckets, stack);
    }

    #[test]
    fn context_defaults_application() {
        let context = StackContext::new("dev");
        assert_eq!(DEFAULT_APPLICATION, context.application);
        assert_eq!("Shop", context.with_application("Shop").application);
    }
}
