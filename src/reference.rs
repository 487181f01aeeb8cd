use std::fmt;

/// A symbolic pointer to another resource of the same template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reference {
    /// The identity the provisioning engine assigns to `target`.
    Identity { target: String },

    /// A named runtime attribute of `target`, e.g. `Arn`.
    Attribute { target: String, attribute: String },
}

impl Reference {
    pub fn identity(target: impl Into<String>) -> Self {
        Reference::Identity {
            target: target.into(),
        }
    }

    pub fn attribute(target: impl Into<String>, attribute: impl Into<String>) -> Self {
        Reference::Attribute {
            target: target.into(),
            attribute: attribute.into(),
        }
    }

    pub fn target(&self) -> &str {
        match self {
            Reference::Identity { target } => target,
            Reference::Attribute { target, .. } => target,
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::Identity { target } => write!(f, "{}", target),
            Reference::Attribute { target, attribute } => write!(f, "{}.{}", target, attribute),
        }
    }
}

/// Handle returned by `Template::add_resource`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogicalId(String);

impl LogicalId {
    pub fn new(id: impl Into<String>) -> Self {
        LogicalId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn identity(&self) -> Reference {
        Reference::identity(self.0.clone())
    }

    pub fn attribute(&self, attribute: impl Into<String>) -> Reference {
        Reference::attribute(self.0.clone(), attribute)
    }
}

impl fmt::Display for LogicalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LogicalId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<LogicalId> for String {
    fn from(id: LogicalId) -> Self {
        id.0
    }
}

impl From<&LogicalId> for String {
    fn from(id: &LogicalId) -> Self {
        id.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::{LogicalId, Reference};

    #[test]
    fn logical_id_builds_references() {
        let id = LogicalId::new("UserPool");

        assert_eq!(id.identity(), Reference::identity("UserPool"));
        assert_eq!(
            id.attribute("Arn"),
            Reference::Attribute {
                target: String::from("UserPool"),
                attribute: String::from("Arn"),
            }
        );
    }

    #[test]
    fn target_is_shared_by_both_variants() {
        assert_eq!("Bucket", Reference::identity("Bucket").target());
        assert_eq!("Bucket", Reference::attribute("Bucket", "Arn").target());
        let attribute = Reference::attribute("Bucket", "Arn");
        assert_eq!("Bucket.Arn", attribute.to_string());
    }
}
