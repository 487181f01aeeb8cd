//! Build CloudFormation templates from an in-memory resource graph.

pub mod catalog;
pub mod config;
pub mod reference;
pub mod remote;
pub mod resolver;
pub mod resource;
pub mod serializer;
pub mod stacks;
pub mod template;
pub mod value;
pub mod writer;

pub use reference::{LogicalId, Reference};
pub use resolver::{resolve, ResolvedTemplate};
pub use resource::{OutputNode, ResourceNode};
pub use serializer::Format;
pub use stacks::{Stack, StackContext};
pub use template::{Error, Template};
pub use value::{Properties, PropertyValue, Scalar};
