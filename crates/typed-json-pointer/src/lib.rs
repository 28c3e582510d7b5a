//! JSON Pointers (RFC 6901) from typed path expressions.
//!
//! This crate turns a chain of member accesses, constant array indices and
//! constant read-only sequence indexer calls into a [JSON Pointer
//! (RFC 6901)](https://tools.ietf.org/html/rfc6901). Member names go through the
//! serializer's naming rules: an explicit wire name, a configured override or a
//! naming policy.
//!
//! # Example
//!
//! ```
//! use typed_json_pointer::{
//!     to_pointer, to_pointer_repr, Expr, KnownNamingPolicy, NamingOptions, PointerRepresentation,
//! };
//!
//! let expr = Expr::root().member("Address").member("City");
//!
//! // Plain form
//! assert_eq!(to_pointer(&expr, None).unwrap(), "/Address/City");
//!
//! // With a naming policy
//! let options = NamingOptions::new().with_policy(KnownNamingPolicy::CamelCase);
//! assert_eq!(to_pointer(&expr, Some(&options)).unwrap(), "/address/city");
//!
//! // Escaped forms
//! let expr = Expr::root().member_as("Ratio", "a/b~c");
//! assert_eq!(to_pointer_repr(&expr, PointerRepresentation::JsonString).unwrap(), "/a~1b~0c");
//! assert_eq!(to_pointer_repr(&expr, PointerRepresentation::UriFragment).unwrap(), "#/a~1b~0c");
//! ```

use thiserror::Error;

pub mod types;
pub use types::{Access, Expr, Literal, Member, Method, PointerRepresentation};

pub mod naming;
pub use naming::{resolve_member_name, KnownNamingPolicy, NamingOptions, NamingPolicy};

mod util;
pub use util::{escape_component, format_segments, percent_encode_component, unescape_component};

pub mod pointer;
pub use pointer::{
    pointer_parts, to_pointer, to_pointer_repr, LiteralMode, PointerBuilder, INVALID_EXPRESSION,
};

mod typed;
pub use typed::TypedPath;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonPointerError {
    #[error("representation {0} is not supported here")]
    UnsupportedRepresentation(PointerRepresentation),
    #[error("{0} not supported")]
    UnsupportedExpression(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            JsonPointerError::UnsupportedRepresentation(PointerRepresentation::Normal).to_string(),
            "representation Normal is not supported here"
        );
        assert_eq!(
            JsonPointerError::UnsupportedExpression("x.Items[i]".to_string()).to_string(),
            "x.Items[i] not supported"
        );
    }

    #[test]
    fn test_end_to_end() {
        let expr = Expr::root().member("Address").member("City");
        assert_eq!(to_pointer(&expr, None).unwrap(), "/Address/City");
        assert_eq!(
            to_pointer_repr(&expr, PointerRepresentation::JsonString).unwrap(),
            "/Address/City"
        );
        assert_eq!(
            to_pointer_repr(&expr, PointerRepresentation::UriFragment).unwrap(),
            "#/Address/City"
        );
    }

    #[test]
    fn test_plain_form_is_not_escaped() {
        let expr = Expr::root().member_as("Ratio", "a/b~c");
        assert_eq!(to_pointer(&expr, None).unwrap(), "/a/b~c");
    }
}
