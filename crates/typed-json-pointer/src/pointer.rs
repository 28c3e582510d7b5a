//! Translating path expressions into JSON Pointers.

use tracing::{debug, trace};

use crate::naming::{resolve_member_name, NamingOptions};
use crate::types::{Access, Expr, PointerRepresentation};
use crate::util::{format_segments, join_plain};
use crate::JsonPointerError;

/// Segment returned in place of the whole path when an index constant has no
/// text form.
pub const INVALID_EXPRESSION: &str = "INVALID_EXPRESSION";

/// How index constants without a text form are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LiteralMode {
    /// Replace the whole path with the single segment [`INVALID_EXPRESSION`].
    #[default]
    Lenient,
    /// Fail with [`JsonPointerError::UnsupportedExpression`].
    Strict,
}

/// Builds JSON Pointers with a fixed naming configuration.
///
/// # Example
///
/// ```
/// use typed_json_pointer::{Expr, KnownNamingPolicy, NamingOptions, PointerBuilder};
///
/// let options = NamingOptions::new().with_policy(KnownNamingPolicy::CamelCase);
/// let builder = PointerBuilder::new().with_options(&options);
///
/// let expr = Expr::root().member("Address").member("PostalCode");
/// assert_eq!(builder.to_pointer(&expr).unwrap(), "/address/postalCode");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerBuilder<'a> {
    options: Option<&'a NamingOptions>,
    literals: LiteralMode,
}

impl<'a> PointerBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: &'a NamingOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_literal_mode(mut self, literals: LiteralMode) -> Self {
        self.literals = literals;
        self
    }

    /// Raw segments of `expr`, root first.
    ///
    /// # Errors
    ///
    /// Returns [`JsonPointerError::UnsupportedExpression`] when a node is not
    /// a member access, a constant array index or a constant read-only
    /// sequence indexer call.
    pub fn parts(&self, expr: &Expr) -> Result<Vec<String>, JsonPointerError> {
        let mut stack: Vec<String> = Vec::with_capacity(expr.depth());
        let mut current = expr;

        while !current.is_root() {
            let Some((access, parent)) = Access::classify(current) else {
                return Err(JsonPointerError::UnsupportedExpression(current.to_string()));
            };

            let segment = match access {
                Access::Member(member) => resolve_member_name(member, self.options),
                Access::ArrayIndex(literal) | Access::SequenceIndex(literal) => {
                    match literal.to_text() {
                        Some(text) => text,
                        None if self.literals == LiteralMode::Strict => {
                            return Err(JsonPointerError::UnsupportedExpression(
                                current.to_string(),
                            ));
                        }
                        None => {
                            debug!(expr = %current, "index constant has no text form");
                            return Ok(vec![INVALID_EXPRESSION.to_string()]);
                        }
                    }
                }
            };

            trace!(segment = %segment, "collected pointer segment");
            stack.push(segment);
            current = parent;
        }

        // Collected leaf first
        stack.reverse();
        Ok(stack)
    }

    /// Plain RFC 6901 form, segments joined without escaping.
    ///
    /// # Errors
    ///
    /// See [`PointerBuilder::parts`].
    pub fn to_pointer(&self, expr: &Expr) -> Result<String, JsonPointerError> {
        let parts = self.parts(expr)?;
        Ok(join_plain(&parts))
    }

    /// Escaped JSON string or URI fragment form.
    ///
    /// # Errors
    ///
    /// Returns [`JsonPointerError::UnsupportedRepresentation`] for
    /// [`PointerRepresentation::Normal`] before looking at `expr`, and
    /// otherwise the errors of [`PointerBuilder::parts`].
    pub fn to_pointer_repr(
        &self,
        expr: &Expr,
        representation: PointerRepresentation,
    ) -> Result<String, JsonPointerError> {
        if representation == PointerRepresentation::Normal {
            return Err(JsonPointerError::UnsupportedRepresentation(representation));
        }
        let parts = self.parts(expr)?;
        format_segments(&parts, representation)
    }
}

/// Raw segments of `expr`, root first, with the lenient literal mode.
///
/// # Example
///
/// ```
/// use typed_json_pointer::{pointer_parts, Expr};
///
/// let expr = Expr::root().member("Lines").index(2).member("Text");
/// assert_eq!(pointer_parts(&expr, None).unwrap(), vec!["Lines", "2", "Text"]);
/// ```
pub fn pointer_parts(
    expr: &Expr,
    options: Option<&NamingOptions>,
) -> Result<Vec<String>, JsonPointerError> {
    PointerBuilder {
        options,
        literals: LiteralMode::Lenient,
    }
    .parts(expr)
}

/// Plain RFC 6901 pointer for `expr`.
///
/// Segments are joined as they are: `~` and `/` inside names are NOT escaped.
/// Use [`to_pointer_repr`] for escaped output. The root path gives `"/"`.
///
/// # Example
///
/// ```
/// use typed_json_pointer::{to_pointer, Expr};
///
/// let expr = Expr::root().member("Address").member("City");
/// assert_eq!(to_pointer(&expr, None).unwrap(), "/Address/City");
/// assert_eq!(to_pointer(&Expr::root(), None).unwrap(), "/");
/// ```
pub fn to_pointer(expr: &Expr, options: Option<&NamingOptions>) -> Result<String, JsonPointerError> {
    let parts = pointer_parts(expr, options)?;
    Ok(join_plain(&parts))
}

/// Escaped pointer for `expr` in the JSON string or URI fragment form.
///
/// # Example
///
/// ```
/// use typed_json_pointer::{to_pointer_repr, Expr, PointerRepresentation};
///
/// let expr = Expr::root().member("Address").member("City");
/// assert_eq!(
///     to_pointer_repr(&expr, PointerRepresentation::UriFragment).unwrap(),
///     "#/Address/City"
/// );
/// assert!(to_pointer_repr(&expr, PointerRepresentation::Normal).is_err());
/// ```
pub fn to_pointer_repr(
    expr: &Expr,
    representation: PointerRepresentation,
) -> Result<String, JsonPointerError> {
    PointerBuilder::new().to_pointer_repr(expr, representation)
}
