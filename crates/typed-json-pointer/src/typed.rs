//! Paths bound to the type they start from.

use std::fmt;
use std::marker::PhantomData;

use crate::naming::NamingOptions;
use crate::pointer::{to_pointer, to_pointer_repr};
use crate::types::{Expr, Member, PointerRepresentation};
use crate::JsonPointerError;

/// A path expression starting at a value of type `T`.
///
/// # Example
///
/// ```
/// use typed_json_pointer::{PointerRepresentation, TypedPath};
///
/// struct Customer;
///
/// let path = TypedPath::<Customer>::root().member("Address").member("City");
/// assert_eq!(path.to_pointer(None).unwrap(), "/Address/City");
/// assert_eq!(
///     path.to_pointer_repr(PointerRepresentation::UriFragment).unwrap(),
///     "#/Address/City"
/// );
/// ```
pub struct TypedPath<T: ?Sized> {
    expr: Expr,
    _root: PhantomData<fn(&T)>,
}

impl<T: ?Sized> TypedPath<T> {
    pub fn root() -> Self {
        Self::new(Expr::Root)
    }

    pub fn new(expr: Expr) -> Self {
        Self {
            expr,
            _root: PhantomData,
        }
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    pub fn into_expr(self) -> Expr {
        self.expr
    }

    pub fn member(self, name: impl Into<String>) -> Self {
        Self::new(self.expr.member(name))
    }

    pub fn member_as(self, name: impl Into<String>, json_name: impl Into<String>) -> Self {
        Self::new(self.expr.member_as(name, json_name))
    }

    pub fn access(self, member: Member) -> Self {
        Self::new(self.expr.access(member))
    }

    pub fn index(self, index: i32) -> Self {
        Self::new(self.expr.index(index))
    }

    pub fn item(self, index: i32) -> Self {
        Self::new(self.expr.item(index))
    }

    /// See [`to_pointer`](crate::to_pointer).
    pub fn to_pointer(&self, options: Option<&NamingOptions>) -> Result<String, JsonPointerError> {
        to_pointer(&self.expr, options)
    }

    /// See [`to_pointer_repr`](crate::to_pointer_repr).
    pub fn to_pointer_repr(
        &self,
        representation: PointerRepresentation,
    ) -> Result<String, JsonPointerError> {
        to_pointer_repr(&self.expr, representation)
    }
}

impl<T: ?Sized> Clone for TypedPath<T> {
    fn clone(&self) -> Self {
        Self::new(self.expr.clone())
    }
}

impl<T: ?Sized> PartialEq for TypedPath<T> {
    fn eq(&self, other: &Self) -> bool {
        self.expr == other.expr
    }
}

impl<T: ?Sized> fmt::Debug for TypedPath<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypedPath").field(&self.expr).finish()
    }
}

impl<T: ?Sized> fmt::Display for TypedPath<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.expr, f)
    }
}

impl<T: ?Sized> From<Expr> for TypedPath<T> {
    fn from(expr: Expr) -> Self {
        Self::new(expr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::KnownNamingPolicy;

    struct Order;

    #[test]
    fn test_typed_path_matches_expr() {
        let typed = TypedPath::<Order>::root().member("Lines").item(2).member("Sku");
        let expr = Expr::root().member("Lines").item(2).member("Sku");
        assert_eq!(typed.expr(), &expr);
        assert_eq!(typed.to_string(), "x.Lines.get_Item(2).Sku");
    }

    #[test]
    fn test_typed_path_with_options() {
        let options = NamingOptions::new().with_policy(KnownNamingPolicy::CamelCase);
        let typed: TypedPath<Order> = Expr::root().member("Lines").index(0).into();
        assert_eq!(typed.to_pointer(Some(&options)).unwrap(), "/lines/0");
    }

    #[test]
    fn test_typed_path_clone() {
        let typed = TypedPath::<str>::root().member_as("Len", "length");
        let copy = typed.clone();
        assert_eq!(typed, copy);
        assert_eq!(copy.into_expr(), Expr::root().member_as("Len", "length"));
    }
}
