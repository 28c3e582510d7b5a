//! Type definitions for abstract path expressions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Representation of a JSON Pointer, as described in RFC 6901.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PointerRepresentation {
    /// The representation specified in RFC 6901, Sec. 3.
    #[default]
    Normal,
    /// The JSON string representation specified in RFC 6901, Sec. 5.
    JsonString,
    /// The URI fragment identifier representation specified in RFC 6901, Sec. 6.
    UriFragment,
}

impl fmt::Display for PointerRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PointerRepresentation::Normal => "Normal",
            PointerRepresentation::JsonString => "JsonString",
            PointerRepresentation::UriFragment => "UriFragment",
        };
        f.write_str(name)
    }
}

/// A field or property reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Member {
    /// Declared identifier of the member.
    pub name: String,
    /// Explicit wire name, overriding any naming policy.
    pub json_name: Option<String>,
}

impl Member {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            json_name: None,
        }
    }

    pub fn with_json_name(name: impl Into<String>, json_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            json_name: Some(json_name.into()),
        }
    }
}

/// A constant operand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    Int(i32),
    Long(i64),
    Str(String),
    /// A constant without a value. It has no text form.
    Null,
}

impl Literal {
    /// Text form of the constant, `None` for [`Literal::Null`].
    pub fn to_text(&self) -> Option<String> {
        match self {
            Literal::Int(v) => Some(v.to_string()),
            Literal::Long(v) => Some(v.to_string()),
            Literal::Str(s) => Some(s.clone()),
            Literal::Null => None,
        }
    }

    /// Whether the constant can stand for an array position.
    pub(crate) fn is_index(&self) -> bool {
        match self {
            Literal::Int(v) => *v >= 0,
            Literal::Long(v) => *v >= 0,
            Literal::Null => true,
            Literal::Str(_) => false,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(v) => write!(f, "{v}"),
            Literal::Long(v) => write!(f, "{v}L"),
            Literal::Str(s) => write!(f, "{s:?}"),
            Literal::Null => f.write_str("null"),
        }
    }
}

/// A method invoked inside a path expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Method {
    pub name: String,
    /// The method is the single-argument indexing operation of its type.
    pub indexer: bool,
    /// The declaring type implements the read-only sequence capability.
    pub read_only_sequence: bool,
}

impl Method {
    /// Name used for indexing operations in textual output.
    pub const INDEXER_NAME: &'static str = "get_Item";

    /// A plain, non-indexer method.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            indexer: false,
            read_only_sequence: false,
        }
    }

    /// The indexer of a type. `read_only_sequence` tells whether that type is a
    /// read-only sequence.
    pub fn indexer(read_only_sequence: bool) -> Self {
        Self {
            name: Self::INDEXER_NAME.to_string(),
            indexer: true,
            read_only_sequence,
        }
    }

    pub(crate) fn is_sequence_indexer(&self) -> bool {
        self.indexer && self.read_only_sequence
    }
}

/// Abstract path expression.
///
/// A singly-linked chain read from the leaf back to [`Expr::Root`]. Every node
/// other than the root owns the expression it was applied to.
///
/// Only member accesses, constant array indices and constant read-only sequence
/// indexer calls form a valid path. Other shapes can still be represented so
/// that they are reported when a pointer is built.
///
/// # Example
///
/// ```
/// use typed_json_pointer::Expr;
///
/// let expr = Expr::root().member("Address").member("Lines").index(2);
/// assert_eq!(expr.to_string(), "x.Address.Lines[2]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Expr {
    /// The starting value.
    #[default]
    Root,
    Member {
        target: Box<Expr>,
        member: Member,
    },
    ArrayIndex {
        array: Box<Expr>,
        index: Box<Expr>,
    },
    Call {
        target: Box<Expr>,
        method: Method,
        args: Vec<Expr>,
    },
    Constant(Literal),
    /// Anything else, kept as its textual form.
    Opaque(String),
}

impl Expr {
    pub fn root() -> Self {
        Expr::Root
    }

    pub fn constant(literal: Literal) -> Self {
        Expr::Constant(literal)
    }

    pub fn opaque(text: impl Into<String>) -> Self {
        Expr::Opaque(text.into())
    }

    pub fn is_root(&self) -> bool {
        matches!(self, Expr::Root)
    }

    /// Access a member by its declared identifier.
    pub fn member(self, name: impl Into<String>) -> Self {
        self.access(Member::new(name))
    }

    /// Access a member that carries an explicit wire name.
    pub fn member_as(self, name: impl Into<String>, json_name: impl Into<String>) -> Self {
        self.access(Member::with_json_name(name, json_name))
    }

    pub fn access(self, member: Member) -> Self {
        Expr::Member {
            target: Box::new(self),
            member,
        }
    }

    /// Index an array with a constant.
    pub fn index(self, index: i32) -> Self {
        self.array_index_with(Expr::Constant(Literal::Int(index)))
    }

    /// Index an array with an arbitrary operand.
    pub fn array_index_with(self, index: Expr) -> Self {
        Expr::ArrayIndex {
            array: Box::new(self),
            index: Box::new(index),
        }
    }

    /// Call the indexer of a read-only sequence with a constant.
    pub fn item(self, index: i32) -> Self {
        self.call(Method::indexer(true), vec![Expr::Constant(Literal::Int(index))])
    }

    pub fn call(self, method: Method, args: Vec<Expr>) -> Self {
        Expr::Call {
            target: Box::new(self),
            method,
            args,
        }
    }

    /// Number of nodes between this node and the root.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self;
        while let Some(parent) = current.parent() {
            depth += 1;
            current = parent;
        }
        depth
    }

    /// The expression this node was applied to, if any.
    pub fn parent(&self) -> Option<&Expr> {
        match self {
            Expr::Member { target, .. } | Expr::Call { target, .. } => Some(target),
            Expr::ArrayIndex { array, .. } => Some(array),
            Expr::Root | Expr::Constant(_) | Expr::Opaque(_) => None,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Root => f.write_str("x"),
            Expr::Member { target, member } => write!(f, "{target}.{}", member.name),
            Expr::ArrayIndex { array, index } => write!(f, "{array}[{index}]"),
            Expr::Call {
                target,
                method,
                args,
            } => {
                write!(f, "{target}.{}(", method.name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
            Expr::Constant(literal) => write!(f, "{literal}"),
            Expr::Opaque(text) => f.write_str(text),
        }
    }
}

/// One step of a valid path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access<'a> {
    Member(&'a Member),
    ArrayIndex(&'a Literal),
    SequenceIndex(&'a Literal),
}

impl<'a> Access<'a> {
    /// Classify a non-root node as an access, returning it together with the
    /// expression it applies to. Returns `None` for unsupported shapes.
    pub fn classify(expr: &'a Expr) -> Option<(Access<'a>, &'a Expr)> {
        match expr {
            Expr::Member { target, member } => Some((Access::Member(member), target)),
            Expr::ArrayIndex { array, index } => match index.as_ref() {
                Expr::Constant(literal) if literal.is_index() => {
                    Some((Access::ArrayIndex(literal), array))
                }
                _ => None,
            },
            Expr::Call {
                target,
                method,
                args,
            } if method.is_sequence_indexer() => match args.as_slice() {
                [Expr::Constant(literal @ (Literal::Int(_) | Literal::Null))]
                    if literal.is_index() =>
                {
                    Some((Access::SequenceIndex(literal), target))
                }
                _ => None,
            },
            _ => None,
        }
    }
}
