use typed_json_pointer::{
    to_pointer, to_pointer_repr, Expr, JsonPointerError, KnownNamingPolicy, Literal, Method,
    NamingOptions, PointerRepresentation,
};

const ESCAPED: [PointerRepresentation; 2] = [
    PointerRepresentation::JsonString,
    PointerRepresentation::UriFragment,
];

#[test]
fn pointer_member_chain_matrix() {
    let cases: [(&[&str], &str); 4] = [
        (&[], "/"),
        (&["Name"], "/Name"),
        (&["Address", "City"], "/Address/City"),
        (&["A", "B", "C", "D"], "/A/B/C/D"),
    ];

    for (members, expected) in cases {
        let expr = members
            .iter()
            .fold(Expr::root(), |expr, name| expr.member(*name));
        assert_eq!(to_pointer(&expr, None).unwrap(), expected);
    }
}

#[test]
fn pointer_representation_matrix() {
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
fn pointer_root_matrix() {
    let root = Expr::root();
    assert_eq!(to_pointer(&root, None).unwrap(), "/");
    assert_eq!(
        to_pointer_repr(&root, PointerRepresentation::JsonString).unwrap(),
        ""
    );
    assert_eq!(
        to_pointer_repr(&root, PointerRepresentation::UriFragment).unwrap(),
        "#"
    );
}

#[test]
fn pointer_escaping_matrix() {
    let expr = Expr::root().member_as("Odd", "a/b~c");
    assert_eq!(
        to_pointer_repr(&expr, PointerRepresentation::JsonString).unwrap(),
        "/a~1b~0c"
    );
    assert_eq!(
        to_pointer_repr(&expr, PointerRepresentation::UriFragment).unwrap(),
        "#/a~1b~0c"
    );

    let expr = Expr::root().member_as("Spaced", "first name");
    assert_eq!(
        to_pointer_repr(&expr, PointerRepresentation::JsonString).unwrap(),
        "/first name"
    );
    assert_eq!(
        to_pointer_repr(&expr, PointerRepresentation::UriFragment).unwrap(),
        "#/first%20name"
    );
    assert_eq!(to_pointer(&expr, None).unwrap(), "/first name");
}

#[test]
fn pointer_naming_matrix() {
    let camel = NamingOptions::new().with_policy(KnownNamingPolicy::CamelCase);
    let overridden = NamingOptions::new()
        .with_policy(KnownNamingPolicy::CamelCase)
        .with_override("Address", "addr");

    let expr = Expr::root()
        .member("Address")
        .member_as("PostalCode", "zip")
        .member("Value");

    assert_eq!(to_pointer(&expr, None).unwrap(), "/Address/zip/Value");
    assert_eq!(to_pointer(&expr, Some(&camel)).unwrap(), "/address/zip/value");
    assert_eq!(to_pointer(&expr, Some(&overridden)).unwrap(), "/addr/zip/value");
}

#[test]
fn pointer_normal_representation_always_fails() {
    let paths = [
        Expr::root(),
        Expr::root().member("A"),
        Expr::root().member("A").index(1).item(2),
        Expr::root().array_index_with(Expr::opaque("i")),
        Expr::root().array_index_with(Expr::constant(Literal::Null)),
    ];

    for expr in &paths {
        assert_eq!(
            to_pointer_repr(expr, PointerRepresentation::Normal),
            Err(JsonPointerError::UnsupportedRepresentation(
                PointerRepresentation::Normal
            ))
        );
    }
}

#[test]
fn pointer_unsupported_expression_matrix() {
    let cases = [
        (
            Expr::root().member("Items").array_index_with(Expr::opaque("i")),
            "x.Items[i]",
        ),
        (
            Expr::root().member("Items").index(-1),
            "x.Items[-1]",
        ),
        (
            Expr::root()
                .member("Map")
                .call(Method::indexer(false), vec![Expr::constant(Literal::Int(0))]),
            "x.Map.get_Item(0)",
        ),
        (
            Expr::root().member("Name").call(Method::new("ToString"), vec![]),
            "x.Name.ToString()",
        ),
        (Expr::opaque("Compute(x)").member("Value"), "Compute(x)"),
    ];

    for (expr, text) in &cases {
        assert_eq!(
            to_pointer(expr, None),
            Err(JsonPointerError::UnsupportedExpression(text.to_string()))
        );
        for repr in ESCAPED {
            assert!(matches!(
                to_pointer_repr(expr, repr),
                Err(JsonPointerError::UnsupportedExpression(_))
            ));
        }
    }
}

#[test]
fn pointer_invalid_literal_sentinel() {
    let expr = Expr::root()
        .member("Lines")
        .call(Method::indexer(true), vec![Expr::constant(Literal::Null)])
        .member("Text");

    assert_eq!(to_pointer(&expr, None).unwrap(), "/INVALID_EXPRESSION");
    assert_eq!(
        to_pointer_repr(&expr, PointerRepresentation::JsonString).unwrap(),
        "/INVALID_EXPRESSION"
    );

    // Indistinguishable from a member carrying that name
    let lookalike = Expr::root().member("INVALID_EXPRESSION");
    assert_eq!(
        to_pointer(&lookalike, None).unwrap(),
        to_pointer(&expr, None).unwrap()
    );
}
