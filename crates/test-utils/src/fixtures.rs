//! Shared test fixtures for GraphQL schemas and documents.
//!
//! Use these for tests that don't need custom schemas. For tests where the schema structure is
//! important to the test case, prefer inline fixtures to keep the test self-documenting.

/// Storefront schema as SDL: interfaces, a union, an enum, an input type, a custom scalar,
/// an explicit `schema` block and a type extension.
pub const STOREFRONT_SDL: &str = include_str!("../fixtures/storefront.graphql");

/// Introspection dump of [`STOREFRONT_SDL`], wrapped in `data` and including the built-in
/// scalars and a few `__` meta-types.
pub const STOREFRONT_INTROSPECTION: &str = include_str!("../fixtures/storefront.json");

/// Operations against the storefront schema that select `Customer.name` in several ways:
/// directly, behind an alias, through a fragment spread twice, and inside inline fragments on
/// a union and an interface.
pub const STOREFRONT_OPERATIONS: &str = include_str!("../fixtures/storefront-operations.graphql");

/// Two types sharing a field name with different return types.
///
/// `A.x` returns `B` while `C.x` returns `Int`; only `A` is reachable from `Query`.
pub const SHARED_FIELD_NAME_SCHEMA: &str = r#"
type Query {
    a: A
    c: C
}

type A {
    x: B
}

type B {
    y: Int
}

type C {
    x: Int
}
"#;

/// Minimal nested chain for path-format tests: `Query.a -> Outer.b -> Enclosing.targetField`.
pub const NESTED_CHAIN_SCHEMA: &str = r#"
type Query {
    a: Outer
}

type Outer {
    b: Enclosing
}

type Enclosing {
    targetField: String
    other: String
}
"#;

/// Schema with interfaces and union types.
///
/// Useful for testing:
/// - Inline fragments narrowing an interface to an implementation
/// - Fragment spreads on interfaces
/// - Union members selected through type conditions
pub const INTERFACE_SCHEMA: &str = r#"
type Query {
    node(id: ID!): Node
    search(query: String!): [SearchResult!]!
}

interface Node {
    id: ID!
}

type User implements Node {
    id: ID!
    name: String!
}

type Post implements Node {
    id: ID!
    title: String!
    author: User!
}

union SearchResult = User | Post
"#;
