/// Shared behaviour for every AST node: the literal of the token that
/// produced it, used for diagnostics.
pub trait Node: std::fmt::Display {
    fn token_literal(&self) -> &str;
}
