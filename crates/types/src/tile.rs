//! Tile categories and the registry used to fill a board.

use std::borrow::Cow;
use std::fmt;

/// A named tile category.
///
/// Equality is relaxed: two types are equal if their names match, or if either
/// side is [`Type::ANY`] and the other side is not [`Type::NONE`]. The relation
/// is not transitive, so `Type` is neither `Eq` nor `Hash`.
#[derive(Debug, Clone)]
pub struct Type {
    name: Cow<'static, str>,
}

impl Type {
    /// Empty / absent category.
    pub const NONE: Type = Type {
        name: Cow::Borrowed(""),
    };

    /// Wildcard category, matches anything except [`Type::NONE`].
    pub const ANY: Type = Type {
        name: Cow::Borrowed("*"),
    };

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_none(&self) -> bool {
        self.name == Self::NONE.name
    }

    pub fn is_any(&self) -> bool {
        self.name == Self::ANY.name
    }

    /// True for the two reserved categories.
    pub fn is_sentinel(&self) -> bool {
        self.is_none() || self.is_any()
    }

    /// Exact name comparison, ignoring the wildcard rule.
    pub fn same_name(&self, other: &Type) -> bool {
        self.name == other.name
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            || (self.is_any() && !other.is_none())
            || (!self.is_none() && other.is_any())
    }
}

impl Default for Type {
    fn default() -> Self {
        Self::NONE
    }
}

impl From<&'static str> for Type {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Type {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            f.write_str("<none>")
        } else {
            f.write_str(&self.name)
        }
    }
}

/// Name-unique pool of tile categories.
///
/// Insertion order is kept so that a seeded fill is reproducible. The sentinel
/// categories are never stored.
#[derive(Debug, Clone, Default)]
pub struct Types {
    types: Vec<Type>,
}

impl Types {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one category. Returns false if it was a sentinel or already present.
    pub fn add_type(&mut self, ty: Type) -> bool {
        if ty.is_sentinel() || self.contains(&ty) {
            return false;
        }
        self.types.push(ty);
        true
    }

    /// Set union with `types`.
    pub fn add_types<I>(&mut self, types: I)
    where
        I: IntoIterator,
        I::Item: Into<Type>,
    {
        for ty in types {
            self.add_type(ty.into());
        }
    }

    /// Exact-name membership test.
    pub fn contains(&self, ty: &Type) -> bool {
        self.types.iter().any(|t| t.same_name(ty))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Type> {
        self.types.iter()
    }

    pub fn as_slice(&self) -> &[Type] {
        &self.types
    }

    pub fn clear(&mut self) {
        self.types.clear();
    }
}

impl<T: Into<Type>> FromIterator<T> for Types {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut types = Types::new();
        types.add_types(iter);
        types
    }
}

impl<'a> IntoIterator for &'a Types {
    type Item = &'a Type;
    type IntoIter = std::slice::Iter<'a, Type>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Types {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for ty in &self.types {
            write!(f, " {ty}")?;
        }
        f.write_str(" }")
    }
}

/// Direction pieces settle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gravity {
    #[default]
    Down,
    Up,
    Left,
    Right,
    None,
}

impl Gravity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gravity::Down => "down",
            Gravity::Up => "up",
            Gravity::Left => "left",
            Gravity::Right => "right",
            Gravity::None => "none",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "down" => Some(Gravity::Down),
            "up" => Some(Gravity::Up),
            "left" => Some(Gravity::Left),
            "right" => Some(Gravity::Right),
            "none" => Some(Gravity::None),
            _ => None,
        }
    }
}

impl fmt::Display for Gravity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_equality() {
        assert!(Type::ANY == Type::ANY);
        assert!(Type::NONE == Type::NONE);
        assert!(Type::ANY != Type::NONE);
        assert!(Type::NONE != Type::ANY);
        assert!(Type::new("a") == Type::ANY);
        assert!(Type::ANY == Type::new("a"));
        assert!(Type::NONE != Type::new("a"));
        assert!(Type::new("a") != Type::new("b"));
    }

    #[test]
    fn test_same_name_ignores_wildcard() {
        assert!(!Type::new("a").same_name(&Type::ANY));
        assert!(Type::new("a").same_name(&Type::from("a")));
    }

    #[test]
    fn test_types_skip_sentinels() {
        let mut types = Types::new();
        assert!(!types.add_type(Type::NONE));
        assert!(!types.add_type(Type::ANY));
        assert!(types.is_empty());
    }

    #[test]
    fn test_types_display() {
        let types: Types = ["a", "b"].into_iter().collect();
        assert_eq!(types.to_string(), "{ a b }");
        assert_eq!(Types::new().to_string(), "{ }");
    }

    #[test]
    fn test_gravity_parse() {
        for g in [
            Gravity::Down,
            Gravity::Up,
            Gravity::Left,
            Gravity::Right,
            Gravity::None,
        ] {
            assert_eq!(Gravity::from_str(g.as_str()), Some(g));
        }
        assert_eq!(Gravity::from_str("DOWN"), Some(Gravity::Down));
        assert_eq!(Gravity::from_str("sideways"), None);
    }
}
