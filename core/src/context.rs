//! Serialization context threaded through every render call.

use std::borrow::Cow;

use crate::{
    error::{Error, Result},
    schema::Registry,
    sql::SQL,
};

/// Rendering flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Flags {
    /// Render column references as `"col"` instead of `"table"."col"`.
    pub skip_table_name: bool,
    /// Render bindable values as `?` and collect them as parameters.
    pub replace_bindable_with_question: bool,
    /// Wrap binary operations in parentheses.
    pub use_parentheses: bool,
    /// Whether the node being rendered is the outermost statement.
    pub top_level: bool,
    /// Reject identifiers containing `"` instead of rendering them verbatim.
    pub check_identifiers: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            skip_table_name: true,
            replace_bindable_with_question: false,
            use_parentheses: true,
            top_level: true,
            check_identifiers: false,
        }
    }
}

/// Read-only view over a [`Registry`] plus [`Flags`].
///
/// Render calls borrow the context and never change it. A node that needs
/// different flags for a child derives a new context with [`with`](Self::with)
/// or [`nested`](Self::nested); the derived context borrows the same registry.
#[derive(Debug, Clone, Copy)]
pub struct SerializerContext<'r> {
    registry: &'r Registry,
    flags: Flags,
}

impl<'r> SerializerContext<'r> {
    /// Context over `registry` with default flags.
    pub fn new(registry: &'r Registry) -> Self {
        Self::with_flags(registry, Flags::default())
    }

    pub const fn with_flags(registry: &'r Registry, flags: Flags) -> Self {
        Self { registry, flags }
    }

    #[inline]
    pub const fn registry(&self) -> &'r Registry {
        self.registry
    }

    #[inline]
    pub const fn flags(&self) -> Flags {
        self.flags
    }

    pub const fn skip_table_name(mut self, skip: bool) -> Self {
        self.flags.skip_table_name = skip;
        self
    }

    pub const fn replace_bindable_with_question(mut self, replace: bool) -> Self {
        self.flags.replace_bindable_with_question = replace;
        self
    }

    pub const fn use_parentheses(mut self, use_parentheses: bool) -> Self {
        self.flags.use_parentheses = use_parentheses;
        self
    }

    pub const fn top_level(mut self, top_level: bool) -> Self {
        self.flags.top_level = top_level;
        self
    }

    pub const fn check_identifiers(mut self, check: bool) -> Self {
        self.flags.check_identifiers = check;
        self
    }

    /// Derives a context with adjusted flags, leaving `self` untouched.
    pub fn with(&self, adjust: impl FnOnce(&mut Flags)) -> Self {
        let mut flags = self.flags;
        adjust(&mut flags);
        Self::with_flags(self.registry, flags)
    }

    /// Derives the context for a sub-expression: not top level.
    #[inline]
    pub const fn nested(&self) -> Self {
        Self {
            registry: self.registry,
            flags: Flags {
                top_level: false,
                ..self.flags
            },
        }
    }

    /// Quoted identifier. Names are emitted verbatim, never escaped.
    ///
    /// With `check_identifiers` set a name containing `"` is rejected.
    pub fn ident<'a>(&self, name: impl Into<Cow<'a, str>>) -> Result<SQL<'a>> {
        let name = name.into();
        if self.flags.check_identifiers && name.contains('"') {
            return Err(Error::UnsupportedIdentifier(name.into_owned()));
        }
        Ok(SQL::ident(name))
    }
}
