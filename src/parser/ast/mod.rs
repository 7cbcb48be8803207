//! Typed document model over the untyped rowan CST.
//!
//! Each struct wraps a `SyntaxNode` of exactly one kind and provides methods
//! to reach its children. Shared capabilities (trimmed text, block lines,
//! service addresses, optional values) are traits in [`crate::semantic`].

use super::syntax_kind::SyntaxKind;
use super::{SyntaxNode, SyntaxToken};

// ============================================================================
// Helper utilities
// ============================================================================

/// Check if a syntax node has a direct child token of the specified kind.
#[inline]
fn has_token(node: &SyntaxNode, kind: SyntaxKind) -> bool {
    find_token(node, kind).is_some()
}

/// Find the first direct child token of the specified kind.
#[inline]
fn find_token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .find(|t| t.kind() == kind)
}

/// Trait for AST nodes that wrap a SyntaxNode
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;

    /// Find all descendant nodes of a specific AST type
    fn descendants<T: AstNode>(&self) -> impl Iterator<Item = T> {
        self.syntax().descendants().filter_map(T::cast)
    }
}

// ============================================================================
// Helper macros
// ============================================================================

macro_rules! ast_node {
    ($(#[$meta:meta])* $name:ident, $kind:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(pub(crate) SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

/// Macro to generate a closed enum over several node types.
///
/// Usage:
/// ```ignore
/// ast_enum! {
///     BlockLine { Comment(CommentLine), Config(ConfigLine) }
/// }
/// ```
macro_rules! ast_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident($type:ident)),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant($type)),+
        }

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                $($type::can_cast(kind))||+
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                $(
                    if $type::can_cast(node.kind()) {
                        return $type::cast(node).map(Self::$variant);
                    }
                )+
                None
            }

            fn syntax(&self) -> &SyntaxNode {
                match self {
                    $(Self::$variant(n) => n.syntax()),+
                }
            }
        }
    };
}

/// Macro to generate a method that finds the first child of a specific AST type.
macro_rules! first_child_method {
    ($name:ident, $type:ident) => {
        #[doc = concat!("Get the first `", stringify!($type), "` child of this node.")]
        pub fn $name(&self) -> Option<$type> {
            self.0.children().find_map($type::cast)
        }
    };
}

/// Macro to generate a method that returns an iterator over children of a specific AST type.
macro_rules! children_method {
    ($name:ident, $type:ident) => {
        #[doc = concat!("Get all `", stringify!($type), "` children of this node.")]
        pub fn $name(&self) -> impl Iterator<Item = $type> + '_ {
            self.0.children().filter_map($type::cast)
        }
    };
}

/// Macro to generate a method returning the trimmed text of a child the
/// grammar always produces.
///
/// Usage:
/// ```ignore
/// impl ConfigLine {
///     child_text_method!(key, Keyword);
/// }
/// ```
macro_rules! child_text_method {
    ($name:ident, $type:ident) => {
        #[doc = concat!("Trimmed text of the `", stringify!($type), "` child.")]
        pub fn $name(&self) -> String {
            self.0
                .children()
                .find_map($type::cast)
                .map(|n| $crate::semantic::TrimmedText::content(&n))
                .unwrap_or_default()
        }
    };
}

/// Macro to generate `name()` for sections whose header carries a proxy name.
macro_rules! proxy_name_method {
    () => {
        /// The proxy name from the section header.
        pub fn name(&self) -> String {
            self.header()
                .and_then(|h| h.proxy_name())
                .map(|n| $crate::semantic::TrimmedText::content(&n))
                .unwrap_or_default()
        }
    };
}

// Submodules — declared after macros so macro_rules! are in scope
mod fragments;
mod lines;
mod sections;

pub use self::fragments::*;
pub use self::lines::*;
pub use self::sections::*;

// ============================================================================
// Root
// ============================================================================

ast_node!(
    /// The whole document: comments, blank lines and sections in source order
    ConfigurationFile,
    CONFIGURATION_FILE
);

impl ConfigurationFile {
    /// Wrap a root node produced by the parser
    pub(crate) fn new_unchecked(node: SyntaxNode) -> Self {
        debug_assert_eq!(node.kind(), SyntaxKind::CONFIGURATION_FILE);
        Self(node)
    }

    children_method!(elements, TopLevel);
    children_method!(sections, Section);
    first_child_method!(global, GlobalSection);
    children_method!(defaults, DefaultsSection);
    children_method!(frontends, FrontendSection);
    children_method!(backends, BackendSection);
    children_method!(listeners, ListenSection);
    children_method!(userlists, UserlistSection);

    /// First frontend with this name
    pub fn frontend(&self, name: &str) -> Option<FrontendSection> {
        self.frontends().find(|s| s.name() == name)
    }

    /// First backend with this name
    pub fn backend(&self, name: &str) -> Option<BackendSection> {
        self.backends().find(|s| s.name() == name)
    }

    /// First listen section with this name
    pub fn listener(&self, name: &str) -> Option<ListenSection> {
        self.listeners().find(|s| s.name() == name)
    }

    /// First userlist with this name
    pub fn userlist(&self, name: &str) -> Option<UserlistSection> {
        self.userlists().find(|s| s.name() == name)
    }
}

ast_enum! {
    /// Any section of the document
    Section {
        Global(GlobalSection),
        Defaults(DefaultsSection),
        Frontend(FrontendSection),
        Backend(BackendSection),
        Listen(ListenSection),
        Userlist(UserlistSection),
    }
}

impl Section {
    /// Section name, `None` for `global` and unnamed `defaults`
    pub fn name(&self) -> Option<String> {
        match self {
            Self::Global(_) => None,
            Self::Defaults(s) => s.name(),
            Self::Frontend(s) => Some(s.name()),
            Self::Backend(s) => Some(s.name()),
            Self::Listen(s) => Some(s.name()),
            Self::Userlist(s) => Some(s.name()),
        }
    }

    /// The config block, absent only for userlists
    pub fn config_block(&self) -> Option<ConfigBlock> {
        match self {
            Self::Userlist(_) => None,
            other => other.syntax().children().find_map(ConfigBlock::cast),
        }
    }
}

ast_enum! {
    /// Any element directly under the document root
    TopLevel {
        Comment(CommentLine),
        Blank(BlankLine),
        Section(Section),
    }
}
