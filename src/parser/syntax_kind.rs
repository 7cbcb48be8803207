//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all possible node and token kinds in the syntax tree.
//! Every node carries exactly one of these tags; typed AST wrappers cast on it.

/// All syntax kinds (tokens and nodes) of a HAProxy configuration file
///
/// Tokens are leaf nodes (words, keywords, punctuation, trivia).
/// Nodes are composite (sections, headers, blocks, lines).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    WHITESPACE = 0,
    NEWLINE,
    COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    WORD,   // maxconn, 10.0.0.1, insecure-password, /etc/my\ file
    STRING, // "quoted \"value\""
    TIME,   // 5s, 300ms, 1d

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    COLON, // :
    COMMA, // ,

    // =========================================================================
    // CONTEXTUAL KEYWORDS (re-tagged from WORD by the parser)
    // =========================================================================
    GLOBAL_KW,
    DEFAULTS_KW,
    FRONTEND_KW,
    BACKEND_KW,
    LISTEN_KW,
    USERLIST_KW,
    SERVER_KW,
    BIND_KW,
    OPTION_KW,
    USER_KW,
    GROUP_KW,
    PASSWORD_KW,
    INSECURE_PASSWORD_KW,
    GROUPS_KW,
    USERS_KW,

    // =========================================================================
    // NODES - document structure
    // =========================================================================
    CONFIGURATION_FILE,
    GLOBAL_SECTION,
    DEFAULTS_SECTION,
    FRONTEND_SECTION,
    BACKEND_SECTION,
    LISTEN_SECTION,
    USERLIST_SECTION,

    GLOBAL_HEADER,
    DEFAULTS_HEADER,
    FRONTEND_HEADER,
    BACKEND_HEADER,
    LISTEN_HEADER,
    USERLIST_HEADER,

    CONFIG_BLOCK,
    USERLIST_BLOCK,

    // =========================================================================
    // NODES - lines
    // =========================================================================
    COMMENT_LINE,
    BLANK_LINE,
    CONFIG_LINE,
    OPTION_LINE,
    SERVER_LINE,
    BIND_LINE,
    USER_LINE,
    GROUP_LINE,

    // =========================================================================
    // NODES - line fragments
    // =========================================================================
    KEYWORD,
    VALUE,
    PROXY_NAME,
    SERVER_NAME,
    SERVICE_ADDRESS,
    HOST,
    PORT,
    PASSWORD_TYPE,
    PASSWORD,
    NAME_LIST,
    NAME,

    // Special
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace, line break or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::NEWLINE | Self::COMMENT)
    }

    /// Check if this is a contextual keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::GLOBAL_KW as u16) && (self as u16) <= (Self::USERS_KW as u16)
    }

    /// Check if this is a section kind
    pub fn is_section(self) -> bool {
        matches!(
            self,
            Self::GLOBAL_SECTION
                | Self::DEFAULTS_SECTION
                | Self::FRONTEND_SECTION
                | Self::BACKEND_SECTION
                | Self::LISTEN_SECTION
                | Self::USERLIST_SECTION
        )
    }

    /// Check if this kind can appear inside a value
    pub fn is_value_token(self) -> bool {
        matches!(
            self,
            Self::WORD | Self::STRING | Self::TIME | Self::COLON | Self::COMMA
        ) || self.is_keyword()
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HaproxyLanguage {}

impl rowan::Language for HaproxyLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<HaproxyLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<HaproxyLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<HaproxyLanguage>;
pub type SyntaxNodeChildren = rowan::SyntaxNodeChildren<HaproxyLanguage>;
