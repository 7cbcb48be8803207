use super::*;
use crate::semantic::TrimmedText;
use indexmap::IndexSet;
use smol_str::SmolStr;

// ============================================================================
// Trivia lines
// ============================================================================

ast_node!(CommentLine, COMMENT_LINE);

impl CommentLine {
    /// Comment text without the leading `#`
    pub fn comment(&self) -> String {
        find_token(&self.0, SyntaxKind::COMMENT)
            .map(|t| t.text().trim_start_matches('#').trim().to_string())
            .unwrap_or_default()
    }
}

ast_node!(BlankLine, BLANK_LINE);

// ============================================================================
// Config block lines
// ============================================================================

ast_node!(
    /// `<keyword> <value>`
    ConfigLine,
    CONFIG_LINE
);

impl ConfigLine {
    first_child_method!(keyword, Keyword);
    first_child_method!(value, Value);
    child_text_method!(key, Keyword);
    child_text_method!(attribute, Value);
}

ast_node!(
    /// `option <keyword> [value]`, or a bare `<keyword>` flag
    OptionLine,
    OPTION_LINE
);

impl OptionLine {
    first_child_method!(keyword, Keyword);
    child_text_method!(key, Keyword);

    /// `true` for `option httplog`, `false` for a bare `daemon`
    pub fn is_prefixed(&self) -> bool {
        has_token(&self.0, SyntaxKind::OPTION_KW)
    }

    pub fn attribute(&self) -> Option<String> {
        self.0.children().find_map(Value::cast).map(|v| v.content())
    }
}

ast_node!(
    /// `server <name> <host>:<port> [value]`
    ServerLine,
    SERVER_LINE
);

impl ServerLine {
    first_child_method!(server_name, ServerName);
    child_text_method!(name, ServerName);
}

ast_node!(
    /// `bind <address>[,<address>...] [value]`
    BindLine,
    BIND_LINE
);

impl BindLine {
    children_method!(addresses, ServiceAddress);
}

// ============================================================================
// Userlist lines
// ============================================================================

ast_node!(
    /// `user <name> password|insecure-password [<type>] <password> [groups a,b]`
    UserLine,
    USER_LINE
);

impl UserLine {
    child_text_method!(name, Name);
    child_text_method!(password, Password);
    first_child_method!(group_list, NameList);

    /// Explicit password type, falling back to the password keyword itself
    pub fn password_type(&self) -> String {
        if let Some(ty) = self.0.children().find_map(PasswordType::cast) {
            return ty.content();
        }
        find_token(&self.0, SyntaxKind::PASSWORD_KW)
            .or_else(|| find_token(&self.0, SyntaxKind::INSECURE_PASSWORD_KW))
            .map(|t| t.text().to_string())
            .unwrap_or_default()
    }

    pub fn is_insecure(&self) -> bool {
        has_token(&self.0, SyntaxKind::INSECURE_PASSWORD_KW)
    }

    /// Group names in declaration order, empty without a `groups` clause
    pub fn groups(&self) -> IndexSet<SmolStr> {
        self.group_list().map(|l| l.names()).unwrap_or_default()
    }
}

ast_node!(
    /// `group <name> [users a,b]`
    GroupLine,
    GROUP_LINE
);

impl GroupLine {
    child_text_method!(name, Name);
    first_child_method!(user_list, NameList);

    /// User names in declaration order, empty without a `users` clause
    pub fn users(&self) -> IndexSet<SmolStr> {
        self.user_list().map(|l| l.names()).unwrap_or_default()
    }
}
