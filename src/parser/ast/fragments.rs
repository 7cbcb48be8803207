use super::*;
use crate::semantic::{TimeValue, TrimmedText, unescape};
use indexmap::IndexSet;
use smol_str::SmolStr;

ast_node!(Keyword, KEYWORD);
ast_node!(ProxyName, PROXY_NAME);
ast_node!(ServerName, SERVER_NAME);
ast_node!(PasswordType, PASSWORD_TYPE);
ast_node!(Password, PASSWORD);
ast_node!(Name, NAME);

ast_node!(
    /// Everything after a keyword up to the comment or line break
    Value,
    VALUE
);

impl Value {
    /// Value text with quotes removed and backslash escapes resolved
    pub fn unescaped(&self) -> String {
        unescape(&self.content())
    }

    /// The value as a time, when it is a single time token such as `5s`
    pub fn as_time(&self) -> Option<TimeValue> {
        let mut tokens = self.0.children_with_tokens().filter_map(|e| e.into_token());
        match (tokens.next(), tokens.next()) {
            (Some(token), None) if token.kind() == SyntaxKind::TIME => {
                TimeValue::parse(token.text())
            }
            _ => None,
        }
    }
}

ast_node!(
    /// `<host>:<port>`, where the host may be empty or `*`
    ServiceAddress,
    SERVICE_ADDRESS
);

impl ServiceAddress {
    child_text_method!(host, Host);
    child_text_method!(port, Port);

    /// Port as a number, `None` for named or out of range ports
    pub fn port_number(&self) -> Option<u16> {
        self.port().parse().ok()
    }

    /// `true` for `*:80` and `:80`
    pub fn is_wildcard(&self) -> bool {
        matches!(self.host().as_str(), "" | "*")
    }
}

ast_node!(Host, HOST);
ast_node!(Port, PORT);

ast_node!(
    /// Comma separated names after `groups` or `users`
    NameList,
    NAME_LIST
);

impl NameList {
    children_method!(items, Name);

    /// Names in declaration order, duplicates collapsed
    pub fn names(&self) -> IndexSet<SmolStr> {
        self.items().map(|n| SmolStr::new(n.content())).collect()
    }
}
