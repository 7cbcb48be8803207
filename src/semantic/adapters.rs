//! Capability traits over the typed document model
//!
//! Each trait is a small projection that several node types share. Nodes opt
//! in explicitly, so a `GlobalSection` is a [`BlockContainer`] but never a
//! [`ServerContainer`].

use crate::parser::ast::*;

/// Node text with surrounding whitespace removed
pub trait TrimmedText: AstNode {
    /// Interior whitespace and case are kept as written.
    fn content(&self) -> String {
        self.syntax().text().to_string().trim().to_string()
    }
}

/// Sections owning a config block
pub trait BlockContainer: AstNode {
    fn config_block(&self) -> Option<ConfigBlock> {
        self.syntax().children().find_map(ConfigBlock::cast)
    }

    /// Block lines of one node type, in declaration order
    fn lines<N: AstNode>(&self) -> impl Iterator<Item = N> {
        self.config_block()
            .into_iter()
            .flat_map(|block| block.syntax().children())
            .filter_map(N::cast)
    }

    fn config_lines(&self) -> impl Iterator<Item = ConfigLine> {
        self.lines::<ConfigLine>()
    }

    fn option_lines(&self) -> impl Iterator<Item = OptionLine> {
        self.lines::<OptionLine>()
    }

    /// First config line whose key matches exactly
    fn config(&self, key: &str) -> Option<ConfigLine> {
        self.config_lines().find(|line| line.key() == key)
    }

    /// First option line whose keyword matches exactly
    fn option(&self, keyword: &str) -> Option<OptionLine> {
        self.option_lines().find(|line| line.key() == keyword)
    }
}

/// Sections that may declare `server` lines
pub trait ServerContainer: BlockContainer {
    fn servers(&self) -> impl Iterator<Item = ServerLine> {
        self.lines::<ServerLine>()
    }

    /// First server with this name
    fn server(&self, name: &str) -> Option<ServerLine> {
        self.servers().find(|s| s.name() == name)
    }
}

/// Nodes carrying a `host:port` address
pub trait ServiceAddressHolder: AstNode {
    fn service_address(&self) -> Option<ServiceAddress> {
        self.syntax().children().find_map(ServiceAddress::cast)
    }

    fn host(&self) -> Option<String> {
        self.service_address().map(|a| a.host())
    }

    fn port(&self) -> Option<String> {
        self.service_address().map(|a| a.port())
    }
}

/// Lines whose trailing value may be absent
pub trait OptionalValue: AstNode {
    fn value(&self) -> Option<Value> {
        self.syntax().children().find_map(Value::cast)
    }
}

impl TrimmedText for ConfigurationFile {}
impl TrimmedText for GlobalSection {}
impl TrimmedText for DefaultsSection {}
impl TrimmedText for FrontendSection {}
impl TrimmedText for BackendSection {}
impl TrimmedText for ListenSection {}
impl TrimmedText for UserlistSection {}
impl TrimmedText for GlobalHeader {}
impl TrimmedText for DefaultsHeader {}
impl TrimmedText for FrontendHeader {}
impl TrimmedText for BackendHeader {}
impl TrimmedText for ListenHeader {}
impl TrimmedText for UserlistHeader {}
impl TrimmedText for CommentLine {}
impl TrimmedText for BlankLine {}
impl TrimmedText for ConfigLine {}
impl TrimmedText for OptionLine {}
impl TrimmedText for ServerLine {}
impl TrimmedText for BindLine {}
impl TrimmedText for UserLine {}
impl TrimmedText for GroupLine {}
impl TrimmedText for Keyword {}
impl TrimmedText for Value {}
impl TrimmedText for ProxyName {}
impl TrimmedText for ServerName {}
impl TrimmedText for ServiceAddress {}
impl TrimmedText for Host {}
impl TrimmedText for Port {}
impl TrimmedText for PasswordType {}
impl TrimmedText for Password {}
impl TrimmedText for NameList {}
impl TrimmedText for Name {}

impl BlockContainer for GlobalSection {}
impl BlockContainer for DefaultsSection {}
impl BlockContainer for FrontendSection {}
impl BlockContainer for BackendSection {}
impl BlockContainer for ListenSection {}

impl ServerContainer for BackendSection {}
impl ServerContainer for ListenSection {}

impl ServiceAddressHolder for FrontendHeader {}
impl ServiceAddressHolder for ListenHeader {}
impl ServiceAddressHolder for ServerLine {}
impl ServiceAddressHolder for BindLine {}

/// The header address, else the first address of the first `bind` line
impl ServiceAddressHolder for FrontendSection {
    fn service_address(&self) -> Option<ServiceAddress> {
        self.header()
            .and_then(|h| h.service_address())
            .or_else(|| self.binds().find_map(|b| b.service_address()))
    }
}

/// The header address, else the first address of the first `bind` line
impl ServiceAddressHolder for ListenSection {
    fn service_address(&self) -> Option<ServiceAddress> {
        self.header()
            .and_then(|h| h.service_address())
            .or_else(|| self.binds().find_map(|b| b.service_address()))
    }
}

impl OptionalValue for OptionLine {}
impl OptionalValue for ServerLine {}
impl OptionalValue for BindLine {}
