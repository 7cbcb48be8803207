use super::*;
use crate::semantic::{BlockContainer, TrimmedText};

// ============================================================================
// Global / Defaults
// ============================================================================

ast_node!(GlobalSection, GLOBAL_SECTION);

impl GlobalSection {
    first_child_method!(header, GlobalHeader);
}

ast_node!(GlobalHeader, GLOBAL_HEADER);

ast_node!(DefaultsSection, DEFAULTS_SECTION);

impl DefaultsSection {
    first_child_method!(header, DefaultsHeader);

    /// `defaults` sections may be named or anonymous
    pub fn name(&self) -> Option<String> {
        self.header()?.proxy_name().map(|n| n.content())
    }
}

ast_node!(DefaultsHeader, DEFAULTS_HEADER);

impl DefaultsHeader {
    first_child_method!(proxy_name, ProxyName);
}

// ============================================================================
// Frontend / Backend / Listen
// ============================================================================

ast_node!(FrontendSection, FRONTEND_SECTION);

impl FrontendSection {
    first_child_method!(header, FrontendHeader);
    proxy_name_method!();

    /// `bind` lines in declaration order
    pub fn binds(&self) -> impl Iterator<Item = BindLine> {
        self.lines::<BindLine>()
    }
}

ast_node!(FrontendHeader, FRONTEND_HEADER);

impl FrontendHeader {
    first_child_method!(proxy_name, ProxyName);
}

ast_node!(BackendSection, BACKEND_SECTION);

impl BackendSection {
    first_child_method!(header, BackendHeader);
    proxy_name_method!();
}

ast_node!(BackendHeader, BACKEND_HEADER);

impl BackendHeader {
    first_child_method!(proxy_name, ProxyName);
}

ast_node!(ListenSection, LISTEN_SECTION);

impl ListenSection {
    first_child_method!(header, ListenHeader);
    proxy_name_method!();

    /// `bind` lines in declaration order
    pub fn binds(&self) -> impl Iterator<Item = BindLine> {
        self.lines::<BindLine>()
    }
}

ast_node!(ListenHeader, LISTEN_HEADER);

impl ListenHeader {
    first_child_method!(proxy_name, ProxyName);
}

// ============================================================================
// Userlist
// ============================================================================

ast_node!(UserlistSection, USERLIST_SECTION);

impl UserlistSection {
    first_child_method!(header, UserlistHeader);
    first_child_method!(block, UserlistBlock);
    proxy_name_method!();

    /// Every line of the block in source order
    pub fn entries(&self) -> impl Iterator<Item = UserlistEntry> {
        self.block()
            .into_iter()
            .flat_map(|block| block.0.children())
            .filter_map(UserlistEntry::cast)
    }
}

ast_node!(UserlistHeader, USERLIST_HEADER);

impl UserlistHeader {
    first_child_method!(proxy_name, ProxyName);
}

// ============================================================================
// Blocks
// ============================================================================

ast_node!(
    /// Lines owned by a `global`, `defaults`, `frontend`, `backend` or `listen` header
    ConfigBlock,
    CONFIG_BLOCK
);

impl ConfigBlock {
    children_method!(lines, BlockLine);
}

ast_node!(UserlistBlock, USERLIST_BLOCK);

impl UserlistBlock {
    children_method!(entries, UserlistEntry);
}

ast_enum! {
    /// One line of a config block
    BlockLine {
        Comment(CommentLine),
        Blank(BlankLine),
        Config(ConfigLine),
        Option(OptionLine),
        Server(ServerLine),
        Bind(BindLine),
    }
}

ast_enum! {
    /// One line of a userlist block
    UserlistEntry {
        Comment(CommentLine),
        Blank(BlankLine),
        User(UserLine),
        Group(GroupLine),
    }
}
