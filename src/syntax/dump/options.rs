/// Options controlling tree dumps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpOptions {
    /// Deepest level whose children are still printed (root is level 0)
    pub max_depth: usize,
    /// Print whitespace, line break and comment tokens
    pub show_trivia: bool,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            max_depth: 2,
            show_trivia: false,
        }
    }
}

impl DumpOptions {
    /// Prefix marking the given depth
    pub fn indent(&self, depth: usize) -> String {
        "--".repeat(depth)
    }

    /// Dump the whole tree regardless of depth
    pub fn unbounded() -> Self {
        Self {
            max_depth: usize::MAX,
            ..Self::default()
        }
    }
}
