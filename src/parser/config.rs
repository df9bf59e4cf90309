//! パーサー設定

use serde::{Deserialize, Serialize};

/// 再帰の深さの既定上限
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// パーサーの動作設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// 式の入れ子の上限。超えると `TooDeeplyNested`。
    pub max_depth: usize,
    /// 変数直後の `$a{0}` を配列参照として受け付けるか
    pub curly_lookup: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            curly_lookup: true,
        }
    }
}

impl ParserConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_curly_lookup(mut self, enabled: bool) -> Self {
        self.curly_lookup = enabled;
        self
    }
}
