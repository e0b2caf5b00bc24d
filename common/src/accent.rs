//! 声調記号の除去（アクセント畳み込み）
//!
//! 正規化済み文字列から声調・母音記号を取り除いた照合キーを作る。
//! 表示値としては使わない。

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// 声調記号を除去する
///
/// NFD分解して結合文字を落とし、`đ`/`Đ` を `d`/`D` に置き換える。
pub fn fold_accents(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| match c {
            'đ' => 'd',
            'Đ' => 'D',
            _ => c,
        })
        .collect()
}

/// Option版（None はそのまま）
pub fn fold_accents_opt(text: Option<&str>) -> Option<String> {
    text.map(fold_accents)
}
