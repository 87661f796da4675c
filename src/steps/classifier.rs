//! Step classification
//!
//! Each step gets exactly one category. Pattern groups are checked in a fixed
//! order (conclusion, warning, bullish, bearish) and the first hit wins, so a
//! "Conclusion: bullish" step is a conclusion and a "Warning: bullish" step is
//! a warning. Anything unmatched is neutral.
//!
//! English patterns use ASCII word boundaries, so `bullish` still matches when
//! glued to Han text (`这是bullish信号`). Chinese patterns are plain substrings
//! since CJK text has no word boundaries to anchor on.

use super::StepType;
use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

struct CategoryPatterns {
    step_type: StepType,
    english: Regex,
    chinese: Regex,
}

impl CategoryPatterns {
    fn new(step_type: StepType, english: &str, chinese: &str) -> Self {
        Self {
            step_type,
            english: Regex::new(english).expect("regex should compile"),
            chinese: Regex::new(chinese).expect("regex should compile"),
        }
    }

    fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.english
            .find(text)
            .or_else(|| self.chinese.find(text))
            .map(|m| m.as_str())
    }
}

// Order is priority: earlier groups win ties.
static CATEGORY_PATTERNS: LazyLock<[CategoryPatterns; 4]> = LazyLock::new(|| {
    [
        CategoryPatterns::new(
            StepType::Conclusion,
            r"(?i)(?-u:\b)(?:in conclusion|conclusions?|conclude[sd]?|in summary|summary|summari[sz]e|to sum up|overall|therefore|verdict|recommendation|bottom line|final (?:decision|answer|call|verdict))(?-u:\b)",
            r"结论|总结|综上|总之|最终|因此",
        ),
        CategoryPatterns::new(
            StepType::Warning,
            r"(?i)(?-u:\b)(?:warnings?|warn|caution|cautious|careful|risks?|risky|danger|dangerous|volatile|volatility|uncertain|uncertainty|beware|stop[- ]?loss|drawdown|liquidation)(?-u:\b)",
            r"风险|警告|注意|谨慎|小心|波动|止损|爆仓",
        ),
        CategoryPatterns::new(
            StepType::Bullish,
            r"(?i)(?-u:\b)(?:bullish|bulls?|uptrend|upside|buy|buying|long|rally|rallying|breakout|golden cross|oversold|accumulation)(?-u:\b)",
            r"看多|做多|看涨|上涨|买入|突破|多头|金叉|反弹",
        ),
        CategoryPatterns::new(
            StepType::Bearish,
            r"(?i)(?-u:\b)(?:bearish|bears?|downtrend|downside|sell|selling|short|decline|declining|breakdown|death cross|overbought|distribution)(?-u:\b)",
            r"看空|做空|看跌|下跌|卖出|空头|死叉|跌破",
        ),
    ]
});

/// Category plus the text fragment that decided it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub step_type: StepType,
    pub trigger_matched: Option<String>,
}

/// Classify one step's text. Total and deterministic.
pub fn classify_step(text: &str) -> StepType {
    explain_step(text).step_type
}

/// Like [`classify_step`], but also reports which cue fired.
pub fn explain_step(text: &str) -> Classification {
    // NFKC folds full-width forms (ＲＩＳＫ, ：) into their ASCII equivalents
    let normalized: String = text.nfkc().collect();

    for group in CATEGORY_PATTERNS.iter() {
        if let Some(hit) = group.find(&normalized) {
            return Classification {
                step_type: group.step_type,
                trigger_matched: Some(hit.to_string()),
            };
        }
    }

    Classification {
        step_type: StepType::Neutral,
        trigger_matched: None,
    }
}
