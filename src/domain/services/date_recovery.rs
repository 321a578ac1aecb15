// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::exam_date::ExamDate;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

/// 数字型日期格式，日在前优先；在日位无法成立时再按月在前回退
/// （`03/04/2025`是4月3日，`04/13/2025`才是4月13日）
const NUMERIC_FORMATS: &[&str] = &[
    // Two-digit year forms first: chrono's %Y accepts short years, so
    // "03/04/25" must hit %y before %Y claims it as year 25 AD. A
    // four-digit year fails %y on the leftover digits and falls through.
    "%d/%m/%y",
    "%d-%m-%y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%y",
    "%m-%d-%y",
    "%m/%d/%Y",
    "%m-%d-%Y",
];

/// 带月份名的单词元日期格式（如`3-Apr-2025`）
const TEXTUAL_FORMATS: &[&str] = &[
    "%d-%b-%Y",
    "%d-%B-%Y",
    "%d %b %Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%b %d %Y",
    "%B %d %Y",
];

/// 正文中以空格书写的日期（`3 Apr 2025`），按空白分词后会被拆散，
/// 因此对原始页面文本做一次整体扫描
static DAY_MONTH_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(\d{1,2})(?:st|nd|rd|th)?\s+(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?,?\s+(\d{4})\b",
    )
    .expect("static pattern")
});

static MONTH_DAY_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+(\d{1,2})(?:st|nd|rd|th)?\s*,?\s+(\d{4})\b",
    )
    .expect("static pattern")
});

/// 从提取出的页面文本中恢复考试日期
///
/// 对每页文本按空白分词，逐词尝试宽松的日在前解析，另加一次
/// 月份名写法的整文扫描。解析失败的词元直接丢弃——绝大多数
/// 词元本来就不是日期。结果集合按日历顺序去重排序；
/// 没有任何日期时返回空集合，这不是错误
pub fn recover_dates<I, S>(pages: I) -> BTreeSet<ExamDate>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut dates = BTreeSet::new();

    for page in pages {
        let text = page.as_ref();

        for token in text.split_whitespace() {
            if let Some(date) = parse_token(token) {
                dates.insert(ExamDate::new(date));
            }
        }

        for captures in DAY_MONTH_YEAR.captures_iter(text) {
            if let Some(date) = date_from_parts(&captures[2], &captures[1], &captures[3]) {
                dates.insert(ExamDate::new(date));
            }
        }
        for captures in MONTH_DAY_YEAR.captures_iter(text) {
            if let Some(date) = date_from_parts(&captures[1], &captures[2], &captures[3]) {
                dates.insert(ExamDate::new(date));
            }
        }
    }

    dates
}

/// 宽松解析单个词元
///
/// 容忍两侧的非日期字符（括号、逗号等）。要求词元至少含有
/// 一位数字：裸月份名（`Apr`）没有稳定的规范日期，不参与解析。
/// 已知的取舍：无关的数字串（如`12-06-24`式的编号）可能被误判为
/// 日期，这一行为与原工具保持一致
pub(crate) fn parse_token(token: &str) -> Option<NaiveDate> {
    let trimmed = token.trim_matches(|c: char| !c.is_ascii_alphanumeric());
    if trimmed.is_empty() || !trimmed.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }

    for format in NUMERIC_FORMATS.iter().chain(TEXTUAL_FORMATS) {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }

    None
}

fn date_from_parts(month: &str, day: &str, year: &str) -> Option<NaiveDate> {
    let month = month_number(month)?;
    let day: u32 = day.parse().ok()?;
    let year: i32 = year.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn month_number(name: &str) -> Option<u32> {
    let lower = name.to_ascii_lowercase();
    match lower.get(..3)? {
        "jan" => Some(1),
        "feb" => Some(2),
        "mar" => Some(3),
        "apr" => Some(4),
        "may" => Some(5),
        "jun" => Some(6),
        "jul" => Some(7),
        "aug" => Some(8),
        "sep" => Some(9),
        "oct" => Some(10),
        "nov" => Some(11),
        "dec" => Some(12),
        _ => None,
    }
}
