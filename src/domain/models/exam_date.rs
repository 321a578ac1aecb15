// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;

/// 考试日期实体
///
/// 规范化的日历日期。显示格式固定为`DD Mon YYYY`
/// （如`03 Apr 2025`），同一天的不同文本写法在此收敛为一条。
/// 排序按日历顺序进行，跨年也保持正确（`15 Dec 2024`在
/// `02 Jan 2025`之前），而不是字符串顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExamDate(NaiveDate);

impl ExamDate {
    /// 从日历日期创建考试日期
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// 底层日历日期
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for ExamDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%d %b %Y"))
    }
}

impl From<NaiveDate> for ExamDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Serialize for ExamDate {
    /// 按规范显示格式序列化（Web协作方期望字符串数组）
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> ExamDate {
        ExamDate::new(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_canonical_display_format() {
        assert_eq!(date(2025, 4, 3).to_string(), "03 Apr 2025");
        assert_eq!(date(2024, 12, 15).to_string(), "15 Dec 2024");
    }

    #[test]
    fn test_ordering_is_calendar_order_across_years() {
        let mut dates = vec![date(2025, 1, 2), date(2024, 6, 1), date(2024, 12, 15)];
        dates.sort();
        let rendered: Vec<String> = dates.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["01 Jun 2024", "15 Dec 2024", "02 Jan 2025"]);
    }

    #[test]
    fn test_serializes_as_display_string() {
        let json = serde_json::to_string(&date(2025, 4, 3)).unwrap();
        assert_eq!(json, "\"03 Apr 2025\"");
    }
}
