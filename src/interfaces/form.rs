//! 批量缩短表单
//!
//! 管理最多 `max_rows` 行输入（URL、有效期、可选短码），
//! 达到上限后拒绝添加新行。

use serde::{Deserialize, Serialize};

use crate::errors::ShortenitError;
use crate::storage::{DEFAULT_VALIDITY_MINUTES, ShortLinkRequest};

/// 默认最多行数
pub const MAX_ROWS: usize = 5;

/// 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Url,
    Validity,
    Shortcode,
}

impl FormField {
    /// 字段顺序
    pub const ALL: [Self; 3] = [Self::Url, Self::Validity, Self::Shortcode];

    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Validity => "validity",
            Self::Shortcode => "shortcode",
        }
    }

    /// 获取字段显示标题
    pub fn display_title(&self) -> &'static str {
        match self {
            Self::Url => "Long URL",
            Self::Validity => "Validity (min)",
            Self::Shortcode => "Shortcode (optional)",
        }
    }
}

/// 外部输入的一行（HTTP 请求体 / CLI 参数）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenEntry {
    pub url: String,
    #[serde(default)]
    pub validity: Option<i64>,
    #[serde(default)]
    pub shortcode: Option<String>,
}

/// 未填写、为 0 或无法解析的有效期一律使用默认值
fn resolve_validity(value: Option<i64>, default_validity: i64) -> i64 {
    match value {
        Some(0) | None => default_validity,
        Some(minutes) => minutes,
    }
}

/// 表单中的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRow {
    pub url: String,
    pub validity: i64,
    pub shortcode: String,
}

impl FormRow {
    fn empty(default_validity: i64) -> Self {
        Self {
            url: String::new(),
            validity: default_validity,
            shortcode: String::new(),
        }
    }

    fn to_request(&self) -> ShortLinkRequest {
        let req = ShortLinkRequest::new(self.url.clone(), self.validity);
        if self.shortcode.is_empty() {
            req
        } else {
            req.with_shortcode(self.shortcode.clone())
        }
    }
}

#[derive(Debug, Clone)]
pub struct ShortenForm {
    rows: Vec<FormRow>,
    max_rows: usize,
    default_validity: i64,
}

impl Default for ShortenForm {
    fn default() -> Self {
        Self::new(DEFAULT_VALIDITY_MINUTES, MAX_ROWS)
    }
}

impl ShortenForm {
    /// 创建只有一行空输入的表单
    pub fn new(default_validity: i64, max_rows: usize) -> Self {
        Self {
            rows: vec![FormRow::empty(default_validity)],
            max_rows: max_rows.max(1),
            default_validity,
        }
    }

    /// 从外部输入构建表单，逐行通过 `add_row` 添加
    pub fn from_entries(
        entries: Vec<ShortenEntry>,
        default_validity: i64,
        max_rows: usize,
    ) -> Result<Self, ShortenitError> {
        if entries.is_empty() {
            return Err(ShortenitError::empty_batch("No URLs were submitted"));
        }

        let mut form = Self::new(default_validity, max_rows);
        for (idx, entry) in entries.into_iter().enumerate() {
            if idx > 0 && !form.add_row() {
                return Err(ShortenitError::batch_size_too_large(format!(
                    "At most {} URLs can be shortened at once",
                    form.max_rows
                )));
            }
            let row = &mut form.rows[idx];
            row.url = entry.url;
            row.validity = resolve_validity(entry.validity, default_validity);
            row.shortcode = entry.shortcode.unwrap_or_default();
        }
        Ok(form)
    }

    pub fn rows(&self) -> &[FormRow] {
        &self.rows
    }

    pub fn row_mut(&mut self, idx: usize) -> Option<&mut FormRow> {
        self.rows.get_mut(idx)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn max_rows(&self) -> usize {
        self.max_rows
    }

    pub fn can_add_row(&self) -> bool {
        self.rows.len() < self.max_rows
    }

    /// 添加一行空输入；已达上限时返回 false 且不修改表单
    pub fn add_row(&mut self) -> bool {
        if !self.can_add_row() {
            return false;
        }
        self.rows.push(FormRow::empty(self.default_validity));
        true
    }

    /// 以文本形式更新字段；有效期无法解析为整数时回退到默认值
    ///
    /// 行不存在时返回 false。
    pub fn set_field(&mut self, idx: usize, field: FormField, value: &str) -> bool {
        let default_validity = self.default_validity;
        let Some(row) = self.rows.get_mut(idx) else {
            return false;
        };

        match field {
            FormField::Url => row.url = value.to_string(),
            FormField::Validity => {
                row.validity = resolve_validity(value.trim().parse().ok(), default_validity);
            }
            FormField::Shortcode => row.shortcode = value.to_string(),
        }
        true
    }

    pub fn set_url(&mut self, idx: usize, url: &str) -> bool {
        self.set_field(idx, FormField::Url, url)
    }

    pub fn set_validity(&mut self, idx: usize, validity: &str) -> bool {
        self.set_field(idx, FormField::Validity, validity)
    }

    pub fn set_shortcode(&mut self, idx: usize, shortcode: &str) -> bool {
        self.set_field(idx, FormField::Shortcode, shortcode)
    }

    /// 按行顺序生成请求批次
    pub fn to_requests(&self) -> Vec<ShortLinkRequest> {
        self.rows.iter().map(FormRow::to_request).collect()
    }

    /// 恢复为一行空输入
    pub fn reset(&mut self) {
        self.rows.clear();
        self.rows.push(FormRow::empty(self.default_validity));
    }
}
