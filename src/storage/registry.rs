//! 内存短链注册表
//!
//! 只存在于进程内存中，按插入顺序保存所有短链记录。
//! 记录创建后不会被修改或删除。

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::{debug, trace, warn};

use super::models::{ShortLinkRecord, ShortLinkRequest, compute_expires_at};
use crate::utils::generate_random_code;

/// 短码生成器
pub trait CodeGenerator: Send + Sync {
    fn generate(&mut self) -> String;
}

/// 默认生成器：固定长度，62 字符字母表均匀随机
#[derive(Debug, Clone)]
pub struct RandomCodeGenerator {
    length: usize,
}

impl RandomCodeGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new(6)
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&mut self) -> String {
        generate_random_code(self.length)
    }
}

pub struct ShortlinkRegistry {
    records: Vec<ShortLinkRecord>,
    /// 已提交记录的短码，用于冲突检测
    codes: HashSet<String>,
    generator: Box<dyn CodeGenerator>,
    regenerate_attempts: u32,
}

impl Default for ShortlinkRegistry {
    fn default() -> Self {
        Self::new(Box::new(RandomCodeGenerator::default()), 1)
    }
}

impl ShortlinkRegistry {
    /// `regenerate_attempts` 为发生冲突后最多重新生成的次数，
    /// 最后一次生成的短码直接采用，不再检查。
    pub fn new(generator: Box<dyn CodeGenerator>, regenerate_attempts: u32) -> Self {
        Self {
            records: Vec::new(),
            codes: HashSet::new(),
            generator,
            regenerate_attempts,
        }
    }

    pub fn records(&self) -> &[ShortLinkRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    /// 为一批已通过验证的请求分配短码与过期时间，并一次性追加到注册表
    ///
    /// 冲突检测只针对本批次开始前已存在的记录，同批次内的记录互不检查。
    /// 返回本批次新增的记录。
    pub fn insert_batch(
        &mut self,
        batch: Vec<ShortLinkRequest>,
        created_at: DateTime<Utc>,
    ) -> Vec<ShortLinkRecord> {
        let new_records: Vec<ShortLinkRecord> = batch
            .into_iter()
            .map(|req| {
                let shortcode = self.assign_shortcode(&req);
                let expires_at = compute_expires_at(created_at, req.validity_minutes);
                trace!(
                    "Registry: {} -> {} (expires {})",
                    shortcode, req.url, expires_at
                );
                ShortLinkRecord {
                    url: req.url,
                    shortcode,
                    validity_minutes: req.validity_minutes,
                    created_at,
                    expires_at,
                    clicks: Vec::new(),
                }
            })
            .collect();

        // 整批提交，冲突集合在此之后才更新
        self.codes
            .extend(new_records.iter().map(|r| r.shortcode.clone()));
        self.records.extend(new_records.iter().cloned());

        debug!(
            "Registry: appended {} records, total {}",
            new_records.len(),
            self.records.len()
        );
        new_records
    }

    fn assign_shortcode(&mut self, req: &ShortLinkRequest) -> String {
        let mut code = match req.custom_shortcode() {
            Some(custom) => custom.to_string(),
            None => self.generator.generate(),
        };

        let mut attempt = 0;
        while attempt < self.regenerate_attempts && self.codes.contains(&code) {
            attempt += 1;
            warn!(
                "Registry: shortcode '{}' already taken, regenerating (attempt {}/{})",
                code, attempt, self.regenerate_attempts
            );
            code = self.generator.generate();
        }

        code
    }
}
