//! 文章处理上下文
//!
//! 封装"我正在生成第几篇，共几篇"这一信息

use std::fmt::Display;

/// 文章处理上下文
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleCtx {
    /// 文章序号（从1开始）
    pub number: usize,

    /// 本次任务的文章总数
    pub total: usize,
}

impl ArticleCtx {
    /// 由从 0 开始的循环下标创建
    pub fn new(index: usize, total: usize) -> Self {
        Self {
            number: index + 1,
            total,
        }
    }

    /// 本篇完成后的进度百分比（四舍五入）
    pub fn progress(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        let percent = (self.number * 100 + self.total / 2) / self.total;
        percent.min(100) as u8
    }
}

impl Display for ArticleCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[文章 {}/{}]", self.number, self.total)
    }
}
