//! 分类表 - 静态只读配置
//!
//! 分类在启动时装配为普通查找表传入，运行期不可变。
//! 来源为内置默认表或 TOML 配置文件。

use serde::Deserialize;
use thiserror::Error;

/// 分类表错误
#[derive(Debug, Error)]
pub enum CategoryError {
    #[error("分类标识不能为空")]
    EmptyId,

    #[error("分类 {0} 缺少显示名称")]
    EmptyLabel(String),

    #[error("重复的分类标识: {0}")]
    DuplicateId(String),

    #[error("分类配置解析失败: {0}")]
    ParseError(String),
}

/// 分类条目
///
/// id 是匹配键（来自路由参数），label/icon 仅用于展示。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    id: String,
    label: String,
    #[serde(default)]
    icon: Option<String>,
}

impl Category {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        icon: Option<String>,
    ) -> Result<Self, CategoryError> {
        let id = id.into();
        let label = label.into();
        if id.is_empty() {
            return Err(CategoryError::EmptyId);
        }
        if label.is_empty() {
            return Err(CategoryError::EmptyLabel(id));
        }
        Ok(Self { id, label, icon })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }
}

/// TOML 配置文件结构
#[derive(Debug, Deserialize)]
struct CategoryFile {
    categories: Vec<Category>,
}

/// 分类查找表
///
/// 保持配置中的条目顺序，按标识精确查找。
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    entries: Vec<Category>,
}

impl CategoryRegistry {
    /// 从分类条目列表装配，拒绝空标识与重复标识
    pub fn new(entries: Vec<Category>) -> Result<Self, CategoryError> {
        let mut seen: std::collections::HashSet<String> = std::collections::HashSet::new();
        for entry in &entries {
            if entry.id.is_empty() {
                return Err(CategoryError::EmptyId);
            }
            if !seen.insert(entry.id.clone()) {
                return Err(CategoryError::DuplicateId(entry.id.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// 内置默认分类表
    pub fn with_defaults() -> Self {
        let entries = vec![
            ("fantasy", "Fantasy", "sparkles"),
            ("sci-fi", "Science Fiction", "rocket"),
            ("mystery-thriller", "Mystery & Thriller", "search"),
            ("romance", "Romance", "heart"),
            ("horror", "Horror", "ghost"),
            ("biography", "Biography", "user"),
            ("history", "History", "landmark"),
            ("non-fiction", "Non-Fiction", "book-open"),
        ]
        .into_iter()
        .map(|(id, label, icon)| Category {
            id: id.to_string(),
            label: label.to_string(),
            icon: Some(icon.to_string()),
        })
        .collect();

        // 默认表不含空/重复标识
        Self { entries }
    }

    /// 从 TOML 文本解析分类表
    ///
    /// 格式:
    /// ```toml
    /// [[categories]]
    /// id = "fantasy"
    /// label = "Fantasy"
    /// icon = "sparkles"
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, CategoryError> {
        let file: CategoryFile =
            toml::from_str(text).map_err(|e| CategoryError::ParseError(e.to_string()))?;
        Self::new(file.categories)
    }

    /// 按标识精确查找分类
    ///
    /// 查不到不是错误：页面仍以原始标识渲染，无图标。
    pub fn get(&self, id: &str) -> Option<&Category> {
        self.entries.iter().find(|c| c.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
