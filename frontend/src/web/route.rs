//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 路径先交给引擎的 `PathClassifier` 判定类别，再映射为页面。

use std::fmt::Display;

use verbbar::PathClassifier;
use verbbar::classifier::segments;
use verbbar_shared::ResourceKind;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    #[default]
    Home,
    /// 博客分类列表，例如 `/blog`
    Category { category: String },
    /// 单篇文章，例如 `/blog/my-slug`
    Post { category: String, slug: String },
    /// 静态页面，`/about` 与 `/static/about` 等价
    Page { name: String },
    /// 交互页面，子路由由工具栏映射为页面内模态框
    Interactive { page: String },
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str, classifier: &PathClassifier) -> Self {
        let segs = segments(path);
        let Some(first) = segs.first() else {
            return Self::Home;
        };
        let category = first.to_string();

        match (classifier.classify(path), segs.as_slice()) {
            (ResourceKind::Blog, [_]) => Self::Category { category },
            (ResourceKind::Blog, [_, slug]) => Self::Post {
                category,
                slug: slug.to_string(),
            },
            (ResourceKind::Static, [_]) => Self::Page { name: category },
            (ResourceKind::Static, [_, name]) => Self::Page {
                name: name.to_string(),
            },
            (ResourceKind::Interactive, [_] | [_, _]) => Self::Interactive { page: category },
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Category { category } => format!("/{category}"),
            Self::Post { category, slug } => format!("/{category}/{slug}"),
            Self::Page { name } => format!("/{name}"),
            Self::Interactive { page } => format!("/{page}"),
            Self::NotFound => "/404".to_string(),
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(path: &str) -> AppRoute {
        AppRoute::from_path(path, &PathClassifier::default())
    }

    #[test]
    fn test_blog_routes() {
        assert_eq!(
            route("/blog"),
            AppRoute::Category {
                category: "blog".into()
            }
        );
        assert_eq!(
            route("/notes/first?draft=1"),
            AppRoute::Post {
                category: "notes".into(),
                slug: "first".into()
            }
        );
    }

    #[test]
    fn test_static_and_interactive_routes() {
        assert_eq!(route("/about"), AppRoute::Page { name: "about".into() });
        assert_eq!(route("/static/about"), AppRoute::Page { name: "about".into() });
        assert_eq!(
            route("/lab/guestbook"),
            AppRoute::Interactive { page: "lab".into() }
        );
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(route("/"), AppRoute::Home);
        assert_eq!(route("/nowhere"), AppRoute::NotFound);
        assert_eq!(route("/blog/a/b"), AppRoute::NotFound);
    }
}
