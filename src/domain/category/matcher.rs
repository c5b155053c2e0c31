//! 分类匹配 - 纯函数，无 I/O
//!
//! 图书与分类之间不存储关联，归属关系由本模块按需计算。
//! 匹配规则（大小写不敏感）:
//! 1. 体裁与分类标识相等
//! 2. 体裁包含分类标识
//! 3. 分类标识包含体裁
//!
//! 规则只做字面包含，不做同义词展开：分类 "sci-fi" 不会匹配
//! 体裁 "Science Fiction"。除大小写折叠外不做任何归一化
//! （不去空白、不去标点）。

/// 可参与分类匹配的对象
///
/// 应用层的持久化记录与领域聚合都实现此 trait，
/// 使过滤逻辑与存储表示解耦。
pub trait Categorized {
    fn genre(&self) -> &str;
}

impl Categorized for crate::domain::book::Book {
    fn genre(&self) -> &str {
        self.genre().as_str()
    }
}

/// 判断体裁是否归属于某个分类标识
///
/// 空分类标识不匹配任何体裁：字面规则下空串会通过规则 3
/// 匹配所有图书，该入口只会来自畸形路由，这里显式拦截。
/// 空体裁保留字面行为（空串是任何标识的子串）。
pub fn matches(category_id: &str, genre: &str) -> bool {
    if category_id.is_empty() {
        return false;
    }

    let category_id = category_id.to_lowercase();
    let genre = genre.to_lowercase();

    genre == category_id || genre.contains(&category_id) || category_id.contains(&genre)
}

/// 过滤出归属于指定分类的图书
///
/// 保持输入顺序，不修改元素，结果是输入的有序子序列。
pub fn filter_by_category<T: Categorized>(category_id: &str, items: Vec<T>) -> Vec<T> {
    items
        .into_iter()
        .filter(|item| matches(category_id, item.genre()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestBook {
        title: &'static str,
        genre: &'static str,
    }

    impl Categorized for TestBook {
        fn genre(&self) -> &str {
            self.genre
        }
    }

    fn book(title: &'static str, genre: &'static str) -> TestBook {
        TestBook { title, genre }
    }

    #[test]
    fn test_exact_match_is_case_insensitive() {
        assert!(matches("fantasy", "Fantasy"));
        assert!(matches("FANTASY", "fantasy"));
    }

    #[test]
    fn test_genre_containing_category_matches() {
        // "sci" 是 "science fiction" 的子串
        assert!(matches("sci", "Science Fiction"));
    }

    #[test]
    fn test_category_containing_genre_matches() {
        // "mystery" 是 "mystery-thriller" 的子串
        assert!(matches("mystery-thriller", "Mystery"));
    }

    #[test]
    fn test_unrelated_strings_do_not_match() {
        assert!(!matches("romance", "Horror"));
    }

    #[test]
    fn test_no_synonym_expansion() {
        // 字面包含不成立，即使语义相同
        assert!(!matches("sci-fi", "Science Fiction"));
    }

    #[test]
    fn test_empty_category_id_matches_nothing() {
        assert!(!matches("", "Drama"));
        assert!(!matches("", ""));
    }

    #[test]
    fn test_empty_genre_keeps_literal_containment() {
        // 空体裁是任何标识的子串，字面规则保留
        assert!(matches("drama", ""));
    }

    #[test]
    fn test_reflexive_for_non_empty() {
        for s in ["fantasy", "Mystery-Thriller", "历史"] {
            assert!(matches(s, s));
        }
    }

    #[test]
    fn test_case_insensitivity_property() {
        let cases = [("Fantasy", "fantasy"), ("SCI", "Science Fiction"), ("x", "y")];
        for (id, genre) in cases {
            assert_eq!(
                matches(id, genre),
                matches(&id.to_uppercase(), &genre.to_lowercase())
            );
        }
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let books = vec![
            book("Dune", "Science Fiction"),
            book("Dracula", "Horror"),
            book("Neuromancer", "science fiction"),
            book("Foundation", "Science Fiction"),
        ];

        let matched = filter_by_category("science fiction", books);
        let titles: Vec<&str> = matched.iter().map(|b| b.title).collect();
        assert_eq!(titles, vec!["Dune", "Neuromancer", "Foundation"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let books = vec![
            book("Dune", "Science Fiction"),
            book("Dracula", "Horror"),
        ];

        let once = filter_by_category("science fiction", books);
        let titles_once: Vec<&str> = once.iter().map(|b| b.title).collect();

        let twice = filter_by_category("science fiction", once);
        let titles_twice: Vec<&str> = twice.iter().map(|b| b.title).collect();

        assert_eq!(titles_once, titles_twice);
    }

    #[test]
    fn test_filter_with_no_match_is_empty() {
        let books = vec![book("Dracula", "Horror")];
        assert!(filter_by_category("romance", books).is_empty());
    }

    #[test]
    fn test_filter_over_domain_books() {
        use crate::domain::book::{Author, Book, Genre, Title};

        let make = |title: &str, genre: &str| {
            Book::new(
                Title::new(title).unwrap(),
                Author::new("佚名").unwrap(),
                Genre::new(genre).unwrap(),
            )
        };
        let books = vec![make("呼啸山庄", "Romance"), make("德古拉", "Horror")];

        let matched = filter_by_category("romance", books);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title().as_str(), "呼啸山庄");
    }
}
