pub mod memory;
pub mod model;
pub mod repository;

// 公開APIの再エクスポート

// model.rsから
pub use model::{iso8601, Article, NewArticle};

// repository.rsから
pub use repository::{ArticleStore, PgArticleStore};

// memory.rsから
pub use memory::InMemoryArticleStore;
