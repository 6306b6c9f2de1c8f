pub mod error;
pub mod normalize;
pub mod parse;
pub mod view;

/// Trait for rendering collaborators that turn a canonical [`view::Document`]
/// into source text. The normalizer makes no assumptions about what a
/// renderer does with fields it does not recognize.
pub trait DocumentRenderer {
    type Error: std::error::Error;
    fn render(&self, document: &view::Document) -> Result<String, Self::Error>;
}
