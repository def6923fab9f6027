use super::*;

#[derive(Debug, Error)]
pub enum SortError {
    #[error("invalid direction value [{0}]")]
    InvalidDirection(String),

    #[error("entity {0} must declare its sortable fields")]
    MissingSortableDeclaration(&'static str),
}
