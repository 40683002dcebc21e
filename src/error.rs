use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("index list length {0} is not a multiple of three")]
    BrokenIndexList(usize),
    #[error("index {index} is out of bounds for {vertices} vertices")]
    IndexOutOfBounds { index: usize, vertices: usize },
}

pub type RenderResult<T> = Result<T, RenderError>;
