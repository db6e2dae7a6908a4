use thiserror::Error;

#[derive(Clone,Copy,Debug,PartialEq,Eq,Error)]
pub enum CreateError {
    #[error("cache capacity must be greater than 0")]
    ZeroCapacity,
}
