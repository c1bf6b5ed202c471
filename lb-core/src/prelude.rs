pub use anyhow::{
    Context,
    Result,
};

pub use crate::errors::*;
pub use crate::model::{
    Family,
    NodeId,
    NodeRecord,
    PropertyType,
    TypeId,
    TypeRecord,
    Value,
};
pub use crate::store::MetadataStore;
