use crate::common::*;

/* tracking API result item -> domain type */
pub trait FromResultItem
where
    Self: Sized,
{
    fn from_result_item(item: &Value) -> Result<Self, anyhow::Error>;
}
