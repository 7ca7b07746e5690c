mod entity;
mod field;

pub(crate) use entity::ParsedEntity;
use field::ParsedField;
