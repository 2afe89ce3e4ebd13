//! `Traversable` for the crate's own `Value` model.

use crate::model::{PropertyMap, Value};
use super::{NodeKind, Traversable};

impl Traversable for Value {
    fn kind(&self) -> NodeKind {
        match self {
            Value::List(_) | Value::Tuple(_) => NodeKind::Array,
            Value::Map(_) => NodeKind::Dictionary,
            Value::Record(_) => NodeKind::Unknown,
            Value::Null
            | Value::Bool(_)
            | Value::Int(_)
            | Value::Float(_)
            | Value::String(_)
            | Value::Bytes(_)
            | Value::Date(_)
            | Value::DateTime(_) => NodeKind::Primitive,
        }
    }

    fn get_key(&self, key: &str) -> Option<&Self> {
        match self {
            Value::Map(m) => m.get(key),
            Value::Record(r) => r.get(key),
            _ => None,
        }
    }

    fn get_key_mut(&mut self, key: &str) -> Option<&mut Self> {
        match self {
            Value::Map(m) => m.get_mut(key),
            Value::Record(r) => r.get_mut(key),
            _ => None,
        }
    }

    fn is_keyed_settable(&self) -> bool {
        match self {
            Value::Map(_) => true,
            Value::Record(r) => !r.sealed,
            _ => false,
        }
    }

    fn try_set_key(&mut self, key: &str, value: Self) -> Result<(), Self> {
        match self {
            Value::Map(m) => {
                m.insert(key.to_owned(), value);
                Ok(())
            }
            Value::Record(r) => r.try_set(key, value),
            _ => Err(value),
        }
    }

    fn len(&self) -> Option<usize> {
        self.as_slice().map(<[Value]>::len)
    }

    fn get_index(&self, index: usize) -> Option<&Self> {
        self.as_slice().and_then(|items| items.get(index))
    }

    fn get_index_mut(&mut self, index: usize) -> Option<&mut Self> {
        match self {
            Value::List(items) | Value::Tuple(items) => items.get_mut(index),
            _ => None,
        }
    }

    fn is_index_insertable(&self) -> bool {
        matches!(self, Value::List(_))
    }

    fn try_set_index(&mut self, index: usize, value: Self) -> Result<(), Self> {
        match self {
            Value::List(items) if index < items.len() => {
                items[index] = value;
                Ok(())
            }
            _ => Err(value),
        }
    }

    fn try_push(&mut self, value: Self) -> Result<(), Self> {
        match self {
            Value::List(items) => {
                items.push(value);
                Ok(())
            }
            _ => Err(value),
        }
    }

    fn empty_dictionary() -> Self {
        Value::Map(PropertyMap::new())
    }

    fn empty_array() -> Self {
        Value::List(Vec::new())
    }

    fn placeholder() -> Self {
        Value::Null
    }

    fn is_placeholder(&self) -> bool {
        self.is_null()
    }

    fn mutable_copy(&self) -> Option<Self> {
        match self {
            Value::Tuple(items) => Some(Value::List(items.clone())),
            _ => None,
        }
    }
}
