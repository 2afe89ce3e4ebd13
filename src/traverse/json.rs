//! `Traversable` for `serde_json::Value`.
//!
//! JSON has no opaque objects or fixed-length arrays: objects are
//! Dictionaries, arrays are growable Arrays, everything else is a leaf.

use serde_json::{Map, Value as Json};

use super::{NodeKind, Traversable};

impl Traversable for Json {
    fn kind(&self) -> NodeKind {
        match self {
            Json::Array(_) => NodeKind::Array,
            Json::Object(_) => NodeKind::Dictionary,
            Json::Null | Json::Bool(_) | Json::Number(_) | Json::String(_) => NodeKind::Primitive,
        }
    }

    fn get_key(&self, key: &str) -> Option<&Self> {
        self.as_object().and_then(|o| o.get(key))
    }

    fn get_key_mut(&mut self, key: &str) -> Option<&mut Self> {
        self.as_object_mut().and_then(|o| o.get_mut(key))
    }

    fn is_keyed_settable(&self) -> bool {
        self.is_object()
    }

    fn try_set_key(&mut self, key: &str, value: Self) -> Result<(), Self> {
        match self.as_object_mut() {
            Some(o) => {
                o.insert(key.to_owned(), value);
                Ok(())
            }
            None => Err(value),
        }
    }

    fn len(&self) -> Option<usize> {
        self.as_array().map(Vec::len)
    }

    fn get_index(&self, index: usize) -> Option<&Self> {
        self.as_array().and_then(|a| a.get(index))
    }

    fn get_index_mut(&mut self, index: usize) -> Option<&mut Self> {
        self.as_array_mut().and_then(|a| a.get_mut(index))
    }

    fn is_index_insertable(&self) -> bool {
        self.is_array()
    }

    fn try_set_index(&mut self, index: usize, value: Self) -> Result<(), Self> {
        match self.as_array_mut() {
            Some(a) if index < a.len() => {
                a[index] = value;
                Ok(())
            }
            _ => Err(value),
        }
    }

    fn try_push(&mut self, value: Self) -> Result<(), Self> {
        match self.as_array_mut() {
            Some(a) => {
                a.push(value);
                Ok(())
            }
            None => Err(value),
        }
    }

    fn empty_dictionary() -> Self {
        Json::Object(Map::new())
    }

    fn empty_array() -> Self {
        Json::Array(Vec::new())
    }

    fn placeholder() -> Self {
        Json::Null
    }

    fn is_placeholder(&self) -> bool {
        self.is_null()
    }
}
