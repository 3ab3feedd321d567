//! Structural patches (RFC 6902 JSON Patch) for the project manifest
//!
//! Operations are applied in order to a working copy of the document, one
//! result per operation. The working copy replaces the original only when
//! every operation succeeded, so a failed patch never leaves a half-edited
//! manifest behind.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::error::{ImportError, patch_failed};

type Result<T, E = ImportError> = std::result::Result<T, E>;

/// A single JSON Patch operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    Add { path: String, value: Value },
    Remove { path: String },
    Replace { path: String, value: Value },
    Move { from: String, path: String },
    Copy { from: String, path: String },
    Test { path: String, value: Value },
}

/// Failure of one operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchError {
    #[error("invalid operation #{index}: {reason}")]
    InvalidOperation { index: usize, reason: String },

    #[error("invalid pointer '{pointer}'")]
    InvalidPointer { pointer: String },

    #[error("path '{pointer}' does not exist")]
    MissingPath { pointer: String },

    #[error("array index '{token}' out of bounds at '{pointer}'")]
    OutOfBounds { pointer: String, token: String },

    #[error("cannot move '{from}' into its own child '{pointer}'")]
    MoveIntoChild { from: String, pointer: String },

    #[error("test failed at '{pointer}'")]
    TestFailed { pointer: String },
}

/// Apply patches to a working copy and report one result per operation
///
/// Malformed operations are reported in place and do not stop the rest.
pub fn apply_each(document: &Value, patches: &[Value]) -> (Value, Vec<Option<PatchError>>) {
    let mut working = document.clone();
    let results = patches
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let operation: PatchOperation = match serde_json::from_value(raw.clone()) {
                Ok(op) => op,
                Err(e) => {
                    return Some(PatchError::InvalidOperation {
                        index,
                        reason: e.to_string(),
                    });
                }
            };
            apply_operation(&mut working, &operation).err()
        })
        .collect();

    (working, results)
}

/// Apply patches all-or-nothing
///
/// On failure `document` is untouched and the error lists every failed operation.
pub fn apply(document: &mut Value, patches: &[Value]) -> Result<()> {
    let (patched, results) = apply_each(document, patches);
    let errors: Vec<String> = results
        .into_iter()
        .flatten()
        .map(|e| e.to_string())
        .collect();

    if !errors.is_empty() {
        return Err(patch_failed(errors));
    }

    *document = patched;
    Ok(())
}

/// Apply one operation in place
pub fn apply_operation(document: &mut Value, operation: &PatchOperation) -> Result<(), PatchError> {
    match operation {
        PatchOperation::Add { path, value } => add(document, path, value.clone()),
        PatchOperation::Remove { path } => remove(document, path).map(|_| ()),
        PatchOperation::Replace { path, value } => replace(document, path, value.clone()),
        PatchOperation::Move { from, path } => {
            if from == path {
                return Ok(());
            }
            if path.starts_with(&format!("{from}/")) {
                return Err(PatchError::MoveIntoChild {
                    from: from.clone(),
                    pointer: path.clone(),
                });
            }
            let value = remove(document, from)?;
            add(document, path, value)
        }
        PatchOperation::Copy { from, path } => {
            let value = lookup(document, from)?.clone();
            add(document, path, value)
        }
        PatchOperation::Test { path, value } => {
            if values_equal(lookup(document, path)?, value) {
                Ok(())
            } else {
                Err(PatchError::TestFailed {
                    pointer: path.clone(),
                })
            }
        }
    }
}

/// Structural equality where numbers compare by value, so `1` equals `1.0`
fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => {
            a == b || matches!((a.as_f64(), b.as_f64()), (Some(x), Some(y)) if x == y)
        }
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| values_equal(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| values_equal(x, y)))
        }
        _ => left == right,
    }
}

/// Split a pointer into its parent pointer and unescaped last token
fn split_pointer(pointer: &str) -> Result<(&str, String), PatchError> {
    let index = pointer.rfind('/').ok_or_else(|| PatchError::InvalidPointer {
        pointer: pointer.to_string(),
    })?;
    if !pointer.starts_with('/') {
        return Err(PatchError::InvalidPointer {
            pointer: pointer.to_string(),
        });
    }
    let token = pointer[index + 1..].replace("~1", "/").replace("~0", "~");
    Ok((&pointer[..index], token))
}

fn lookup<'a>(document: &'a Value, pointer: &str) -> Result<&'a Value, PatchError> {
    document
        .pointer(pointer)
        .ok_or_else(|| PatchError::MissingPath {
            pointer: pointer.to_string(),
        })
}

fn parent_mut<'a>(document: &'a mut Value, parent: &str) -> Result<&'a mut Value, PatchError> {
    document
        .pointer_mut(parent)
        .ok_or_else(|| PatchError::MissingPath {
            pointer: parent.to_string(),
        })
}

fn array_index(token: &str, len: usize, pointer: &str) -> Result<usize, PatchError> {
    let out_of_bounds = || PatchError::OutOfBounds {
        pointer: pointer.to_string(),
        token: token.to_string(),
    };
    if token.len() > 1 && token.starts_with('0') {
        return Err(out_of_bounds());
    }
    match token.parse::<usize>() {
        Ok(index) if index < len => Ok(index),
        _ => Err(out_of_bounds()),
    }
}

fn add(document: &mut Value, pointer: &str, value: Value) -> Result<(), PatchError> {
    if pointer.is_empty() {
        *document = value;
        return Ok(());
    }

    let (parent, token) = split_pointer(pointer)?;
    match parent_mut(document, parent)? {
        Value::Object(map) => {
            map.insert(token, value);
            Ok(())
        }
        Value::Array(items) => {
            let index = if token == "-" {
                items.len()
            } else {
                // inserting right after the last element is allowed
                array_index(&token, items.len() + 1, pointer)?
            };
            items.insert(index, value);
            Ok(())
        }
        _ => Err(PatchError::MissingPath {
            pointer: pointer.to_string(),
        }),
    }
}

fn remove(document: &mut Value, pointer: &str) -> Result<Value, PatchError> {
    let (parent, token) = split_pointer(pointer)?;
    let missing = || PatchError::MissingPath {
        pointer: pointer.to_string(),
    };

    match parent_mut(document, parent)? {
        Value::Object(map) => map.shift_remove(&token).ok_or_else(missing),
        Value::Array(items) => {
            let index = array_index(&token, items.len(), pointer)?;
            Ok(items.remove(index))
        }
        _ => Err(missing()),
    }
}

fn replace(document: &mut Value, pointer: &str, value: Value) -> Result<(), PatchError> {
    let target = document
        .pointer_mut(pointer)
        .ok_or_else(|| PatchError::MissingPath {
            pointer: pointer.to_string(),
        })?;
    *target = value;
    Ok(())
}
