// src/document/mod.rs
// The owning object: one element registry plus one matrix store, with the
// save/load codec boundary. This is the whole public contract for external
// collaborators (an editor UI, a game's collision setup, ...); the raw
// matrix is never handed out.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::matrix::{MatrixError, MatrixSnapshot, MatrixStore, ScalarKind, Value};
use crate::registry::{Element, ElementRegistry};

/// Failures at the document save/load boundary.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to encode document: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("failed to decode document: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    /// The decoded flat matrix disagrees with the decoded element count.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// The serialized unit: ordered element names plus the active kind's flat
/// cells. The scalar kind rides in the snapshot's variant tag.
#[derive(Debug, Serialize, Deserialize)]
struct DocumentSnapshot {
    elements: Vec<String>,
    matrix: MatrixSnapshot,
}

/// A named element list and its symmetric relationship matrix.
///
/// The matrix dimension tracks the registry length: every element mutation
/// goes through this type and triggers [`MatrixDocument::sync_dimension`],
/// so the two can only diverge between a direct registry edit and the next
/// sync. Reads and writes address cells by element index pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixDocument {
    registry: ElementRegistry,
    store: MatrixStore,
}

impl MatrixDocument {
    /// An empty document of the given kind. The registry starts empty and
    /// the matrix starts 1x1 until the first dimension sync.
    pub fn new(kind: ScalarKind) -> Self {
        Self {
            registry: ElementRegistry::new(),
            store: MatrixStore::new(kind),
        }
    }

    /// A document pre-populated with elements, matrix already sized to
    /// match and zeroed.
    pub fn with_elements<I, S>(kind: ScalarKind, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut doc = Self {
            registry: ElementRegistry::from_names(names),
            store: MatrixStore::new(kind),
        };
        doc.sync_dimension();
        doc
    }

    pub fn kind(&self) -> ScalarKind {
        self.store.kind()
    }

    /// Current matrix dimension N.
    pub fn dimension(&self) -> usize {
        self.store.dim()
    }

    pub fn registry(&self) -> &ElementRegistry {
        &self.registry
    }

    pub fn element_count(&self) -> usize {
        self.registry.len()
    }

    pub fn element_name(&self, index: usize) -> Option<&str> {
        self.registry.name(index)
    }

    /// Appends an element and grows the matrix by one row/column.
    pub fn add_element(&mut self, name: impl Into<String>) {
        self.registry.push(name);
        self.sync_dimension();
    }

    /// Inserts an element at `index`.
    ///
    /// Matrix values are bound to indices: every existing value past the
    /// insertion point now faces a shifted element. Panics when
    /// `index > len`, like `Vec::insert`.
    pub fn insert_element(&mut self, index: usize, name: impl Into<String>) {
        self.registry.insert(index, name);
        self.sync_dimension();
    }

    /// Removes the element at `index` and shrinks the matrix.
    ///
    /// The matrix drops its LAST row/column, not the removed element's:
    /// surviving values stay at their old indices. Returns None when
    /// `index` is out of range.
    pub fn remove_element(&mut self, index: usize) -> Option<Element> {
        let removed = self.registry.remove(index)?;
        self.sync_dimension();
        Some(removed)
    }

    /// Renames the element at `index` in place. Returns false when out of
    /// range.
    pub fn rename_element(&mut self, index: usize, name: impl Into<String>) -> bool {
        self.registry.rename(index, name)
    }

    /// Swaps two element positions. See [`ElementRegistry::swap`]: matrix
    /// values do not move with the names.
    pub fn swap_elements(&mut self, a: usize, b: usize) {
        self.registry.swap(a, b);
    }

    /// Resizes the matrix to the registry length when the two differ,
    /// preserving the overlapping block. No-op when already in sync.
    pub fn sync_dimension(&mut self) {
        let n = self.registry.len();
        if self.store.dim() != n {
            self.store.resize(n);
        }
    }

    /// Reads the cell relating elements `a` and `b`.
    pub fn read(&self, a: usize, b: usize) -> Result<Value, MatrixError> {
        self.store.read(a, b)
    }

    /// Writes the cell relating elements `a` and `b`, mirroring across the
    /// anti-diagonal. The value's kind must match [`MatrixDocument::kind`].
    pub fn write(&mut self, a: usize, b: usize, value: Value) -> Result<(), MatrixError> {
        self.store.write(a, b, value)
    }

    /// Encodes the document to its compact binary form.
    ///
    /// The live square matrix is flattened here, on every call; the flat
    /// form is the only thing that survives a save/load cycle.
    pub fn to_bytes(&self) -> Result<Vec<u8>, PersistError> {
        let snapshot = DocumentSnapshot {
            elements: self.registry.iter().map(|e| e.name().to_owned()).collect(),
            matrix: self.store.snapshot(),
        };
        debug!(
            kind = ?snapshot.matrix.kind(),
            elements = snapshot.elements.len(),
            cells = snapshot.matrix.len(),
            "encoding matrix document"
        );
        Ok(bincode::serde::encode_to_vec(
            &snapshot,
            bincode::config::standard(),
        )?)
    }

    /// Decodes a document from its binary form, rebuilding the square
    /// matrix from the flat cells.
    ///
    /// Fails with [`MatrixError::LengthMismatch`] (wrapped in
    /// [`PersistError::Matrix`]) when the flat run does not hold exactly
    /// `element_count^2` cells.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PersistError> {
        let (snapshot, _): (DocumentSnapshot, usize) =
            bincode::serde::decode_from_slice(bytes, bincode::config::standard())?;
        let dim = snapshot.elements.len();
        debug!(
            kind = ?snapshot.matrix.kind(),
            elements = dim,
            cells = snapshot.matrix.len(),
            "decoding matrix document"
        );
        let store = MatrixStore::from_snapshot(snapshot.matrix, dim)?;
        Ok(Self {
            registry: ElementRegistry::from_names(snapshot.elements),
            store,
        })
    }
}
