#![forbid(unsafe_code)]

//! The editor state container.
//!
//! [`EditorStore`] owns the single shared document plus the machinery
//! around it: one [`HistoryEngine`], one [`ActionBatcher`], one
//! [`VersionStore`]. UI fragments never own these — they are injected
//! from here, so `clear()`-on-document-load semantics hold everywhere
//! and history cannot leak across documents.
//!
//! # Mutation discipline
//!
//! All mutation is whole-value replacement of the block list. Fine-
//! grained edits go through [`update_block`](EditorStore::update_block)
//! and are batched; structurally distinct operations — insert, delete,
//! reorder, paste — bypass batching (flush first, then a standalone
//! history push), so each remains its own undo step even inside the
//! quiet window of a preceding text edit.
//!
//! Callers must invoke [`flush_edits`](EditorStore::flush_edits) at
//! every exit point from an editing session (blur, selection change,
//! unmount); otherwise the final in-progress edit loses its own undo
//! step.
//!
//! # Template loading
//!
//! [`load_template`](EditorStore::load_template) validates fully, then
//! replaces atomically. A template that fails validation leaves the
//! document, history, batcher and versions untouched.

use tracing::{debug, trace};
use web_time::Instant;

use mailsmith_history::{ActionBatcher, BatchConfig, HistoryConfig, HistoryEngine};
use mailsmith_model::{
    Block, BlockFactory, BlockId, EmailDocument, TemplateError, tree, validate_document,
};

use crate::versions::{RetentionPolicy, Version, VersionKind, VersionStore};

/// Owns the live document and every piece of editing state around it.
pub struct EditorStore {
    document: EmailDocument,
    history: HistoryEngine<Vec<Block>>,
    batcher: ActionBatcher<Vec<Block>>,
    versions: VersionStore,
}

impl EditorStore {
    /// Build a store around a document, with default configuration.
    #[must_use]
    pub fn new(document: EmailDocument) -> Self {
        Self::with_config(
            document,
            HistoryConfig::default(),
            BatchConfig::default(),
            RetentionPolicy::default(),
        )
    }

    /// Build a store with explicit limits.
    #[must_use]
    pub fn with_config(
        document: EmailDocument,
        history: HistoryConfig,
        batch: BatchConfig,
        retention: RetentionPolicy,
    ) -> Self {
        let mut history = HistoryEngine::new(history);
        history.push(document.blocks.clone());
        Self {
            document,
            history,
            batcher: ActionBatcher::new(batch),
            versions: VersionStore::new(retention),
        }
    }

    // ====================================================================
    // Read access
    // ====================================================================

    /// The live document.
    #[must_use]
    pub fn document(&self) -> &EmailDocument {
        &self.document
    }

    /// The live block list.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.document.blocks
    }

    /// Whether an undo step is available (a queued batch counts — it
    /// becomes its own step when flushed).
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.batcher.has_pending() || self.history.can_undo()
    }

    /// Whether a redo step is available. A queued batch invalidates
    /// the redo future the moment it lands.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.batcher.has_pending() && self.history.can_redo()
    }

    /// Retained versions, oldest first.
    #[must_use]
    pub fn versions(&self) -> &[Version] {
        self.versions.versions()
    }

    // ====================================================================
    // Batched edits
    // ====================================================================

    /// Apply a fine-grained edit to one block (anywhere in the tree)
    /// and queue the result for a coalesced history push.
    pub fn update_block(&mut self, id: BlockId, patch: impl FnOnce(&mut Block)) -> bool {
        if !tree::update_block(&mut self.document.blocks, id, patch) {
            return false;
        }
        trace!(block = %id, "queueing batched edit");
        self.batcher.queue_change(self.document.blocks.clone());
        true
    }

    /// Release any queued batch into history immediately. Must be
    /// called at every editing-session exit point. Idempotent.
    pub fn flush_edits(&mut self) {
        if let Some(snapshot) = self.batcher.flush() {
            debug!("flushing batched edit into history");
            self.history.push(snapshot);
        }
    }

    /// Drive the quiet-period timer: push the queued batch once its
    /// deadline has passed.
    pub fn tick_at(&mut self, now: Instant) {
        if let Some(snapshot) = self.batcher.poll_at(now) {
            debug!("quiet period elapsed; pushing batched edit");
            self.history.push(snapshot);
        }
    }

    /// [`tick_at`](Self::tick_at) against the real clock.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    // ====================================================================
    // Structural edits (standalone history entries)
    // ====================================================================

    /// Insert a block at a top-level position.
    pub fn insert_block(&mut self, index: usize, block: Block) {
        self.flush_edits();
        tree::insert_block(&mut self.document.blocks, index, block);
        self.push_structural("insert");
    }

    /// Delete a block anywhere in the tree.
    pub fn delete_block(&mut self, id: BlockId) -> Option<Block> {
        self.flush_edits();
        let removed = tree::remove_block(&mut self.document.blocks, id)?;
        self.push_structural("delete");
        Some(removed)
    }

    /// Move a top-level block to a new position.
    pub fn move_block(&mut self, id: BlockId, new_index: usize) -> bool {
        self.flush_edits();
        if !tree::move_block(&mut self.document.blocks, id, new_index) {
            return false;
        }
        self.push_structural("reorder");
        true
    }

    /// Paste a copied block at a top-level position. Ids are
    /// reassigned so global uniqueness holds.
    pub fn paste_block(&mut self, index: usize, mut block: Block, factory: &mut BlockFactory) {
        self.flush_edits();
        factory.reassign_ids(&mut block);
        tree::insert_block(&mut self.document.blocks, index, block);
        self.push_structural("paste");
    }

    fn push_structural(&mut self, op: &'static str) {
        debug!(op, "pushing structural edit");
        self.history.push(self.document.blocks.clone());
    }

    // ====================================================================
    // Undo / redo
    // ====================================================================

    /// Step the document back one history entry. Flushes any queued
    /// batch first so the in-progress edit is undoable as its own step.
    pub fn undo(&mut self) -> bool {
        self.flush_edits();
        match self.history.undo() {
            Some(snapshot) => {
                debug!("undo");
                self.document.blocks = (*snapshot).clone();
                true
            }
            None => false,
        }
    }

    /// Step the document forward one history entry.
    pub fn redo(&mut self) -> bool {
        self.flush_edits();
        match self.history.redo() {
            Some(snapshot) => {
                debug!("redo");
                self.document.blocks = (*snapshot).clone();
                true
            }
            None => false,
        }
    }

    // ====================================================================
    // Template loading
    // ====================================================================

    /// Validate fully, then atomically replace the document.
    ///
    /// On error nothing changes — not the document, not history, not
    /// the queued batch, not versions. On success the history is
    /// cleared and re-seeded with the new document (undo never crosses
    /// a document boundary) and versions of the old document are
    /// dropped.
    pub fn load_template(&mut self, template: EmailDocument) -> Result<(), TemplateError> {
        validate_document(&template)?;

        debug!(blocks = template.blocks.len(), "loading template");
        self.batcher.cancel();
        self.document = template;
        self.history.clear();
        self.history.push(self.document.blocks.clone());
        self.versions.clear();
        Ok(())
    }

    // ====================================================================
    // Versions
    // ====================================================================

    /// Record the current block list as a version. Returns its id.
    pub fn create_version(&mut self, kind: VersionKind, message: Option<String>) -> u64 {
        self.flush_edits();
        debug!(?kind, "creating version");
        self.versions
            .create_version(kind, message, self.document.blocks.clone())
    }

    /// Restore a version by id.
    ///
    /// The current state is checkpointed first, so a restore is itself
    /// undoable through the version list, and the restore lands in
    /// undo history as a standalone step.
    pub fn restore_version(&mut self, id: u64) -> bool {
        let Some(blocks) = self.versions.get(id).map(|v| v.blocks.clone()) else {
            return false;
        };
        self.flush_edits();
        self.versions.create_version(
            VersionKind::Checkpoint,
            Some("before restore".into()),
            self.document.blocks.clone(),
        );
        debug!(version = id, "restoring version");
        self.document.blocks = blocks;
        self.history.push(self.document.blocks.clone());
        true
    }
}
