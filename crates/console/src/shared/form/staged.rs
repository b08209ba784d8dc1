//! Multi-step form on top of [`FormSession`]: an ordered sequence of named
//! stages with submit reachable only from the final one.

use contracts::domain::common::{Validate, ValidationErrors};

use super::{FormCommit, FormSession};

/// An ordered, enumerated form stage
pub trait Stage: Copy + PartialEq + Sized + 'static {
    /// All stages in traversal order
    const ALL: &'static [Self];

    /// Tab title shown in the UI
    fn title(&self) -> &'static str;
}

/// A form session traversed stage by stage
///
/// `next`/`previous` move between stages without resetting entered
/// values — the draft lives in the underlying session the whole time.
pub struct StagedForm<S: Stage, Id, D> {
    session: FormSession<Id, D>,
    stage_index: usize,
    _stages: std::marker::PhantomData<S>,
}

impl<S: Stage, Id: Copy, D> StagedForm<S, Id, D> {
    pub fn new() -> Self {
        Self {
            session: FormSession::new(),
            stage_index: 0,
            _stages: std::marker::PhantomData,
        }
    }

    pub fn open_create(&mut self, draft: D) {
        self.session.open_create(draft);
        self.stage_index = 0;
    }

    pub fn open_edit(&mut self, id: Id, draft: D) {
        self.session.open_edit(id, draft);
        self.stage_index = 0;
    }

    pub fn is_open(&self) -> bool {
        self.session.is_open()
    }

    pub fn current_stage(&self) -> Option<S> {
        if self.session.is_open() {
            S::ALL.get(self.stage_index).copied()
        } else {
            None
        }
    }

    pub fn is_final_stage(&self) -> bool {
        self.session.is_open() && self.stage_index + 1 == S::ALL.len()
    }

    /// Advance to the next stage; entered values are preserved
    pub fn next(&mut self) {
        if self.session.is_open() && self.stage_index + 1 < S::ALL.len() {
            self.stage_index += 1;
        }
    }

    /// Go back one stage; entered values are preserved
    pub fn previous(&mut self) {
        if self.session.is_open() && self.stage_index > 0 {
            self.stage_index -= 1;
        }
    }

    pub fn draft(&self) -> Option<&D> {
        self.session.draft()
    }

    pub fn draft_mut(&mut self) -> Option<&mut D> {
        self.session.draft_mut()
    }

    pub fn errors(&self) -> Option<&ValidationErrors> {
        self.session.errors()
    }

    pub fn cancel(&mut self) {
        self.session.cancel();
        self.stage_index = 0;
    }
}

impl<S: Stage, Id: Copy, D: Validate + Clone> StagedForm<S, Id, D> {
    /// Validate and commit the entire draft, not just the last stage's fields
    ///
    /// Guarded: a submit from any stage but the final one is rejected.
    pub fn submit(&mut self) -> Option<FormCommit<Id, D>> {
        if !self.is_final_stage() {
            return None;
        }
        let commit = self.session.submit();
        if commit.is_some() {
            self.stage_index = 0;
        }
        commit
    }
}

impl<S: Stage, Id: Copy, D> Default for StagedForm<S, Id, D> {
    fn default() -> Self {
        Self::new()
    }
}
