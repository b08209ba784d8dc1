//! Add/edit form lifecycle: validated draft state between open and
//! commit/cancel. The session owns the draft; the target record is never
//! touched until a submit passes validation.

use contracts::domain::common::{Validate, ValidationErrors};

/// What the form is editing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode<Id> {
    Create,
    Edit(Id),
}

/// A validated draft handed to the dispatcher on successful submit
#[derive(Debug, Clone, PartialEq)]
pub struct FormCommit<Id, D> {
    pub mode: FormMode<Id>,
    pub draft: D,
}

enum State<Id, D> {
    Closed,
    Open {
        mode: FormMode<Id>,
        draft: D,
        errors: ValidationErrors,
    },
}

/// The modal form state machine: `Closed -> Open(create|edit) -> Closed`
///
/// Submit validates the whole draft; on failure the session stays open
/// with one message per offending field. Cancel discards the draft.
pub struct FormSession<Id, D> {
    state: State<Id, D>,
}

impl<Id: Copy, D> FormSession<Id, D> {
    pub fn new() -> Self {
        Self {
            state: State::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, State::Open { .. })
    }

    pub fn mode(&self) -> Option<FormMode<Id>> {
        match &self.state {
            State::Open { mode, .. } => Some(*mode),
            State::Closed => None,
        }
    }

    /// Open with an empty (default) draft
    pub fn open_create(&mut self, draft: D) {
        self.state = State::Open {
            mode: FormMode::Create,
            draft,
            errors: ValidationErrors::new(),
        };
    }

    /// Open pre-populated with a copy of the target record's fields
    pub fn open_edit(&mut self, id: Id, draft: D) {
        self.state = State::Open {
            mode: FormMode::Edit(id),
            draft,
            errors: ValidationErrors::new(),
        };
    }

    pub fn draft(&self) -> Option<&D> {
        match &self.state {
            State::Open { draft, .. } => Some(draft),
            State::Closed => None,
        }
    }

    /// Mutable access for field-by-field editing while open
    pub fn draft_mut(&mut self) -> Option<&mut D> {
        match &mut self.state {
            State::Open { draft, .. } => Some(draft),
            State::Closed => None,
        }
    }

    /// Errors from the last failed submit (empty while typing)
    pub fn errors(&self) -> Option<&ValidationErrors> {
        match &self.state {
            State::Open { errors, .. } => Some(errors),
            State::Closed => None,
        }
    }

    /// Discard the draft and close
    pub fn cancel(&mut self) {
        self.state = State::Closed;
    }
}

impl<Id: Copy, D: Validate + Clone> FormSession<Id, D> {
    /// Validate and commit
    ///
    /// Returns the validated draft and closes on success; keeps the
    /// session open with per-field errors on failure. A submit on a
    /// closed session is a no-op.
    pub fn submit(&mut self) -> Option<FormCommit<Id, D>> {
        let State::Open {
            mode,
            draft,
            errors,
        } = &mut self.state
        else {
            return None;
        };

        match draft.validate() {
            Ok(()) => {
                let commit = FormCommit {
                    mode: *mode,
                    draft: draft.clone(),
                };
                self.state = State::Closed;
                Some(commit)
            }
            Err(validation) => {
                *errors = validation;
                None
            }
        }
    }
}

impl<Id: Copy, D> Default for FormSession<Id, D> {
    fn default() -> Self {
        Self::new()
    }
}
