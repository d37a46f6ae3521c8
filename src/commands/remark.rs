use crate::models::{Person, Remark};
use crate::store::{Model, Unique};

use super::{CommandError, CommandResult};

pub const REMARK_WORD: &str = "remark";

pub const REMARK_USAGE: &str = "remark: Edits the remark of the person identified by the index \
    number used in the displayed person list. Existing remark will be overwritten by the input.\n\
    Parameters: INDEX (must be a positive integer) r/[REMARK]\n\
    Example: remark 1 r/Likes to swim.";

/// Replaces the remark of the person shown at `index`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemarkCommand {
    index: usize,
    remark: Remark,
}

impl RemarkCommand {
    pub fn new(index: usize, remark: Remark) -> Self {
        Self { index, remark }
    }

    pub fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = model
            .filtered_get::<Person>(self.index)
            .cloned()
            .ok_or(CommandError::InvalidIndex { kind: Person::KIND })?;

        let edited = target.with_remark(self.remark);
        let feedback = if edited.remark().is_empty() {
            format!("Removed remark from Person: {edited}")
        } else {
            format!("Added remark to Person: {edited}")
        };
        model.set(&target, edited)?;
        Ok(CommandResult::new(feedback))
    }
}
