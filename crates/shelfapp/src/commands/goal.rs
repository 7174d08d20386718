use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::model::{GoalType, ReadingGoal, ShelfCategory};
use crate::stats::goal::GoalProgress;
use crate::store::BookStore;
use chrono::NaiveDate;
use log::info;

/// Sets the reading goal, replacing any existing one.
pub fn set<S: BookStore>(store: &mut S, target: u32, goal_type: GoalType) -> Result<CmdResult> {
    if target == 0 {
        return Err(ShelfError::Api(
            "A reading goal needs a target of at least 1".to_string(),
        ));
    }
    let goal = ReadingGoal::new(target, goal_type);
    store.save_reading_goal(&goal)?;
    info!("Reading goal set to {} {:?}", target, goal_type);

    let unit = match goal_type {
        GoalType::Books => "books",
        GoalType::Pages => "pages",
    };
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Reading goal set: {} {} this year",
        target, unit
    )));
    Ok(result)
}

pub fn get<S: BookStore>(store: &S) -> Result<Option<ReadingGoal>> {
    store.reading_goal()
}

pub fn delete<S: BookStore>(store: &mut S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if store.delete_reading_goal()? {
        info!("Reading goal deleted");
        result.add_message(CmdMessage::success("Reading goal deleted"));
    } else {
        result.add_message(CmdMessage::info("No reading goal set"));
    }
    Ok(result)
}

/// Progress towards the current goal, or `None` when no goal is set.
pub fn progress<S: BookStore>(store: &S, today: NaiveDate) -> Result<Option<GoalProgress>> {
    let Some(goal) = store.reading_goal()? else {
        return Ok(None);
    };
    let read = store.find_books_by_shelf_category(ShelfCategory::Read)?;
    Ok(Some(GoalProgress::compute(&goal, &read, today)))
}
