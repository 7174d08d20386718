use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::form::custom_shelf::{reserved_names, validate_shelf_name, CustomShelfForm};
use crate::model::CustomShelf;
use crate::store::BookStore;
use log::info;

/// Opens `form` with the names currently in use.
pub fn open<S: BookStore>(store: &S, form: &mut CustomShelfForm) -> Result<()> {
    let existing = store.list_custom_shelves()?.into_iter().map(|s| s.name);
    form.open(reserved_names(existing));
    Ok(())
}

/// Creates the shelf named in `form` and closes it.
///
/// The name is checked again against the store, not just against the names
/// captured when the form was opened.
pub fn create<S: BookStore>(store: &mut S, form: &mut CustomShelfForm) -> Result<CmdResult> {
    let existing = store.list_custom_shelves()?.into_iter().map(|s| s.name);
    validate_shelf_name(form.name(), &reserved_names(existing))?;

    let shelf = CustomShelf::new(form.name().trim());
    store.save_custom_shelf(&shelf)?;
    info!("Created custom shelf '{}'", shelf.name);
    form.close();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Created shelf {}",
        shelf.name
    )));
    Ok(result.with_custom_shelves(vec![shelf]))
}
