//! Form Mode
//!
//! Which todo the add/edit modal is working on.

use crate::models::Todo;

/// What the todo form is doing
#[derive(Clone, Debug, PartialEq)]
pub enum FormMode {
    /// Creating a new todo
    Add,
    /// Editing an existing todo
    Edit(Todo),
}

impl FormMode {
    pub fn heading(&self) -> &'static str {
        match self {
            FormMode::Add => "Add To Do",
            FormMode::Edit(_) => "Edit To Do",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Add => "Add",
            FormMode::Edit(_) => "Update",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    #[test]
    fn labels_follow_mode() {
        assert_eq!(FormMode::Add.heading(), "Add To Do");
        let edit = FormMode::Edit(Todo::new("t1", "Buy milk", Priority::Low));
        assert_eq!(edit.heading(), "Edit To Do");
        assert_eq!(edit.submit_label(), "Update");
    }
}
