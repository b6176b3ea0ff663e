//! HTML pages rendered with minijinja.
//!
//! Both templates are compiled into the binary and registered once at
//! startup. Names end in `.html`, so minijinja auto-escapes every value.

use minijinja::{context, Environment};
use todo_core::Todo;

use crate::error::ServerResult;

const INDEX_TEMPLATE: &str = "index.html";
const EDIT_TEMPLATE: &str = "edit.html";

pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new(debug: bool) -> ServerResult<Self> {
        let mut env = Environment::new();
        env.set_debug(debug);
        env.add_template(INDEX_TEMPLATE, include_str!("../templates/index.html"))?;
        env.add_template(EDIT_TEMPLATE, include_str!("../templates/edit.html"))?;
        Ok(Self { env })
    }

    /// The list page: every todo plus the add form.
    pub fn index(&self, todos: &[Todo]) -> ServerResult<String> {
        let template = self.env.get_template(INDEX_TEMPLATE)?;
        Ok(template.render(context! { todos => todos })?)
    }

    /// The edit form for one todo.
    pub fn edit(&self, todo: &Todo) -> ServerResult<String> {
        let template = self.env.get_template(EDIT_TEMPLATE)?;
        Ok(template.render(context! { todo => todo })?)
    }
}
