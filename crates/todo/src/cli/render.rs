use colored::Colorize;
use todoapp::model::Todo;

const DONE_MARK: &str = "[x]";
const OPEN_MARK: &str = "[ ]";

/// One line per todo: right-aligned id, checkbox, title, and the owner when it
/// is not the default one.
pub(super) fn todo_line(todo: &Todo) -> String {
    let id = format!("{:>4}.", todo.id).yellow();
    let (mark, title) = if todo.completed {
        (DONE_MARK.green(), todo.title.dimmed())
    } else {
        (OPEN_MARK.normal(), todo.title.normal())
    };

    let mut line = format!("{} {} {}", id, mark, title);
    if todo.user_id != todoapp::model::DEFAULT_USER_ID {
        line.push_str(&format!(" {}", format!("@{}", todo.user_id).dimmed()));
    }
    line
}

pub(super) fn summary_line(todos: &[Todo]) -> String {
    let done = todos.iter().filter(|t| t.completed).count();
    let noun = if todos.len() == 1 { "todo" } else { "todos" };
    format!("{} {}, {} completed", todos.len(), noun, done)
}

pub(super) fn print_todos(todos: &[Todo]) {
    if todos.is_empty() {
        println!("{}", "No todos yet.".dimmed());
        return;
    }
    for todo in todos {
        println!("{}", todo_line(todo));
    }
    println!();
    println!("{}", summary_line(todos).dimmed());
}

pub(super) fn print_todo(todo: &Todo) {
    println!("{}", todo_line(todo));
}

pub(super) fn print_success(message: &str) {
    println!("{}", message.green());
}

pub(super) fn print_info(message: &str) {
    println!("{}", message.dimmed());
}
